//! ABOUTME: List-primitive natives — CAR, CDR, CONS, REVERSE

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::fetch;
use crate::value::Value;

pub fn register(env: &mut Environment) {
    env.define("CAR", Value::Native { name: "CAR".to_string(), func: car });
    env.define("CDR", Value::Native { name: "CDR".to_string(), func: cdr });
    env.define(
        "CONS",
        Value::Native { name: "CONS".to_string(), func: cons },
    );
    env.define(
        "REVERSE",
        Value::Native { name: "REVERSE".to_string(), func: reverse },
    );
}

fn list_items(function: &str, arg: &Value, env: &mut Environment) -> Result<Vec<Value>, LispError> {
    match fetch(arg, env)? {
        Value::List { items, .. } => Ok(items),
        other => Err(LispError::runtime(
            function,
            format!("expects a list, got {}", other.type_name()),
        )),
    }
}

pub fn car(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("CAR", "1", args.len()));
    }
    let items = list_items("CAR", &args[0], env)?;
    items
        .into_iter()
        .next()
        .ok_or_else(|| LispError::runtime("CAR", "requires a non-empty list"))
}

pub fn cdr(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("CDR", "1", args.len()));
    }
    let mut items = list_items("CDR", &args[0], env)?;
    if items.is_empty() {
        return Err(LispError::runtime("CDR", "requires a non-empty list"));
    }
    Ok(Value::list(items.split_off(1), true))
}

pub fn cons(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("CONS", "2", args.len()));
    }
    let left = fetch(&args[0], env)?;
    let right_items = list_items("CONS", &args[1], env)?;
    let mut items = vec![left];
    items.extend(right_items);
    Ok(Value::list(items, true))
}

pub fn reverse(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("REVERSE", "1", args.len()));
    }
    let mut items = list_items("REVERSE", &args[0], env)?;
    items.reverse();
    Ok(Value::list(items, true))
}
