//! ABOUTME: Predicate natives — EQ, POS, NEG, ATOM

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::fetch;
use crate::value::Value;

pub fn register(env: &mut Environment) {
    env.define("EQ", Value::Native { name: "EQ".to_string(), func: eq });
    env.define("POS", Value::Native { name: "POS".to_string(), func: pos });
    env.define("NEG", Value::Native { name: "NEG".to_string(), func: neg });
    env.define(
        "ATOM",
        Value::Native { name: "ATOM".to_string(), func: atom },
    );
}

fn number_arg(function: &str, arg: &Value, env: &mut Environment) -> Result<f64, LispError> {
    let fetched = fetch(arg, env)?;
    fetched.as_number().ok_or_else(|| {
        LispError::runtime(
            function,
            format!("expects a number, got {}", fetched.type_name()),
        )
    })
}

pub fn eq(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("EQ", "2", args.len()));
    }
    let left = number_arg("EQ", &args[0], env)?;
    let right = number_arg("EQ", &args[1], env)?;
    Ok(Value::from_bool(left == right))
}

pub fn pos(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("POS", "1", args.len()));
    }
    let n = number_arg("POS", &args[0], env)?;
    Ok(Value::from_bool(n >= 0.0))
}

pub fn neg(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("NEG", "1", args.len()));
    }
    let n = number_arg("NEG", &args[0], env)?;
    Ok(Value::from_bool(n < 0.0))
}

pub fn atom(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("ATOM", "1", args.len()));
    }
    let fetched = fetch(&args[0], env)?;
    let is_atom = matches!(fetched, Value::Atom { .. }) || fetched.is_nil();
    Ok(Value::from_bool(is_atom))
}
