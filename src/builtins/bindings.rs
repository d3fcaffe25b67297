//! ABOUTME: Binding-form natives — DEF, SET, SETQ

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::fetch;
use crate::value::Value;

pub fn register(env: &mut Environment) {
    env.define("DEF", Value::Native { name: "DEF".to_string(), func: def });
    env.define("SET", Value::Native { name: "SET".to_string(), func: set });
    env.define(
        "SETQ",
        Value::Native { name: "SETQ".to_string(), func: setq },
    );
}

fn is_reserved(text: &str) -> bool {
    text.eq_ignore_ascii_case("TRUE") || text.eq_ignore_ascii_case("NIL")
}

/// `(DEF name (param) body)` — name and params are taken raw (unfetched):
/// their syntactic shape, not their value, is what's being validated.
pub fn def(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 3 {
        return Err(LispError::arity("DEF", "3", args.len()));
    }

    let name = match &args[0] {
        Value::Atom { text, quoted: false } => text.clone(),
        _ => return Err(LispError::runtime("DEF", "name must be an unquoted atom")),
    };

    let params = match &args[1] {
        Value::List { items, quoted: false } => items,
        _ => {
            return Err(LispError::runtime(
                "DEF",
                "params must be an unquoted list",
            ))
        }
    };
    if params.len() != 1 {
        return Err(LispError::runtime(
            "DEF",
            format!("params must contain exactly 1 atom, got {}", params.len()),
        ));
    }
    let param = match &params[0] {
        Value::Atom { text, quoted: false } if !is_reserved(text) && Value::parse_number(text).is_none() => {
            text.clone()
        }
        _ => {
            return Err(LispError::runtime(
                "DEF",
                "the parameter must be an unquoted atom, not TRUE/NIL or a number",
            ))
        }
    };

    let body = match &args[2] {
        Value::List { quoted: false, .. } => args[2].clone(),
        _ => return Err(LispError::runtime("DEF", "body must be an unquoted list")),
    };

    let method = Value::Method {
        name: name.clone(),
        param: param.to_uppercase(),
        body: Box::new(body),
    };
    env.define(&name, method.clone());
    Ok(method)
}

/// `(SET 'name value)` — both sides are fetched; the left must fetch to a
/// quoted atom (spec Open Question 3), which is why the caller has to quote
/// it explicitly.
pub fn set(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("SET", "2", args.len()));
    }
    let left = fetch(&args[0], env)?;
    let name = match &left {
        Value::Atom { text, quoted: true } if !is_reserved(text) => text.clone(),
        _ => {
            return Err(LispError::runtime(
                "SET",
                "left-hand side must fetch to a quoted atom, not TRUE/NIL",
            ))
        }
    };
    let right = fetch(&args[1], env)?;
    env.define(&name, right.clone());
    Ok(right)
}

/// `(SETQ name value)` — the left side is taken raw and must already be an
/// unquoted atom; only the right side is fetched.
pub fn setq(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("SETQ", "2", args.len()));
    }
    let name = match &args[0] {
        Value::Atom { text, quoted: false } if !is_reserved(text) => text.clone(),
        _ => {
            return Err(LispError::runtime(
                "SETQ",
                "left-hand side must be an unquoted atom, not TRUE/NIL",
            ))
        }
    };
    let right = fetch(&args[1], env)?;
    env.define(&name, right.clone());
    Ok(right)
}
