//! ABOUTME: EVAL, the one control-flow native

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::{execute, fetch};
use crate::value::Value;

pub fn register(env: &mut Environment) {
    env.define(
        "EVAL",
        Value::Native { name: "EVAL".to_string(), func: eval },
    );
}

/// Fetches its argument; if the result is a list, rewraps it as unquoted
/// (copying its immediate elements) and executes it. Anything else is
/// returned as-is.
pub fn eval(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("EVAL", "1", args.len()));
    }
    let fetched = fetch(&args[0], env)?;
    match fetched {
        Value::List { items, .. } => execute(&Value::list(items, false), env),
        other => Ok(other),
    }
}
