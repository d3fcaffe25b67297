//! ABOUTME: PRINT, the single console-output native

use crate::env::Environment;
use crate::error::LispError;
use crate::printer::render;
use crate::value::Value;

pub fn register(env: &mut Environment) {
    env.define(
        "PRINT",
        Value::Native { name: "PRINT".to_string(), func: print },
    );
}

/// Renders each argument through the pretty-printer, joins them with single
/// spaces, and writes one line to stdout. Returns nil regardless of how many
/// arguments were given.
pub fn print(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    let color = crate::builtins::color_enabled();
    let mut rendered = Vec::with_capacity(args.len());
    for arg in args {
        rendered.push(render(arg, env, color)?);
    }
    println!("{}", rendered.join(" "));
    Ok(Value::nil())
}
