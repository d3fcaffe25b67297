// ABOUTME: Pretty-printer that renders a Value back to text, per spec 4.5

use crate::config::color::{self, CYAN, GREEN, GREY, YELLOW};
use crate::env::Environment;
use crate::error::LispError;
use crate::eval::{execute, fetch};
use crate::value::Value;

/// Renders `value` to a display string: fetches it first, then formats the
/// fetched form recursively. Quoted list elements are themselves rendered
/// through this same routine (spec: "each `ei` is recursively printed"), so
/// a nested unquoted list inside quoted data is executed when its turn to
/// print comes around — the printer does not special-case that away.
pub fn render(value: &Value, env: &mut Environment, color: bool) -> Result<String, LispError> {
    let fetched = fetch(value, env)?;
    render_fetched(&fetched, env, color)
}

fn render_fetched(value: &Value, env: &mut Environment, color: bool) -> Result<String, LispError> {
    match value {
        Value::Atom { text, .. } => {
            let paint = if value.is_true_atom() || value.as_number().is_some() {
                YELLOW
            } else {
                GREEN
            };
            Ok(color::paint(text, paint, color))
        }
        Value::List { items, quoted: true } if !items.is_empty() => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(render(item, env, color)?);
            }
            Ok(format!("( {} )", parts.join(" ")))
        }
        Value::List { items, .. } if items.is_empty() => Ok(color::paint("NIL", GREY, color)),
        Value::List { .. } => {
            let result = execute(value, env)?;
            render_fetched(&result, env, color)
        }
        Value::Method { name, .. } => {
            Ok(color::paint(&format!("<Function: {name}>"), CYAN, color))
        }
        Value::Native { name, .. } => Ok(color::paint(&format!("<Native: {name}>"), CYAN, color)),
    }
}
