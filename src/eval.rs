// ABOUTME: The evaluator: fetch (resolve a value) and execute (apply a list as a call)

use crate::env::Environment;
use crate::error::LispError;
use crate::value::Value;

/// Resolves `value` to its effective runtime form.
///
/// Order of checks matters: the `NIL` text check happens before the
/// unquoted-lookup check (a quoted `NIL` atom still canonicalises to the
/// empty list), and the lookup check excludes `TRUE`, `NIL`, and numeric
/// atoms before ever touching the environment.
pub fn fetch(value: &Value, env: &mut Environment) -> Result<Value, LispError> {
    if let Value::Atom { text, .. } = value {
        if text.eq_ignore_ascii_case("NIL") {
            return Ok(Value::nil());
        }
    }

    match value {
        Value::Atom { text, quoted } => {
            let upper = text.to_uppercase();
            if !quoted && upper != "TRUE" && !value.is_numeric_atom() {
                return env
                    .get(&upper)
                    .cloned()
                    .ok_or_else(|| LispError::UnknownVariable(text.clone()));
            }
            Ok(value.clone())
        }
        Value::List { items, quoted } => {
            if !quoted && !items.is_empty() {
                let result = execute(value, env)?;
                fetch(&result, env)
            } else {
                Ok(value.clone())
            }
        }
        Value::Method { .. } | Value::Native { .. } => Ok(value.clone()),
    }
}

/// Applies `value` (which must be a list) as a function call.
pub fn execute(value: &Value, env: &mut Environment) -> Result<Value, LispError> {
    let (items, quoted) = match value {
        Value::List { items, quoted } => (items, *quoted),
        other => {
            return Err(LispError::runtime(
                "EXECUTE",
                format!("cannot call a non-list value ({})", other.type_name()),
            ))
        }
    };

    if quoted || items.is_empty() {
        return Ok(value.clone());
    }

    let head_name = match &items[0] {
        Value::Atom { text, .. } => text.clone(),
        other => {
            return Err(LispError::runtime(
                "EXECUTE",
                format!("head of a call must be an atom, got {}", other.type_name()),
            ))
        }
    };
    let tail = &items[1..];
    let upper_name = head_name.to_uppercase();

    match env.get(&upper_name).cloned() {
        Some(Value::Native { func, .. }) => func(tail, env),
        Some(Value::Method { param, body, .. }) => {
            if tail.is_empty() {
                return Err(LispError::runtime(
                    &head_name,
                    "requires at least 1 argument",
                ));
            }
            let bound = fetch(&tail[0], env)?;
            let mut call_env = env.extend(&param, bound);
            execute(&body, &mut call_env)
        }
        Some(other) => Err(LispError::runtime(
            &head_name,
            format!("{} is not callable", other.type_name()),
        )),
        None => match cadr_letters(&upper_name) {
            Some(letters) => apply_cadr(letters, tail, env),
            None => Err(LispError::UnknownFunction(head_name)),
        },
    }
}

/// If `name` matches `C[AD]+R` (at least one middle letter, all `A`/`D`),
/// returns the middle letters. `name` must already be upper-cased.
fn cadr_letters(name: &str) -> Option<&str> {
    let bytes = name.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'C' || bytes[bytes.len() - 1] != b'R' {
        return None;
    }
    let middle = &name[1..name.len() - 1];
    if middle.is_empty() || !middle.bytes().all(|b| b == b'A' || b == b'D') {
        return None;
    }
    Some(middle)
}

/// Synthesises a `c[ad]+r` call from the `CAR`/`CDR` natives, consuming
/// `letters` right-to-left (innermost first) — so `CADR` applies `CDR` then
/// `CAR`, matching conventional Lisp semantics (spec Open Question 4).
fn apply_cadr(letters: &str, tail: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    let mut current = tail.to_vec();
    for letter in letters.bytes().rev() {
        let native_name = if letter == b'A' { "CAR" } else { "CDR" };
        let func = match env.get(native_name).cloned() {
            Some(Value::Native { func, .. }) => func,
            _ => return Err(LispError::runtime(native_name, "is not defined")),
        };
        current = vec![func(&current, env)?];
    }
    Ok(current.into_iter().next().expect("letters is non-empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;

    fn env_with_builtins() -> Environment {
        let mut env = Environment::new();
        register_builtins(&mut env);
        env
    }

    #[test]
    fn fetch_resolves_bound_variable() {
        let mut env = env_with_builtins();
        env.define("X", Value::atom("5", false));
        let result = fetch(&Value::atom("x", false), &mut env).unwrap();
        match result {
            Value::Atom { text, .. } => assert_eq!(text, "5"),
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn fetch_unknown_variable_errors() {
        let mut env = env_with_builtins();
        assert!(matches!(
            fetch(&Value::atom("y", false), &mut env),
            Err(LispError::UnknownVariable(_))
        ));
    }

    #[test]
    fn fetch_nil_atom_returns_fresh_empty_list() {
        let mut env = env_with_builtins();
        let result = fetch(&Value::atom("nil", false), &mut env).unwrap();
        assert!(result.is_nil());
    }

    #[test]
    fn fetch_quoted_atom_is_unchanged() {
        let mut env = env_with_builtins();
        let result = fetch(&Value::atom("X", true), &mut env).unwrap();
        match result {
            Value::Atom { text, quoted } => {
                assert_eq!(text, "X");
                assert!(quoted);
            }
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn execute_quoted_list_returns_unchanged() {
        let mut env = env_with_builtins();
        let list = Value::list(vec![Value::atom("A", false)], true);
        let result = execute(&list, &mut env).unwrap();
        assert!(result.is_quoted());
    }

    #[test]
    fn execute_dispatches_to_native() {
        let mut env = env_with_builtins();
        let call = Value::list(
            vec![
                Value::atom("ADD", false),
                Value::atom("1", false),
                Value::atom("2", false),
            ],
            false,
        );
        let result = execute(&call, &mut env).unwrap();
        assert_eq!(result.as_number(), Some(3.0));
    }

    #[test]
    fn execute_calls_user_method_with_one_fetched_argument() {
        let mut env = env_with_builtins();
        env.define(
            "DOUBLE",
            Value::Method {
                name: "DOUBLE".to_string(),
                param: "N".to_string(),
                body: Box::new(Value::list(
                    vec![
                        Value::atom("ADD", false),
                        Value::atom("N", false),
                        Value::atom("N", false),
                    ],
                    false,
                )),
            },
        );
        let call = Value::list(
            vec![Value::atom("DOUBLE", false), Value::atom("21", false)],
            false,
        );
        let result = execute(&call, &mut env).unwrap();
        assert_eq!(result.as_number(), Some(42.0));
    }

    #[test]
    fn execute_method_ignores_extra_arguments() {
        let mut env = env_with_builtins();
        env.define(
            "FIRST",
            Value::Method {
                name: "FIRST".to_string(),
                param: "N".to_string(),
                body: Box::new(Value::atom("N", false)),
            },
        );
        let call = Value::list(
            vec![
                Value::atom("FIRST", false),
                Value::atom("1", false),
                Value::atom("2", false),
            ],
            false,
        );
        let result = execute(&call, &mut env).unwrap();
        assert_eq!(result.as_number(), Some(1.0));
    }

    #[test]
    fn execute_method_with_no_arguments_errors() {
        let mut env = env_with_builtins();
        env.define(
            "FIRST",
            Value::Method {
                name: "FIRST".to_string(),
                param: "N".to_string(),
                body: Box::new(Value::atom("N", false)),
            },
        );
        let call = Value::list(vec![Value::atom("FIRST", false)], false);
        assert!(execute(&call, &mut env).is_err());
    }

    #[test]
    fn cadr_family_applies_cdr_then_car() {
        let mut env = env_with_builtins();
        let quoted = Value::list(
            vec![
                Value::atom("1", true),
                Value::atom("2", true),
                Value::atom("3", true),
            ],
            true,
        );
        let call = Value::list(vec![Value::atom("CADR", false), quoted], false);
        let result = execute(&call, &mut env).unwrap();
        assert_eq!(result.as_number(), Some(2.0));
    }

    #[test]
    fn unknown_head_that_is_not_cadr_shaped_errors() {
        let mut env = env_with_builtins();
        let call = Value::list(vec![Value::atom("FROBNICATE", false)], false);
        assert!(matches!(
            execute(&call, &mut env),
            Err(LispError::UnknownFunction(_))
        ));
    }
}
