// ABOUTME: Environment module for managing case-insensitive symbol bindings

use crate::value::Value;
use std::collections::HashMap;

/// A case-insensitive mapping from symbol name to value.
///
/// Function application does not share mutable state with its caller: a
/// call extends the environment by cloning the entire binding map and
/// adding one entry for the formal parameter (see [`Environment::extend`]).
/// Writes inside the callee therefore never propagate back out. This is the
/// "snapshot copy" behaviour the language's call semantics depend on.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Binds `name` (case-insensitively) to `value` in this environment.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_uppercase(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(&name.to_uppercase())
    }

    /// Produces a new, independent environment containing every entry of
    /// `self` plus one binding for `param`. Used for user-function calls;
    /// the returned frame is discarded when the call returns.
    pub fn extend(&self, param: &str, value: Value) -> Environment {
        let mut bindings = self.bindings.clone();
        bindings.insert(param.to_uppercase(), value);
        Environment { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_get_is_case_insensitive() {
        let mut env = Environment::new();
        env.define("x", Value::atom("1", false));
        assert!(env.get("x").is_some());
        assert!(env.get("X").is_some());
        assert!(env.get("Y").is_none());
    }

    #[test]
    fn extend_does_not_mutate_parent() {
        let mut parent = Environment::new();
        parent.define("x", Value::atom("1", false));

        let child = parent.extend("y", Value::atom("2", false));
        assert!(child.get("x").is_some());
        assert!(child.get("y").is_some());
        assert!(parent.get("y").is_none());
    }

    #[test]
    fn child_rebinding_is_invisible_to_parent() {
        let mut parent = Environment::new();
        parent.define("x", Value::atom("1", false));

        let mut child = parent.extend("y", Value::atom("2", false));
        child.define("x", Value::atom("99", false));

        match parent.get("x") {
            Some(Value::Atom { text, .. }) => assert_eq!(text, "1"),
            _ => panic!("parent binding should be unchanged"),
        }
    }
}
