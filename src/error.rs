// ABOUTME: Error types for parse and evaluation failures

use thiserror::Error;

/// The one error type that crosses every module boundary (parser,
/// environment, evaluator, natives). Every failure the interpreter can
/// produce is fatal and surfaces to the top level as a single message —
/// there is no recovery, so one flat enum with descriptive variants is
/// enough; nothing downstream needs to branch on error *kind* beyond
/// deciding how to render it.
#[derive(Error, Debug, Clone)]
pub enum LispError {
    // ===== Parser =====
    #[error("cannot quote mid-atom")]
    QuoteMidAtom,

    #[error("unexpected closing parenthesis")]
    StrayClosingParen,

    #[error("atom outside any list")]
    AtomOutsideList,

    #[error("unclosed statement")]
    UnclosedStatement,

    // ===== Name resolution =====
    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    // ===== Type, shape, and other runtime errors, attributed to the offending native =====
    #[error("{function}: {message}")]
    RuntimeError { function: String, message: String },

    /// Arity error with the native's name, expected count/range, and actual count.
    #[error("{function}: expected {expected} argument{}, got {actual}", if *.expected == "1" { "" } else { "s" })]
    ArityError {
        function: String,
        expected: String,
        actual: usize,
    },

    // ===== Top-level I/O, reported through the same fatal-error banner =====
    #[error("cannot read source file {path}: {message}")]
    SourceUnreadable { path: String, message: String },
}

impl LispError {
    pub fn runtime(function: &str, message: impl Into<String>) -> Self {
        LispError::RuntimeError {
            function: function.to_string(),
            message: message.into(),
        }
    }

    pub fn arity(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        LispError::ArityError {
            function: function.to_string(),
            expected: expected.into(),
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_message_has_function_prefix() {
        let err = LispError::runtime("CAR", "requires a non-empty list");
        assert_eq!(err.to_string(), "CAR: requires a non-empty list");
    }

    #[test]
    fn arity_error_pluralizes_correctly() {
        let one = LispError::arity("SQUARE", "1", 0);
        assert_eq!(one.to_string(), "SQUARE: expected 1 argument, got 0");

        let many = LispError::arity("ADD", "at least 2", 1);
        assert_eq!(
            many.to_string(),
            "ADD: expected at least 2 arguments, got 1"
        );
    }
}
