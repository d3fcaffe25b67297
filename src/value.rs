// ABOUTME: Value types representing the interpreter's runtime data

use crate::env::Environment;
use crate::error::LispError;

/// Signature every native operator implements.
///
/// Natives receive the *raw* (un-fetched) tail of the call that invoked them,
/// plus mutable access to the environment, and decide for themselves which
/// arguments to resolve via [`crate::eval::fetch`]. This asymmetry with user
/// [`Value::Method`] application (which always receives one pre-fetched
/// argument) is deliberate: natives such as `SETQ` and `DEF` must inspect the
/// syntactic shape of an argument before deciding whether to resolve it.
pub type NativeFn = fn(&[Value], &mut Environment) -> Result<Value, LispError>;

/// A runtime value. Four variants, closed and small, so pattern matching on
/// the kind is preferred throughout the crate over dynamic dispatch.
#[derive(Debug, Clone)]
pub enum Value {
    /// A bare token: a symbol name, a number, or one of the reserved words
    /// `TRUE`/`NIL`. Carries its original (case-preserving) text and the
    /// quote/"escape" bit set during parsing.
    Atom { text: String, quoted: bool },
    /// An ordered sequence of parameters. Carries its own quote bit; nested
    /// lists never inherit an enclosing list's quote flag (only nested atoms
    /// do, at parse time).
    List { items: Vec<Value>, quoted: bool },
    /// A user-defined function. Always unquoted. `param` is the single
    /// formal parameter's upper-cased name; `body` is the unevaluated body
    /// list, executed against a fresh environment on every call.
    Method {
        name: String,
        param: String,
        body: Box<Value>,
    },
    /// A builtin operator. Always unquoted, never has a parent.
    Native { name: String, func: NativeFn },
}

impl Value {
    pub fn atom(text: impl Into<String>, quoted: bool) -> Value {
        Value::Atom {
            text: text.into(),
            quoted,
        }
    }

    pub fn list(items: Vec<Value>, quoted: bool) -> Value {
        Value::List { items, quoted }
    }

    /// The canonical empty list. Falsy; printed as `NIL`.
    pub fn nil() -> Value {
        Value::List {
            items: Vec::new(),
            quoted: false,
        }
    }

    /// The canonical true atom. Truthy; printed as `TRUE`.
    pub fn truth() -> Value {
        Value::Atom {
            text: "TRUE".to_string(),
            quoted: false,
        }
    }

    /// Maps a Rust bool to the two canonical truthiness values (spec
    /// invariant: truthiness is defined only for these two atoms).
    pub fn from_bool(b: bool) -> Value {
        if b {
            Value::truth()
        } else {
            Value::nil()
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::List { items, .. } if items.is_empty())
    }

    pub fn is_true_atom(&self) -> bool {
        matches!(self, Value::Atom { text, .. } if text.eq_ignore_ascii_case("TRUE"))
    }

    pub fn is_quoted(&self) -> bool {
        match self {
            Value::Atom { quoted, .. } | Value::List { quoted, .. } => *quoted,
            Value::Method { .. } | Value::Native { .. } => false,
        }
    }

    /// Whether this atom's text parses as a finite number ("any token whose
    /// text parses as a finite number is a self-evaluating numeric atom").
    /// Deliberately excludes infinities/NaN: a source token like `inf` must
    /// still resolve as a variable lookup, not self-evaluate.
    pub fn is_numeric_atom(&self) -> bool {
        matches!(self, Value::Atom { text, .. } if Self::parse_number(text).is_some())
    }

    /// Coerces an already-resolved value to an `f64`, for arithmetic and
    /// predicate natives. Unlike [`Self::is_numeric_atom`], this accepts any
    /// value the interpreter itself produced, including the infinities and
    /// NaN that `DIV`/`EXP` construct via [`Self::number`] — otherwise a
    /// computed `inf` could never be fed back into `ADD` or `EQ`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Atom { text, .. } => Self::parse_number_any(text),
            _ => None,
        }
    }

    pub(crate) fn parse_number(text: &str) -> Option<f64> {
        Self::parse_number_any(text).filter(|n| n.is_finite())
    }

    fn parse_number_any(text: &str) -> Option<f64> {
        text.parse::<f64>().ok()
    }

    /// Builds the numeric atom an arithmetic native hands back. Always
    /// quoted: a result such as `inf` (from a division by zero) or `NaN`
    /// would otherwise fail the "finite number" test that `fetch` uses to
    /// decide a *source* token is self-evaluating, and would be looked up as
    /// a variable named `INF`. Quoting sidesteps that — like the quoted
    /// copies `CDR`/`CONS`/`REVERSE` return, this is a result, not a symbol.
    pub fn number(n: f64) -> Value {
        let text = if n.is_nan() {
            "NaN".to_string()
        } else if n.is_infinite() {
            n.to_string()
        } else if n.fract() == 0.0 && n.abs() < 1e15 {
            format!("{}", n as i64)
        } else {
            n.to_string()
        };
        Value::Atom { text, quoted: true }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Atom { .. } => "atom",
            Value::List { .. } => "list",
            Value::Method { .. } => "function",
            Value::Native { .. } => "native",
        }
    }

}
