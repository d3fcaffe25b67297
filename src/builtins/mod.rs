//! # Native operators
//!
//! The builtin operator set, organized into the groups spec 4.4 lists them
//! in: arithmetic, predicates, list primitives, console output, binding
//! forms, and `EVAL`. Each sub-module owns a `register` function that binds
//! its natives into an [`Environment`].

use crate::env::Environment;
use std::cell::Cell;

pub mod arithmetic;
pub mod bindings;
pub mod console;
pub mod control;
pub mod lists;
pub mod predicates;

// ============================================================================
// Colour flag for PRINT and the fatal-error banner
// ============================================================================
//
// `PRINT` is a `NativeFn` — a plain `fn` pointer with no room for extra
// context — so whether ANSI colour is on cannot be threaded through its
// argument list. It is stored here instead, set once by `main` before any
// statement runs. This mirrors the sandbox-storage pattern used elsewhere
// for process-wide state built-ins need but don't receive as an argument.

thread_local! {
    static COLOR_ENABLED: Cell<bool> = const { Cell::new(false) };
}

pub fn set_color_enabled(enabled: bool) {
    COLOR_ENABLED.with(|c| c.set(enabled));
}

pub fn color_enabled() -> bool {
    COLOR_ENABLED.with(|c| c.get())
}

/// Registers every native operator spec 4.4 names.
pub fn register_builtins(env: &mut Environment) {
    arithmetic::register(env);
    predicates::register(env);
    lists::register(env);
    console::register(env);
    bindings::register(env);
    control::register(env);
}
