// ABOUTME: Configuration and constants for the Lisp interpreter

#[allow(dead_code)]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ANSI SGR colour codes used by the pretty-printer and the fatal-error
/// banner when `--color` is passed. Applied only to leaf tokens, never to
/// surrounding parentheses (spec 4.5).
pub mod color {
    pub const RESET: &str = "\x1b[0m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREY: &str = "\x1b[90m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";

    /// Wraps `text` in `code` when `enabled`, otherwise returns it unchanged.
    pub fn paint(text: &str, code: &str, enabled: bool) -> String {
        if enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
