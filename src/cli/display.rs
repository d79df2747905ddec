//! ANSI display helpers for the CLI.
//!
//! Colors switch off automatically when stdout is not a terminal, so
//! piping `crex` into another tool yields clean text.

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";

/// Wrap `text` in an ANSI code when stdout is a TTY.
pub fn styled(code: &str, text: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// `N document(s)` / `N term(s)` summary line.
pub fn count_label(count: usize, noun: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{}", count, noun, plural)
}
