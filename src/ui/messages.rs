use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_ERR: &str = "❌";

/// One-line failure report. Goes to stdout: every failure is reported
/// as a single line on standard output, next to the normal output.
pub fn error<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}
