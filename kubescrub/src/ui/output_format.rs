//! Formatting helpers for user-facing progress and diagnostic lines.
//!
//! These lines are program output, not logs: they are printed regardless of
//! the log level and are coloured only when the target stream is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Prints a plain informational line.
pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.cyan())
    } else {
        writeln!(writer, "{}", message)
    }
}

/// Prints a success line.
pub fn print_success_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.green().bold())
    } else {
        writeln!(writer, "{}", message)
    }
}

/// Prints a warning line.
pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.yellow())
    } else {
        writeln!(writer, "{}", message)
    }
}

/// Prints an error line.
pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.red())
    } else {
        writeln!(writer, "{}", message)
    }
}
