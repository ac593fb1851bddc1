// xregex/src/ui/output_format.rs
//! Formats status messages for stderr, coloured only when the stream is a
//! terminal.

use std::io::{self, Write};

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

fn print_tagged<W: Write>(
    writer: &mut W,
    tag: &str,
    message: &str,
    paint: fn(&str) -> String,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", paint(tag), message)
    } else {
        writeln!(writer, "{} {}", tag, message)
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_tagged(writer, "info:", message, |t| t.cyan().to_string(), supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_tagged(writer, "warning:", message, |t| t.yellow().bold().to_string(), supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_tagged(writer, "error:", message, |t| t.red().bold().to_string(), supports_color)
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), io::stderr().is_terminal());
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), io::stderr().is_terminal());
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), io::stderr().is_terminal());
}
