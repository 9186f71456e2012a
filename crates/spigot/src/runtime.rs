//! Process boundary: how the binary writes its output and terminates.
//!
//! Stdout only ever carries the complete digit stream or a single fault line.

use std::fmt::Display;
use std::io::{self, Write};

/// Exit status after a normal run
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status after a fault or failed check
pub const EXIT_FAULT: i32 = 1;

/// Write the digit stream as-is, with no trailing newline
pub fn write_digits<W: Write>(out: &mut W, digits: &str) -> io::Result<()> {
    out.write_all(digits.as_bytes())?;
    out.flush()
}

/// Write one diagnostic line
pub fn write_fault<W: Write>(out: &mut W, message: impl Display) -> io::Result<()> {
    let message = message.to_string();
    let line = message.lines().next().unwrap_or_default();
    writeln!(out, "{line}")?;
    out.flush()
}

/// Write the digit stream to stdout
pub fn emit(digits: &str) -> io::Result<()> {
    write_digits(&mut io::stdout().lock(), digits)
}

/// Terminate the process with `code`
pub fn exit(code: i32) -> ! {
    std::process::exit(code)
}

/// Report a fault on stdout and terminate with [`EXIT_FAULT`]
pub fn fault(message: impl Display) -> ! {
    // Nothing more can be reported if stdout itself is gone
    let _ = write_fault(&mut io::stdout().lock(), message);
    exit(EXIT_FAULT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpigotError;

    #[test]
    fn digits_written_without_newline() {
        let mut out = Vec::new();
        write_digits(&mut out, "31415926").unwrap();
        assert_eq!(out, b"31415926");
    }

    #[test]
    fn fault_is_one_line() {
        let mut out = Vec::new();
        write_fault(&mut out, SpigotError::InvalidArgument { requested: 0 }).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "digit count must be positive (got 0)\n"
        );

        let mut out = Vec::new();
        write_fault(&mut out, "first\nsecond").unwrap();
        assert_eq!(out, b"first\n");
    }
}
