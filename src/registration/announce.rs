//! Stdout announcement of the advertisement.
//!
//! The discovery side consumes stdout line by line, so the advertisement
//! must go out as exactly one line, flushed immediately.

use std::io::Write;

use super::metadata::{build_advertisement, RegistrationSchema};
use crate::error::Result;

/// Write one line to stdout and flush it.
///
/// Uses an explicit `\n` rather than `println!`, which can emit `\r\n` on
/// Windows; the discovery side waits for a complete line.
///
/// # Errors
///
/// Returns an I/O error if the write or flush fails.
pub fn write_stdout_line(line: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Announce the advertised settings on stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn announce(schema: &RegistrationSchema) -> Result<()> {
    let line = build_advertisement(schema);
    write_stdout_line(&line)?;
    Ok(())
}
