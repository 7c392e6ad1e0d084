//! Collects the source code typed by the user when no input file is given.

use std::io::BufRead;

/// The prompt printed before reading the source code from a terminal.
pub const PROMPT: &str = "Enter your code (finish with an empty line):";

/// Reads lines from the given reader until the first empty line (or the end of the input) and
/// joins them with `\n`.
///
/// The empty line itself is not part of the source code.
///
/// # Errors
/// Any I/O error returned by the reader, including invalid UTF-8.
pub fn read_interactive(reader: impl BufRead) -> std::io::Result<String> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;

        if line.is_empty() {
            break;
        }

        lines.push(line);
    }

    Ok(lines.join("\n"))
}
