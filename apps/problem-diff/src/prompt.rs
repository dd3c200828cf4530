//! Interactive path prompts.

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

pub const FIRST_INPUT: &str = "Please enter the first file path:";
pub const SECOND_INPUT: &str = "Please enter the second file path:";
pub const ONLY_FIRST_OUTPUT: &str = "Enter output path for problems only in the first analysis:";
pub const ONLY_SECOND_OUTPUT: &str = "Enter output path for problems only in the second analysis:";
pub const BOTH_OUTPUT: &str = "Enter output path for common problems:";

/// Print `prompt` and read one trimmed, non-empty line.
///
/// End of input and blank answers are both `InvalidInputPath`.
pub fn request_file_path<R: BufRead, W: Write>(
    prompt: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<String> {
    let _ = writeln!(writer, "{}", prompt);
    let _ = writer.flush();
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => Err(Error::InvalidInputPath),
        Ok(_) => {
            let answer = line.trim();
            if answer.is_empty() {
                Err(Error::InvalidInputPath)
            } else {
                Ok(answer.to_string())
            }
        }
    }
}

/// Use `given` when present, otherwise prompt for it.
pub fn path_or_prompt<R: BufRead, W: Write>(
    given: Option<String>,
    prompt: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<String> {
    match given {
        Some(p) if !p.trim().is_empty() => Ok(p.trim().to_string()),
        Some(_) => Err(Error::InvalidInputPath),
        None => request_file_path(prompt, reader, writer),
    }
}
