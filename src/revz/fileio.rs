//! Line-oriented file loading.

use crate::error::{Result, RevzError};
use std::fs;
use std::path::Path;

/// Reads the file into one string per line, terminators stripped.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = read_file(path)?;
    Ok(lines_of(&text).map(str::to_string).collect())
}

/// Reads the file, parsing every line as a float.
///
/// Fails with [`RevzError::Parse`] naming the path, 1-based line number,
/// and the offending text.
pub fn read_numbers(path: &Path) -> Result<Vec<f64>> {
    let text = read_file(path)?;
    let mut numbers = Vec::new();
    for (i, line) in lines_of(&text).enumerate() {
        let value: f64 = line.trim().parse().map_err(|_| RevzError::Parse {
            path: path.to_path_buf(),
            line: i + 1,
            text: line.to_string(),
        })?;
        numbers.push(value);
    }
    Ok(numbers)
}

/// Number of lines in the file. An empty file has zero lines.
pub fn line_count(path: &Path) -> Result<usize> {
    let text = read_file(path)?;
    Ok(lines_of(&text).count())
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(RevzError::FileNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(RevzError::Io)
}

// str::lines strips both "\n" and "\r\n" and does not invent an empty
// final line after a trailing terminator, which is exactly the contract.
fn lines_of(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
}
