// File:    wordlist.rs
// Date:    2026-08-28
//
// Description: Loads candidate words from a newline-delimited file, keeping only lines within a length range.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads a word list from a newline-delimited text file.
///
/// A line is retained if and only if its character count lies within
/// `[min_len, max_len]`. Lines are kept in file order, so the same file
/// and bounds always produce the same sequence. An empty result is not an
/// error here; the passphrase builder rejects empty lists when invoked.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn load(path: &Path, min_len: usize, max_len: usize) -> std::io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let len = line.chars().count();
        if len >= min_len && len <= max_len {
            words.push(line);
        }
    }
    log::debug!(
        "loaded {} words from '{}' within {min_len}..={max_len}",
        words.len(),
        path.display()
    );
    Ok(words)
}
