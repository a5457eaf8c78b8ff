//! Tokenizer collaborator: file reading and token normalization.
//!
//! Everything here runs before keys reach the map, which compares keys
//! with plain `Eq` and performs no normalization of its own.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read a whole file into one growable string buffer.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let file = File::open(path)?;
    let mut buf = String::new();
    BufReader::new(file).read_to_string(&mut buf)?;
    Ok(buf)
}

/// Drop every non-alphanumeric character (interior ones included) and
/// lowercase what remains. `"Mat."` becomes `"mat"`, `"don't"` becomes
/// `"dont"`.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lazy sequence of normalized tokens: whitespace-delimited words with
/// non-alphanumeric characters stripped, lowercased, empties discarded.
/// Restartable only by calling again on the same text.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize)
        .filter(|t| !t.is_empty())
}
