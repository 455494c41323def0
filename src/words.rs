//! Word list loading
//!
//! Reads candidate secrets from a plain text file, one word per line.
//! Filtering against the game settings happens in
//! [`crate::secret::SecretSource::from_words`], so this loader only trims
//! and drops blank lines.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::words::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(words)
}
