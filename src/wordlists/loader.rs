//! Dictionary loading utilities
//!
//! Builds a [`WordSet`] from a word-per-line source, streaming one line at a time.

use crate::core::WordSet;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Load a dictionary from a file
///
/// Each line is one word, taken verbatim apart from its line terminator.
/// Empty lines are skipped, so the empty word is never part of a loaded
/// dictionary and never reported as a match. Use [`WordSet::insert`] directly
/// if it is needed.
///
/// # Errors
///
/// Returns [`Error::Dictionary`] if the file cannot be opened or a line cannot
/// be read (including invalid UTF-8). No partially built set is returned.
///
/// # Examples
/// ```no_run
/// use anagram_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordSet> {
    let path = path.as_ref();
    let dictionary_error = |source| Error::Dictionary {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(dictionary_error)?;
    let words = load_from_reader(BufReader::new(file)).map_err(dictionary_error)?;

    debug!(
        path = %path.display(),
        words = words.len(),
        nodes = words.node_count(),
        "dictionary loaded"
    );
    Ok(words)
}

/// Load a dictionary from any buffered reader
///
/// Both `\n` and `\r\n` line endings are accepted. Empty lines are skipped.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails.
///
/// # Examples
/// ```
/// use anagram_solver::wordlists::loader::load_from_reader;
///
/// let words = load_from_reader("cat\r\nat\n\nact\n".as_bytes()).unwrap();
/// assert_eq!(words.len(), 3);
/// assert!(words.search("cat"));
/// ```
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<WordSet> {
    let mut words = WordSet::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            words.insert(&line);
        }
    }
    Ok(words)
}

/// Build a dictionary from an in-memory word list
///
/// # Examples
/// ```
/// use anagram_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "act", "cat"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordSet {
    slice.iter().collect()
}
