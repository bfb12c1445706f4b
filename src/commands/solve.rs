//! Anagram solving command
//!
//! Loads a dictionary and finds every word spelled by the given letters.

use crate::core::Letters;
use crate::error::Result;
use crate::solver::{Solver, arrangement_count};
use crate::wordlists::load_from_file;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Letter counts above this take noticeably long to enumerate
pub const PRACTICAL_LETTER_LIMIT: usize = 10;

/// Configuration for one solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub dictionary_path: PathBuf,
    pub letters: String,
}

impl SolveConfig {
    #[must_use]
    pub fn new(dictionary_path: impl Into<PathBuf>, letters: impl Into<String>) -> Self {
        Self {
            dictionary_path: dictionary_path.into(),
            letters: letters.into(),
        }
    }
}

/// Result of a solver run
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub letters: String,
    /// Matching words, shortest first
    pub words: Vec<String>,
    pub dictionary_words: usize,
    pub generated: usize,
    pub unique: usize,
    pub elapsed: Duration,
}

/// Load the configured dictionary and solve for the configured letters
///
/// # Errors
///
/// Returns an error if the dictionary cannot be read. Nothing is solved in that case.
pub fn solve(config: &SolveConfig) -> Result<SolveResult> {
    let start = Instant::now();

    let dictionary = load_from_file(&config.dictionary_path)?;
    info!(
        path = %config.dictionary_path.display(),
        words = dictionary.len(),
        "loaded dictionary"
    );

    let letters = Letters::new(&config.letters);
    warn_if_impractical(&letters);

    let solution = Solver::new(&dictionary).find_words(&letters);
    debug!(
        generated = solution.generated,
        unique = solution.unique,
        "candidates checked"
    );
    info!(matches = solution.words.len(), "solve finished");

    Ok(SolveResult {
        letters: config.letters.clone(),
        words: solution.words,
        dictionary_words: dictionary.len(),
        generated: solution.generated,
        unique: solution.unique,
        elapsed: start.elapsed(),
    })
}

/// Log a warning when `letters` is too long to enumerate quickly
///
/// The run still proceeds. Returns whether the warning was emitted.
fn warn_if_impractical(letters: &Letters) -> bool {
    if letters.len() <= PRACTICAL_LETTER_LIMIT {
        return false;
    }

    warn!(
        letters = letters.len(),
        candidates = arrangement_count(letters.len()),
        "large letter set; enumerating every arrangement may take a long time"
    );
    true
}
