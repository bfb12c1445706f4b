//! Main anagram solver interface

use super::ordering::{dedup_sorted, sort_by_length};
use super::permutations::generate_permutations;
use crate::core::{Letters, WordSet};

/// Words found for one set of letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// Matching dictionary words, shortest first, ties in lexicographic order
    pub words: Vec<String>,
    /// Candidates generated, duplicates included
    pub generated: usize,
    /// Candidates left after deduplication
    pub unique: usize,
}

/// Anagram solver
///
/// Borrows a dictionary and checks every arrangement of the input letters against it.
pub struct Solver<'a> {
    dictionary: &'a WordSet,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a WordSet) -> Self {
        Self { dictionary }
    }

    /// Find every dictionary word spelled by some arrangement of `letters`
    ///
    /// Each letter position is used at most once per word.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::{Letters, WordSet};
    /// use anagram_solver::solver::Solver;
    ///
    /// let dictionary: WordSet = ["cat", "at", "a", "act", "dog"].into_iter().collect();
    /// let solution = Solver::new(&dictionary).find_words(&Letters::new("cat"));
    ///
    /// assert_eq!(solution.words, vec!["a", "at", "act", "cat"]);
    /// ```
    #[must_use]
    pub fn find_words(&self, letters: &Letters) -> Solution {
        let candidates = generate_permutations(letters);
        let generated = candidates.len();

        let candidates = dedup_sorted(candidates);
        let unique = candidates.len();

        let mut words: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| self.dictionary.search(candidate))
            .collect();
        sort_by_length(&mut words);

        Solution {
            words,
            generated,
            unique,
        }
    }
}
