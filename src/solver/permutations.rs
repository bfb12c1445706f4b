//! Candidate generation
//!
//! Arrangements are built over letter *positions*. A repeated letter therefore
//! yields the same string more than once; callers collapse those with
//! [`dedup_sorted`](super::dedup_sorted).

use crate::core::Letters;

/// Upper bound on the candidate buffer reserved up front
const MAX_PREALLOCATED: usize = 1 << 20;

/// Every arrangement of `length` distinct positions, in generation order
///
/// At each depth unused positions are tried in ascending index order.
/// `length == 0` yields `[""]`, and a `length` longer than the pool yields nothing.
///
/// # Examples
/// ```
/// use anagram_solver::core::Letters;
/// use anagram_solver::solver::permutations_of_length;
///
/// let letters = Letters::new("xy");
/// assert_eq!(permutations_of_length(&letters, 2), vec!["xy", "yx"]);
/// ```
#[must_use]
pub fn permutations_of_length(letters: &Letters, length: usize) -> Vec<String> {
    let mut out = Vec::new();
    collect_length(letters.as_slice(), length, &mut out);
    out
}

/// All arrangements of every length from 0 to `letters.len()`, sorted
///
/// The result is in lexicographic order and still contains duplicates when
/// the input repeats a letter. Its size is the sum of falling factorials
/// `N!/(N-L)!`, so this is only practical for roughly ten letters or fewer.
///
/// # Examples
/// ```
/// use anagram_solver::core::Letters;
/// use anagram_solver::solver::generate_permutations;
///
/// let letters = Letters::new("xy");
/// assert_eq!(generate_permutations(&letters), vec!["", "x", "xy", "y", "yx"]);
/// ```
#[must_use]
pub fn generate_permutations(letters: &Letters) -> Vec<String> {
    let letters = letters.as_slice();
    let mut out = Vec::with_capacity(arrangement_count(letters.len()).min(MAX_PREALLOCATED));
    for length in 0..=letters.len() {
        collect_length(letters, length, &mut out);
    }
    out.sort_unstable();
    out
}

/// Total number of arrangements over all lengths for `n` positions
///
/// Saturates at `usize::MAX`.
#[must_use]
pub fn arrangement_count(n: usize) -> usize {
    let mut total: usize = 0;
    let mut term: usize = 1;
    for remaining in (1..=n).rev() {
        if total == usize::MAX {
            return total;
        }
        total = total.saturating_add(term);
        term = term.saturating_mul(remaining);
    }
    total.saturating_add(term)
}

fn collect_length(letters: &[char], length: usize, out: &mut Vec<String>) {
    if length > letters.len() {
        return;
    }

    let mut arrangement = Arrangement {
        letters,
        used: vec![false; letters.len()],
        current: String::with_capacity(length * 4),
        depth: 0,
    };
    arrangement.descend(length, out);
}

/// Backtracking state: the pool of available positions and the string built so far
struct Arrangement<'a> {
    letters: &'a [char],
    used: Vec<bool>,
    current: String,
    depth: usize,
}

impl Arrangement<'_> {
    fn descend(&mut self, length: usize, out: &mut Vec<String>) {
        if self.depth == length {
            out.push(self.current.clone());
            return;
        }

        for i in 0..self.letters.len() {
            if self.used[i] {
                continue;
            }

            self.used[i] = true;
            self.current.push(self.letters[i]);
            self.depth += 1;

            self.descend(length, out);

            self.depth -= 1;
            self.current.pop();
            self.used[i] = false;
        }
    }
}
