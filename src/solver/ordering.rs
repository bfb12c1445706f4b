//! Candidate deduplication and result ordering

/// Collapse adjacent equal strings in an already-sorted list
///
/// The input must be in non-decreasing order; this function does not sort.
///
/// # Examples
/// ```
/// use anagram_solver::solver::dedup_sorted;
///
/// let words = vec!["a", "a", "b", "b", "b", "c"].into_iter().map(String::from).collect();
/// assert_eq!(dedup_sorted(words), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn dedup_sorted(mut sorted: Vec<String>) -> Vec<String> {
    debug_assert!(
        sorted.windows(2).all(|w| w[0] <= w[1]),
        "dedup_sorted requires sorted input"
    );
    sorted.dedup();
    sorted
}

/// Stable sort by character count, shortest first
///
/// Words of equal length keep their relative order.
pub fn sort_by_length(words: &mut [String]) {
    words.sort_by_key(|word| word.chars().count());
}
