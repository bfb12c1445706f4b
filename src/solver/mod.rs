//! Anagram solving algorithms
//!
//! Candidate generation, deduplication and dictionary lookup.

mod engine;
mod ordering;
mod permutations;

pub use engine::{Solution, Solver};
pub use ordering::{dedup_sorted, sort_by_length};
pub use permutations::{arrangement_count, generate_permutations, permutations_of_length};
