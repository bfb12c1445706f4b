//! Core domain types for anagram solving
//!
//! The dictionary word set and the input letter pool. Both are pure and free of I/O.

mod letters;
mod word_set;

pub use letters::Letters;
pub use word_set::WordSet;
