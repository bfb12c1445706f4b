//! Word lists for anagram solving
//!
//! Dictionaries are plain text files with one word per line.

pub mod loader;

pub use loader::{load_from_file, load_from_reader, words_from_slice};
