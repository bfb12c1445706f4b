//! Anagram Solver
//!
//! Finds every dictionary word that can be spelled from a set of letters, using each
//! letter at most as often as it was given.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_solver::core::Letters;
//! use anagram_solver::solver::Solver;
//! use anagram_solver::wordlists::words_from_slice;
//!
//! let dictionary = words_from_slice(&["cat", "act", "at", "a", "dog"]);
//! let solution = Solver::new(&dictionary).find_words(&Letters::new("tca"));
//!
//! // Shortest first, ties in lexicographic order
//! assert_eq!(solution.words, vec!["a", "at", "act", "cat"]);
//! ```

// Core domain types
pub mod core;

// Candidate generation and lookup
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

mod error;

pub use error::{Error, Result};
