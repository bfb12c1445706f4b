//! Terminal output formatting
//!
//! Word listing for stdout and an optional summary for stderr.

pub mod display;

pub use display::{print_summary, print_words, write_words};
