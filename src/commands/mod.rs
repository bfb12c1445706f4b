//! Command implementations

pub mod solve;

pub use solve::{PRACTICAL_LETTER_LIMIT, SolveConfig, SolveResult, solve};
