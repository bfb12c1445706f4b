//! Input letter multiset
//!
//! Letters keep their input order and multiplicity. Two 'a's are two distinct
//! positions, each of which may be used once per arrangement.

use std::fmt;

/// The letters a user supplied, in order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Letters {
    chars: Vec<char>,
}

impl Letters {
    /// Create a letter pool from text
    ///
    /// No normalization is applied; whitespace and case are kept as given.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::Letters;
    ///
    /// let letters = Letters::new("aab");
    /// assert_eq!(letters.len(), 3);
    /// assert_eq!(letters.as_slice(), &['a', 'a', 'b']);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Number of letter positions (repeats counted)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for Letters {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Letters {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}
