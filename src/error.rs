//! Error types

use std::io;
use std::path::PathBuf;

/// Errors returned by the anagram solver library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dictionary could not be opened or read
    #[error("failed to read dictionary {}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
