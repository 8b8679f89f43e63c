//! Errors reported by the collaborators around the LCS core.
//!
//! The core itself ([`crate::lengths`], [`crate::engine`]) is total over
//! well-formed ranges and never fails.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or pairing sentences.
#[derive(Debug, Error)]
pub enum DiffError {
    /// An input file could not be opened or read.
    #[error("failed to read sentences from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Positional pairing needs both sources to hold the same number of sentences.
    #[error("two files with different number of sentences ({left} vs {right})")]
    SentenceCountMismatch { left: usize, right: usize },

    /// Adjacent pairing needs an even number of sentences.
    #[error("odd number of sentences ({count})")]
    OddSentenceCount { count: usize },
}

pub type Result<T> = std::result::Result<T, DiffError>;
