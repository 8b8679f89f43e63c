//! How sentences are paired up for comparison.

use crate::error::{DiffError, Result};
use crate::text::Sentence;

/// Pairing policy for a batch of sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pairing {
    /// Sentence `i` of the first source against sentence `i` of the second.
    #[default]
    Positional,
    /// Sentences `2k` and `2k + 1` of a single source.
    Adjacent,
}

impl Pairing {
    /// Positional for two sources, adjacent for one.
    pub fn for_sources(has_second: bool) -> Self {
        if has_second {
            Pairing::Positional
        } else {
            Pairing::Adjacent
        }
    }
}

/// Pair sentence `i` of `left` with sentence `i` of `right`.
pub fn pair_positional(left: Vec<Sentence>, right: Vec<Sentence>) -> Result<Vec<(Sentence, Sentence)>> {
    if left.len() != right.len() {
        return Err(DiffError::SentenceCountMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left.into_iter().zip(right).collect())
}

/// Pair consecutive sentences `(0, 1), (2, 3), ...` of one source.
pub fn pair_adjacent(sentences: Vec<Sentence>) -> Result<Vec<(Sentence, Sentence)>> {
    if sentences.len() % 2 != 0 {
        return Err(DiffError::OddSentenceCount {
            count: sentences.len(),
        });
    }
    let mut pairs = Vec::with_capacity(sentences.len() / 2);
    let mut iter = sentences.into_iter();
    while let (Some(x), Some(y)) = (iter.next(), iter.next()) {
        pairs.push((x, y));
    }
    Ok(pairs)
}
