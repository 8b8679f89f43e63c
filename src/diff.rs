//! Sentence-pair diffing: reading, pairing, marking and rendering.

use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::mark_lcs;
use crate::error::Result;
use crate::marks::LcsMarks;
use crate::pairing::{pair_adjacent, pair_positional};
#[cfg(feature = "tracing")]
use crate::pairing::Pairing;
use crate::render::{annotate, Markers};
use crate::text::{read_sentences, Sentence};

/// One compared sentence pair with its LCS membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceDiff {
    pub x: Sentence,
    pub y: Sentence,
    pub marks: LcsMarks,
}

impl SentenceDiff {
    /// Number of words the two sentences have in common, in order.
    pub fn common_len(&self) -> usize {
        self.marks.lcs_len()
    }
}

/// Configured sentence differ. Build one with
/// [`DifferBuilder`](crate::builder::DifferBuilder).
#[derive(Debug, Clone)]
pub struct Differ {
    pub(crate) fold_case: bool,
    pub(crate) markers: Markers,
}

impl Differ {
    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Compare one sentence pair.
    pub fn diff(&self, x: Sentence, y: Sentence) -> SentenceDiff {
        let marks = mark_lcs(&x, &y);
        SentenceDiff { x, y, marks }
    }

    /// Compare independent pairs, preserving input order.
    #[cfg(feature = "parallel")]
    pub fn diff_pairs(&self, pairs: Vec<(Sentence, Sentence)>) -> Vec<SentenceDiff> {
        pairs
            .into_par_iter()
            .map(|(x, y)| self.diff(x, y))
            .collect()
    }

    /// Compare independent pairs, preserving input order.
    #[cfg(not(feature = "parallel"))]
    pub fn diff_pairs(&self, pairs: Vec<(Sentence, Sentence)>) -> Vec<SentenceDiff> {
        pairs.into_iter().map(|(x, y)| self.diff(x, y)).collect()
    }

    /// Pair sentences from the given files and compare every pair.
    ///
    /// With `second` present, sentences are paired by position across the
    /// two files; otherwise consecutive sentences of `first` are paired.
    pub fn diff_files(&self, first: &Path, second: Option<&Path>) -> Result<Vec<SentenceDiff>> {
        #[cfg(feature = "tracing")]
        let pairing = Pairing::for_sources(second.is_some());
        let pairs = match second {
            Some(second) => pair_positional(
                read_sentences(first, self.fold_case)?,
                read_sentences(second, self.fold_case)?,
            )?,
            None => pair_adjacent(read_sentences(first, self.fold_case)?)?,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?pairing, pairs = pairs.len(), "comparing sentence pairs");
        Ok(self.diff_pairs(pairs))
    }

    /// Render a diff as two annotated lines, X sentence first.
    pub fn render(&self, diff: &SentenceDiff) -> String {
        format!(
            "{}\n{}",
            annotate(&diff.x, &diff.marks.x, &self.markers),
            annotate(&diff.y, &diff.marks.y, &self.markers)
        )
    }
}
