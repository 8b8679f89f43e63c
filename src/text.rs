//! Sentence input: one sentence per line, whitespace-separated words.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{DiffError, Result};

/// Ordered words of one sentence.
pub type Sentence = Vec<String>;

/// Split a line into words, lower-casing them when `fold_case` is set.
pub fn tokenize(line: &str, fold_case: bool) -> Sentence {
    line.split_whitespace()
        .map(|w| if fold_case { w.to_lowercase() } else { w.to_owned() })
        .collect()
}

/// Read one sentence per line from `reader`.
///
/// Blank lines yield empty sentences so that line numbers and sentence
/// indices stay aligned.
pub fn parse_sentences<R: BufRead>(reader: R, fold_case: bool) -> std::io::Result<Vec<Sentence>> {
    let mut sentences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        #[cfg(feature = "tracing")]
        tracing::debug!(line = %line, "raw sentence");
        sentences.push(tokenize(&line, fold_case));
    }
    Ok(sentences)
}

/// Read all sentences of the file at `path`.
pub fn read_sentences(path: impl AsRef<Path>, fold_case: bool) -> Result<Vec<Sentence>> {
    let path = path.as_ref();
    let io_err = |source| DiffError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let sentences = parse_sentences(BufReader::new(file), fold_case).map_err(io_err)?;
    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), sentences = sentences.len(), "read input");
    Ok(sentences)
}
