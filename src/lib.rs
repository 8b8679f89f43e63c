//! Word-level sentence diff via a linear-space longest common subsequence.
//!
//! For two token sequences this crate marks which positions of each take
//! part in one longest common subsequence (LCS), so callers can render a
//! "match / no-match" annotation per word.
//!
//! ## Core idea
//! 1. The [row-length engine](lengths::lcs_lengths) computes LCS lengths
//!    against every prefix of a range using two rolling DP rows.
//! 2. The [split-point recursion](engine::mark_lcs_into) (Hirschberg's
//!    algorithm) runs it forward and backward around the midpoint of the
//!    first range, picks the best cut in the second range and recurses.
//!
//! The result is exact in O(n·m) time while only O(m) integers are live per
//! recursion level; no n×m backtracking table is ever built.
//!
//! ## Quick start
//! ```
//! use lcsdiff::mark_lcs;
//!
//! let x = ["x"];
//! let y = ["a", "x", "x"];
//! let marks = mark_lcs(&x, &y);
//! assert_eq!(marks.lcs_len(), 1);
//! // the first occurrence in `y` is the one reported
//! assert_eq!(marks.y.as_slice(), &[false, true, false]);
//! ```
//!
//! ## Sentence diffs
//! The [`diff`] layer wraps the core with the pieces of a small diff tool:
//! whitespace tokenization with optional case folding ([`text`]), pairing of
//! sentences across or within files ([`pairing`]) and `word^` / `word#`
//! annotation ([`render`]). Configure it through [`DifferBuilder`].
//!
//! ```
//! use lcsdiff::{text::tokenize, DifferBuilder};
//!
//! let differ = DifferBuilder::new().build();
//! let d = differ.diff(tokenize("A b c", true), tokenize("a c", true));
//! assert_eq!(differ.render(&d), "a^ b# c^\na^ c^");
//! ```

pub mod builder;
pub mod diff;
pub mod engine;
pub mod error;
pub mod lengths;
pub mod marks;
pub mod pairing;
pub mod render;
pub mod span;
pub mod text;
pub mod traits;

pub use crate::builder::DifferBuilder;
pub use crate::diff::{Differ, SentenceDiff};
pub use crate::engine::{mark_lcs, LcsEngine};
pub use crate::error::{DiffError, Result};
pub use crate::marks::{LcsMarks, Membership};
