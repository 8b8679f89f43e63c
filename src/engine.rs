//! Divide-and-conquer LCS marking (Hirschberg's algorithm).
//!
//! The recursion splits the first range at its midpoint and asks the
//! [row-length engine](crate::lengths) for two rows:
//! 1. forward: LCS lengths of the lower half against every prefix of `y`,
//! 2. backward: LCS lengths of the upper half against every suffix of `y`,
//!    obtained by running the same engine over [`Reversed`] views.
//!
//! The cut in `y` maximising `forward[i] + backward[|y| - i]` splits the
//! problem into two independent halves whose LCS lengths add up to the LCS
//! length of the whole. Ranges shrink until the first one holds zero or one
//! token, where membership is written directly.
//!
//! Only O(|y|) temporary rows are alive per recursion level; no n×m table is
//! ever materialised.

use crate::lengths::lcs_lengths;
use crate::marks::{LcsMarks, Membership};
use crate::span::Span;
use crate::traits::Reversed;

/// LCS marking engine for one pair of token sequences.
///
/// Typical usage:
/// ```
/// use lcsdiff::LcsEngine;
///
/// let x = ["a", "b", "c", "b", "d", "a", "b"];
/// let y = ["b", "d", "c", "a", "b", "a"];
/// let marks = LcsEngine::new(&x, &y).run();
/// assert_eq!(marks.lcs_len(), 4);
/// let picked: Vec<_> = marks.x.select(&x).collect();
/// assert_eq!(picked, marks.y.select(&y).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LcsEngine<'a, T> {
    xs: &'a [T],
    ys: &'a [T],
}

impl<'a, T: PartialEq> LcsEngine<'a, T> {
    pub fn new(xs: &'a [T], ys: &'a [T]) -> Self {
        Self { xs, ys }
    }

    pub fn xs(&self) -> &'a [T] {
        self.xs
    }

    pub fn ys(&self) -> &'a [T] {
        self.ys
    }

    /// Mark one LCS of the two sequences.
    pub fn run(&self) -> LcsMarks {
        let mut marks = LcsMarks::new(self.xs.len(), self.ys.len());
        mark_lcs_into(
            self.xs,
            self.ys,
            Span::full(self.xs.len()),
            Span::full(self.ys.len()),
            &mut marks.x,
            &mut marks.y,
        );
        marks
    }
}

/// Mark one LCS of `xs` and `ys`, returning fresh membership sets.
pub fn mark_lcs<T: PartialEq>(xs: &[T], ys: &[T]) -> LcsMarks {
    LcsEngine::new(xs, ys).run()
}

/// Mark an LCS of the sub-ranges `x` of `xs` and `y` of `ys`.
///
/// Positions are written into `x_marks` / `y_marks` using indices of the
/// owning sequences, so callers can recurse over any window without
/// re-basing. Spans must lie within their sequences and the membership sets
/// must be sized for the whole sequences.
pub fn mark_lcs_into<T: PartialEq>(
    xs: &[T],
    ys: &[T],
    x: Span,
    y: Span,
    x_marks: &mut Membership,
    y_marks: &mut Membership,
) {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "mark_lcs",
        x_lo = x.lo,
        x_hi = x.hi,
        y_lo = y.lo,
        y_hi = y.hi
    )
    .entered();

    match x.len() {
        0 => {}
        1 => mark_singleton(xs, ys, x, y, x_marks, y_marks),
        _ => {
            let (x_lo, x_hi) = x.halve();
            let y_window = y.slice(ys);

            let forward = lcs_lengths(x_lo.slice(xs), y_window);
            let backward = lcs_lengths(&Reversed(x_hi.slice(xs)), &Reversed(y_window));

            let cut = split_point(&forward, &backward);
            #[cfg(feature = "tracing")]
            tracing::trace!(cut = y.absolute(cut), "split y range");
            let (y_lo, y_hi) = y.split_at(cut);

            mark_lcs_into(xs, ys, x_lo, y_lo, x_marks, y_marks);
            mark_lcs_into(xs, ys, x_hi, y_hi, x_marks, y_marks);
        }
    }
}

/// Choose where to cut the `y` window.
///
/// `forward[i]` is the lower half's LCS length against the first `i`
/// elements; `backward[k]` is the upper half's against the last `k`. Returns
/// the smallest `i` maximising `forward[i] + backward[len - i]`; the first
/// strict improvement wins, which fixes the reported LCS among ties.
pub fn split_point(forward: &[usize], backward: &[usize]) -> usize {
    debug_assert_eq!(forward.len(), backward.len());
    let mut best: Option<(usize, usize)> = None;
    for (i, (f, b)) in forward.iter().zip(backward.iter().rev()).enumerate() {
        let total = f + b;
        if best.map_or(true, |(_, top)| total > top) {
            best = Some((i, total));
        }
    }
    best.map_or(0, |(i, _)| i)
}

/// Base case: one token against the whole `y` window, first occurrence wins.
fn mark_singleton<T: PartialEq>(
    xs: &[T],
    ys: &[T],
    x: Span,
    y: Span,
    x_marks: &mut Membership,
    y_marks: &mut Membership,
) {
    let token = &xs[x.lo];
    if let Some(offset) = y.slice(ys).iter().position(|t| t == token) {
        x_marks.mark(x.lo);
        y_marks.mark(y.absolute(offset));
    }
}
