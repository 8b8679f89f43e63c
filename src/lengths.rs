//! Row-length engine: LCS lengths against every prefix of a second range.
//!
//! This is the computational leaf of the divide-and-conquer recursion in
//! [`crate::engine`]. It keeps only two DP rows alive, so it runs in
//! O(|xs|·|ys|) time and O(|ys|) space.

use crate::traits::SeqView;

/// Row of LCS lengths. Entry `j` is the LCS length between the consumed
/// first range and the first `j` elements of the second range, so the row
/// always has `|ys| + 1` entries and entry 0 is 0.
pub type Lengths = Vec<usize>;

/// Compute the final DP row of LCS(xs, ys).
///
/// Pass [`Reversed`](crate::traits::Reversed) views to obtain lengths
/// against every *suffix* of the original `ys`, counted from its end.
///
/// ```
/// use lcsdiff::lengths::lcs_lengths;
///
/// let row = lcs_lengths(&b"ab"[..], &b"xab"[..]);
/// assert_eq!(row, vec![0, 0, 1, 2]);
/// ```
pub fn lcs_lengths<X, Y>(xs: &X, ys: &Y) -> Lengths
where
    X: SeqView + ?Sized,
    Y: SeqView<Item = X::Item> + ?Sized,
{
    let m = ys.len();
    let mut curr = vec![0usize; m + 1];
    let mut prev = vec![0usize; m + 1];

    for i in 0..xs.len() {
        std::mem::swap(&mut prev, &mut curr);
        let x = xs.at(i);
        for j in 0..m {
            curr[j + 1] = if x == ys.at(j) {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
    }

    curr
}

/// LCS length of two whole views.
#[inline]
pub fn lcs_length<X, Y>(xs: &X, ys: &Y) -> usize
where
    X: SeqView + ?Sized,
    Y: SeqView<Item = X::Item> + ?Sized,
{
    lcs_lengths(xs, ys).last().copied().unwrap_or(0)
}
