//! Read-only sequence views consumed by the LCS core.
//!
//! The row-length engine and the split-point recursion never copy token
//! data. They only need two things from an input range:
//! - its length, and
//! - random access to the element at a local offset.
//!
//! [`SeqView`] captures exactly that. Slices implement it directly, and
//! [`Reversed`] wraps any view so that offset 0 addresses its last element.
//! Running the same DP over reversed views anchors it at the opposite corner
//! of the comparison grid, which is how the backward pass is obtained without
//! a second copy of the algorithm.

/// Randomly indexable, read-only view over a run of comparable tokens.
///
/// Only equality is required of the elements: ordering plays no part in
/// computing a longest common subsequence.
pub trait SeqView {
    /// Element type of the view.
    type Item: PartialEq + ?Sized;

    /// Number of elements visible through the view.
    fn len(&self) -> usize;

    /// Element at local offset `i`.
    ///
    /// # Panics
    /// Implementations may panic when `i >= self.len()`.
    fn at(&self, i: usize) -> &Self::Item;

    /// Returns true if the view contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: PartialEq> SeqView for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, i: usize) -> &T {
        &self[i]
    }
}

impl<V: SeqView + ?Sized> SeqView for &V {
    type Item = V::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, i: usize) -> &Self::Item {
        (**self).at(i)
    }
}

/// A view visiting the wrapped view from its end towards its start.
#[derive(Debug, Clone, Copy)]
pub struct Reversed<V>(pub V);

impl<V: SeqView> SeqView for Reversed<V> {
    type Item = V::Item;

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn at(&self, i: usize) -> &Self::Item {
        self.0.at(self.0.len() - 1 - i)
    }
}

#[cfg(test)]
mod tests {
    use super::{Reversed, SeqView};

    #[test]
    fn slice_view_indexes_in_order() {
        let words = ["a", "b", "c"];
        let view: &[&str] = &words;
        assert_eq!(view.len(), 3);
        assert_eq!(*view.at(0), "a");
        assert_eq!(*view.at(2), "c");
    }

    #[test]
    fn reversed_view_indexes_from_the_end() {
        let words = ["a", "b", "c"];
        let rev = Reversed(&words[..]);
        assert_eq!(rev.len(), 3);
        let seen: Vec<&str> = (0..rev.len()).map(|i| *rev.at(i)).collect();
        assert_eq!(seen, vec!["c", "b", "a"]);
    }

    #[test]
    fn double_reversal_is_identity() {
        let words = [1, 2, 3, 4];
        let back = Reversed(Reversed(&words[1..]));
        let seen: Vec<i32> = (0..back.len()).map(|i| *back.at(i)).collect();
        assert_eq!(seen, vec![2, 3, 4]);
    }

    #[test]
    fn empty_views() {
        let none: [u8; 0] = [];
        assert!(SeqView::is_empty(&none[..]));
        assert!(Reversed(&none[..]).is_empty());
    }
}
