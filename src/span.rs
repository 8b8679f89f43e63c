//! Half-open index ranges into an owning token sequence.
//!
//! A `Span` never copies the sequence it describes. Because every span in a
//! recursion is expressed against the same owning sequence, the absolute
//! position of a local offset is simply `lo + offset`.

/// Contiguous window `[lo, hi)` of an owning sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start index.
    pub lo: usize,
    /// Exclusive end index.
    pub hi: usize,
}

impl Span {
    /// Create a span over `[lo, hi)`.
    #[inline]
    pub fn new(lo: usize, hi: usize) -> Self {
        debug_assert!(lo <= hi, "span bounds out of order: {lo} > {hi}");
        Self { lo, hi }
    }

    /// Span covering a whole sequence of length `len`.
    #[inline]
    pub fn full(len: usize) -> Self {
        Self { lo: 0, hi: len }
    }

    /// Number of positions in the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.hi.saturating_sub(self.lo)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split at the midpoint `lo + len / 2` into `[lo, mid)` and `[mid, hi)`.
    #[inline]
    pub fn halve(&self) -> (Span, Span) {
        let mid = self.lo + self.len() / 2;
        (Span::new(self.lo, mid), Span::new(mid, self.hi))
    }

    /// Split at an offset local to this span.
    #[inline]
    pub fn split_at(&self, offset: usize) -> (Span, Span) {
        let cut = self.absolute(offset);
        debug_assert!(cut <= self.hi);
        (Span::new(self.lo, cut), Span::new(cut, self.hi))
    }

    /// Translate a local offset into an index of the owning sequence.
    #[inline]
    pub fn absolute(&self, offset: usize) -> usize {
        self.lo + offset
    }

    /// Borrow the covered elements of `seq`.
    #[inline]
    pub fn slice<'a, T>(&self, seq: &'a [T]) -> &'a [T] {
        &seq[self.lo..self.hi]
    }
}
