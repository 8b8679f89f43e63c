//! Per-position LCS membership markers.

/// Boolean marker per position of one input sequence; `true` means the
/// token at that position takes part in the reported LCS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Membership {
    flags: Vec<bool>,
}

impl Membership {
    /// All-false markers for a sequence of `len` tokens.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Mark absolute position `pos` as part of the LCS.
    #[inline]
    pub fn mark(&mut self, pos: usize) {
        self.flags[pos] = true;
    }

    #[inline]
    pub fn is_marked(&self, pos: usize) -> bool {
        self.flags[pos]
    }

    /// Number of positions covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of positions marked true.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    pub fn into_vec(self) -> Vec<bool> {
        self.flags
    }

    /// Elements of `seq` at marked positions, in index order.
    ///
    /// `seq` must be the sequence these markers were computed for.
    pub fn select<'a, T: 'a>(&'a self, seq: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        debug_assert_eq!(seq.len(), self.flags.len());
        seq.iter()
            .zip(self.flags.iter())
            .filter_map(|(item, &on)| on.then_some(item))
    }
}

/// Membership markers for both sequences of one comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LcsMarks {
    pub x: Membership,
    pub y: Membership,
}

impl LcsMarks {
    /// Unmarked sets sized for sequences of `nx` and `ny` tokens.
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            x: Membership::new(nx),
            y: Membership::new(ny),
        }
    }

    /// Length of the marked common subsequence.
    ///
    /// Both sides always carry the same count once the engine has run.
    pub fn lcs_len(&self) -> usize {
        debug_assert_eq!(self.x.count(), self.y.count());
        self.x.count()
    }
}
