use crate::diff::Differ;
use crate::render::Markers;

/// Configuration for a [`Differ`].
///
/// Defaults: words are lower-cased before comparison, matched words are
/// suffixed with `^` and unmatched words with `#`.
pub struct DifferBuilder {
    fold_case: bool,
    markers: Markers,
}

impl Default for DifferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DifferBuilder {
    pub fn new() -> Self {
        Self {
            fold_case: true,
            markers: Markers::default(),
        }
    }
    pub fn fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }
    pub fn matched_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.matched = marker.into();
        self
    }
    pub fn unmatched_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.unmatched = marker.into();
        self
    }
    pub fn build(self) -> Differ {
        Differ {
            fold_case: self.fold_case,
            markers: self.markers,
        }
    }
}
