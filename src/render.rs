//! Annotated rendering of a sentence against its LCS membership.

use crate::marks::Membership;

/// Suffixes appended to matched and unmatched words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub matched: String,
    pub unmatched: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            matched: "^".to_owned(),
            unmatched: "#".to_owned(),
        }
    }
}

/// Render `words` with each word suffixed by its marker, space-separated.
pub fn annotate<S: AsRef<str>>(words: &[S], marks: &Membership, markers: &Markers) -> String {
    debug_assert_eq!(words.len(), marks.len());
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let marker = if marks.is_marked(i) {
            &markers.matched
        } else {
            &markers.unmatched
        };
        out.push_str(word.as_ref());
        out.push_str(marker);
    }
    out
}
