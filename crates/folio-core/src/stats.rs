//! Reading statistics derived from body text.

use serde::{Deserialize, Serialize};

/// Assumed reading speed, in words per minute.
pub const WORDS_PER_MINUTE: usize = 200;

/// Word count and estimated reading time for a body of text.
///
/// Always recomputed from the body at read time, never stored with the
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingStats {
    /// Number of whitespace-separated words in the body.
    pub words: usize,

    /// Estimated reading time in whole minutes, rounded up. Any non-empty
    /// body yields at least one minute.
    pub minutes: u32,

    /// Human-readable estimate, e.g. "4 min read".
    pub text: String,
}

impl ReadingStats {
    /// Compute stats for a body string at [`WORDS_PER_MINUTE`].
    pub fn from_body(body: &str) -> Self {
        let words = body.split_whitespace().count();
        let minutes = words.div_ceil(WORDS_PER_MINUTE) as u32;
        Self {
            words,
            minutes,
            text: format!("{minutes} min read"),
        }
    }
}
