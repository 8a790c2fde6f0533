// wordscrub-core/src/concern.rs
//! Provides the result type reported by the detection engine.

use serde::{Deserialize, Serialize};

/// Represents a single detected occurrence of a configured word or pattern.
///
/// `start_index` and `end_index` are half-open byte offsets into the
/// *normalized* text (see [`crate::normalizer::normalize`]), not into the
/// caller's original input. `word` is the literal identifier of the matcher
/// that produced the hit and is empty for pure-regex matchers; `level` is
/// reported exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DetectedConcern {
    pub word: String,
    pub matched_text: String,
    pub start_index: usize,
    pub end_index: usize,
    pub level: i32,
}
