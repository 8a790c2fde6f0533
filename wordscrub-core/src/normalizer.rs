// wordscrub-core/src/normalizer.rs
//! Unicode text normalization for the detection pipeline.
//!
//! Accented and diacritic variants are folded to their base letters so that
//! matchers written against plain ASCII still hit them: the input is
//! canonically decomposed (NFD), all combining marks are removed, and the
//! remainder is recomposed (NFC). The transform operates on code points, so
//! multi-byte sequences are never corrupted.
//!
//! License: MIT OR Apache-2.0

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds diacritics out of `text`.
///
/// Every offset the scanner reports refers to the string this returns, not
/// to the caller's original input.
pub fn normalize(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}
