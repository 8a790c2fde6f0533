//! compiler.rs - Compiles configured word matchers into executable patterns.
//!
//! This module converts each `WordMatcher` into a case-insensitive compiled
//! regex. Literal words are widened with leetspeak character classes and
//! joined with bounded non-word-character gaps when the configuration asks
//! for it; explicit `regex` entries are compiled as written. Suppression
//! patterns (`falsePositives`) are compiled here too, so a malformed entry
//! fails construction instead of a later scan.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

use crate::config::{ProfanityConfig, WordMatcher, MAX_PATTERN_LENGTH};
use crate::errors::WordscrubError;

lazy_static! {
    /// Character classes matching common numeral/symbol look-alikes.
    static ref LEET_SPEAK_MAPPING: HashMap<char, &'static str> = {
        let mut m = HashMap::new();
        m.insert('a', "[a4]");
        m.insert('s', "[s5$]");
        m
    };
}

/// Represents a single compiled detection matcher.
///
/// This struct holds an optionally compiled regular expression along with
/// the identifier and severity level reported for its matches.
#[derive(Debug)]
pub struct CompiledMatcher {
    /// Literal identifier reported for matches (empty for pure-regex rules).
    pub word: String,
    /// Severity level reported for matches.
    pub level: i32,
    /// The compiled pattern. `None` when the source entry defined neither a
    /// `word` nor a `regex`; such matchers never match and the scanner
    /// skips them.
    pub pattern: Option<Regex>,
}

/// Display identifier for a matcher in error reports.
fn matcher_name(matcher: &WordMatcher) -> &str {
    if !matcher.word.is_empty() {
        &matcher.word
    } else {
        &matcher.regex
    }
}

fn build_case_insensitive(pattern: &str, name: &str) -> Result<Regex, WordscrubError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| WordscrubError::MatcherCompilationError(name.to_string(), e))
}

/// Derives the pattern source for a literal word under the current config.
fn word_pattern(word: &str, config: &ProfanityConfig) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(word.chars().count());
    for ch in word.chars() {
        let substituted = if config.detect_leet_speak {
            LEET_SPEAK_MAPPING.get(&ch).copied()
        } else {
            None
        };
        match substituted {
            Some(class) => parts.push(class.to_string()),
            None => parts.push(ch.to_string()),
        }
    }

    if config.detect_obfuscated {
        parts.join(&format!("\\W{{0,{}}}", config.obfuscation_length))
    } else {
        parts.concat()
    }
}

/// Compiles a list of `WordMatcher`s into `CompiledMatcher`s.
///
/// All failures are collected so a bad configuration is reported in full
/// rather than one error at a time.
pub fn compile_matchers(
    matchers: &[WordMatcher],
    config: &ProfanityConfig,
) -> Result<Vec<CompiledMatcher>, WordscrubError> {
    debug!("Starting compilation of {} matcher(s).", matchers.len());

    let mut compiled = Vec::with_capacity(matchers.len());
    let mut compilation_errors = Vec::new();

    for matcher in matchers {
        let source = if !matcher.regex.is_empty() {
            if matcher.regex.len() > MAX_PATTERN_LENGTH {
                compilation_errors.push(WordscrubError::PatternLengthExceeded(
                    matcher_name(matcher).to_string(),
                    matcher.regex.len(),
                    MAX_PATTERN_LENGTH,
                ));
                continue;
            }
            Some(matcher.regex.clone())
        } else if !matcher.word.is_empty() {
            if matcher.word.len() > MAX_PATTERN_LENGTH {
                compilation_errors.push(WordscrubError::PatternLengthExceeded(
                    matcher_name(matcher).to_string(),
                    matcher.word.len(),
                    MAX_PATTERN_LENGTH,
                ));
                continue;
            }
            Some(word_pattern(&matcher.word, config))
        } else {
            warn!("Matcher has neither `word` nor `regex`; it will never match.");
            None
        };

        let pattern = match source {
            Some(source) => match build_case_insensitive(&source, matcher_name(matcher)) {
                Ok(regex) => {
                    debug!("Matcher '{}' compiled successfully.", matcher_name(matcher));
                    Some(regex)
                }
                Err(e) => {
                    compilation_errors.push(e);
                    continue;
                }
            },
            None => None,
        };

        compiled.push(CompiledMatcher {
            word: matcher.word.clone(),
            level: matcher.level,
            pattern,
        });
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(WordscrubError::Fatal(format!(
            "Failed to compile {} matcher(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling matchers. Total compiled: {}.", compiled.len());
        Ok(compiled)
    }
}

/// Compiles the suppression list (`falsePositives`).
///
/// Empty entries are skipped; invalid entries fail construction.
pub fn compile_suppressions(patterns: &[String]) -> Result<Vec<Regex>, WordscrubError> {
    let mut compiled = Vec::new();
    let mut compilation_errors = Vec::new();

    for pattern in patterns {
        if pattern.is_empty() {
            warn!("Skipping empty suppression pattern.");
            continue;
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(WordscrubError::PatternLengthExceeded(
                pattern.clone(),
                pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }
        match build_case_insensitive(pattern, pattern) {
            Ok(regex) => compiled.push(regex),
            Err(e) => compilation_errors.push(e),
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(WordscrubError::Fatal(format!(
            "Failed to compile {} suppression pattern(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        Ok(compiled)
    }
}
