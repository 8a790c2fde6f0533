// wordscrub-core/src/engine.rs
//! The overlap-aware detection and redaction engine.
//!
//! `ProfanityEngine` owns one compiled configuration and exposes the scan
//! operations: `list`, `redact` and `is_profane`. A scan runs three passes
//! over the same normalized text, sharing one claimed-position set: forced
//! matches first, then suppressions, then normal matchers.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;

use crate::concern::DetectedConcern;
use crate::config::ProfanityConfig;
use crate::matchers::compiler::{compile_matchers, compile_suppressions, CompiledMatcher};
use crate::normalizer;

/// Marks every position of `[start, end)` as claimed.
fn claim_span(claimed: &mut HashSet<usize>, start: usize, end: usize) {
    claimed.extend(start..end);
}

/// True when any position of `[start, end)` is already claimed.
fn span_overlaps(claimed: &HashSet<usize>, start: usize, end: usize) -> bool {
    (start..end).any(|i| claimed.contains(&i))
}

/// A compiled, reusable detection engine.
///
/// Construction compiles every configured pattern exactly once; after that
/// the engine is stateless across calls and safe to share between threads
/// for read-only scanning.
#[derive(Debug)]
pub struct ProfanityEngine {
    config: ProfanityConfig,
    profanities: Vec<CompiledMatcher>,
    force_matchers: Vec<CompiledMatcher>,
    suppressions: Vec<Regex>,
}

impl ProfanityEngine {
    /// Compiles `config` into a ready-to-scan engine.
    ///
    /// Fails if any `regex` field or `falsePositives` entry is not a valid
    /// pattern. Construction is atomic: on error no engine is returned. The
    /// caller's `config` value is consumed but never mutated; compiled
    /// patterns live alongside it in the engine.
    pub fn new(config: ProfanityConfig) -> Result<Self> {
        let profanities = compile_matchers(&config.profanities, &config)
            .context("Failed to compile profanity matchers")?;
        let force_matchers = compile_matchers(&config.false_negatives, &config)
            .context("Failed to compile false-negative matchers")?;
        let suppressions = compile_suppressions(&config.false_positives)
            .context("Failed to compile false-positive patterns")?;

        Ok(Self {
            config,
            profanities,
            force_matchers,
            suppressions,
        })
    }

    /// Builds an engine from the embedded default word list.
    pub fn with_default_config() -> Result<Self> {
        Self::new(ProfanityConfig::load_default()?)
    }

    /// Returns a reference to the engine's configuration.
    pub fn config(&self) -> &ProfanityConfig {
        &self.config
    }

    /// Lists every concern detected in `text`.
    ///
    /// Forced matches come first in matcher-list order, then normal matches
    /// in matcher-list order; within one matcher, matches are in
    /// left-to-right scan order. No global position sort is applied;
    /// callers needing position order must sort. All offsets refer to the
    /// normalized form of `text`.
    pub fn list(&self, text: &str) -> Vec<DetectedConcern> {
        let normalized = normalizer::normalize(text);
        self.scan(&normalized)
    }

    /// True iff `text` contains at least one concern.
    pub fn is_profane(&self, text: &str) -> bool {
        !self.list(text).is_empty()
    }

    /// Returns a copy of `text` (normalized) with every detected span
    /// rewritten.
    ///
    /// Each redacted region emits the configured replacement string once per
    /// code point of the region; everything outside a detected span is
    /// copied verbatim.
    pub fn redact(&self, text: &str) -> String {
        let normalized = normalizer::normalize(text);
        let concerns = self.scan(&normalized);

        // Collect all spans first and rebuild in a single pass, so earlier
        // replacements cannot shift later offsets.
        let mut spans: Vec<(usize, usize)> = concerns
            .iter()
            .map(|c| (c.start_index, c.end_index))
            .collect();
        spans.sort_unstable_by_key(|&(start, _)| start);

        let mut redacted = String::with_capacity(normalized.len());
        let mut last_end = 0usize;
        for (start, end) in spans {
            if end <= last_end {
                continue;
            }
            let start = start.max(last_end);
            redacted.push_str(&normalized[last_end..start]);
            for _ in normalized[start..end].chars() {
                redacted.push_str(&self.config.replacement_character);
            }
            last_end = end;
        }
        redacted.push_str(&normalized[last_end..]);
        redacted
    }

    /// Runs the three scan passes over already-normalized text.
    fn scan(&self, text: &str) -> Vec<DetectedConcern> {
        let mut detected = Vec::new();
        let mut claimed: HashSet<usize> = HashSet::new();

        // Pass 1: forced matches always survive. A forced match overlapping
        // an earlier forced claim is dropped rather than double-reported.
        for matcher in &self.force_matchers {
            let Some(pattern) = matcher.pattern.as_ref() else {
                continue;
            };
            for m in pattern.find_iter(text) {
                if m.start() == m.end() || span_overlaps(&claimed, m.start(), m.end()) {
                    continue;
                }
                claim_span(&mut claimed, m.start(), m.end());
                debug!(
                    "Forced matcher '{}' matched at {}..{}",
                    matcher.word,
                    m.start(),
                    m.end()
                );
                detected.push(DetectedConcern {
                    word: matcher.word.clone(),
                    matched_text: m.as_str().to_string(),
                    start_index: m.start(),
                    end_index: m.end(),
                    level: matcher.level,
                });
            }
        }

        // Pass 2: suppressions claim positions but produce no output.
        for suppression in &self.suppressions {
            for m in suppression.find_iter(text) {
                claim_span(&mut claimed, m.start(), m.end());
            }
        }

        // Pass 3: a normal match is dropped when either of its boundary
        // positions was claimed by passes 1-2. This is a boundary check,
        // not a full-overlap check: a match that straddles a claimed span
        // without touching its boundary positions still survives.
        for matcher in &self.profanities {
            let Some(pattern) = matcher.pattern.as_ref() else {
                continue;
            };
            for m in pattern.find_iter(text) {
                if m.start() == m.end() {
                    continue;
                }
                if claimed.contains(&m.start()) || claimed.contains(&m.end()) {
                    debug!(
                        "Matcher '{}' suppressed at {}..{}",
                        matcher.word,
                        m.start(),
                        m.end()
                    );
                    continue;
                }
                claim_span(&mut claimed, m.start(), m.end());
                detected.push(DetectedConcern {
                    word: matcher.word.clone(),
                    matched_text: m.as_str().to_string(),
                    start_index: m.start(),
                    end_index: m.end(),
                    level: matcher.level,
                });
            }
        }

        detected
    }
}
