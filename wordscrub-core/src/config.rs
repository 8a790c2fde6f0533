//! Configuration management for `wordscrub-core`.
//!
//! This module defines the core data structures for word matchers and engine
//! configuration. It handles serialization/deserialization of the JSON
//! configuration format and provides utilities for loading and validating
//! these configs before the engine compiles them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum allowed length for a user-supplied `word` or `regex` field.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single configured detection rule.
///
/// A rule carries either a literal `word` or a `regex`; `regex` takes
/// precedence when both are set, while `word` remains the identifier
/// reported for any match. Entries with neither field set never match.
/// `level` is a severity classification reported exactly as configured
/// (`0` when omitted; no default is substituted).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct WordMatcher {
    /// Literal word to detect (e.g. "ass").
    pub word: String,
    /// Regex pattern to detect; overrides `word` for matching when set.
    pub regex: String,
    /// Severity level attached to every match of this rule.
    pub level: i32,
}

/// Represents the top-level configuration structure for WordScrub.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfanityConfig {
    /// If true, word characters are widened to leetspeak look-alike classes.
    pub detect_leet_speak: bool,
    /// If true, bounded runs of non-word characters are tolerated between
    /// the letters of a word.
    pub detect_obfuscated: bool,
    /// The string each redacted code point is replaced with. May be longer
    /// than one character.
    pub replacement_character: String,
    /// Maximum number of non-word characters tolerated between consecutive
    /// letters when `detect_obfuscated` is set.
    pub obfuscation_length: i32,
    /// Rules whose matches are reported unless suppressed.
    pub profanities: Vec<WordMatcher>,
    /// Plain regex patterns marking spans that must not be reported.
    pub false_positives: Vec<String>,
    /// Rules whose matches are always reported, overriding suppression.
    pub false_negatives: Vec<WordMatcher>,
}

impl Default for ProfanityConfig {
    fn default() -> Self {
        Self {
            detect_leet_speak: false,
            detect_obfuscated: false,
            replacement_character: "*".to_string(),
            obfuscation_length: 3,
            profanities: Vec::new(),
            false_positives: Vec::new(),
            false_negatives: Vec::new(),
        }
    }
}

impl ProfanityConfig {
    /// Loads a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading profanity configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ProfanityConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        info!(
            "Loaded {} profanity matcher(s), {} false positive(s), {} false negative(s) from {}.",
            config.profanities.len(),
            config.false_positives.len(),
            config.false_negatives.len(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the default word list from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default word list from embedded string...");
        let default_json = include_str!("../config/default.json");
        let config: ProfanityConfig = serde_json::from_str(default_json)
            .context("Failed to parse default word list")?;

        debug!("Loaded {} default matchers.", config.profanities.len());
        Ok(config)
    }
}

/// Validates matcher integrity (pattern lengths, regex compilation).
fn validate_config(config: &ProfanityConfig) -> Result<()> {
    let mut errors = Vec::new();

    let matcher_lists = [
        ("profanities", &config.profanities),
        ("falseNegatives", &config.false_negatives),
    ];

    for (list_name, matchers) in matcher_lists {
        for matcher in matchers.iter() {
            if matcher.word.is_empty() && matcher.regex.is_empty() {
                warn!("A `{}` entry has neither `word` nor `regex` and will never match.", list_name);
                continue;
            }

            if matcher.word.len() > MAX_PATTERN_LENGTH {
                errors.push(format!(
                    "`{}` entry '{}': word length ({}) exceeds maximum allowed ({}).",
                    list_name,
                    matcher.word,
                    matcher.word.len(),
                    MAX_PATTERN_LENGTH
                ));
            }

            if matcher.regex.len() > MAX_PATTERN_LENGTH {
                errors.push(format!(
                    "`{}` entry '{}': regex length ({}) exceeds maximum allowed ({}).",
                    list_name,
                    matcher.regex,
                    matcher.regex.len(),
                    MAX_PATTERN_LENGTH
                ));
            } else if !matcher.regex.is_empty() {
                if let Err(e) = Regex::new(&matcher.regex) {
                    errors.push(format!(
                        "`{}` entry '{}' has an invalid regex pattern: {}",
                        list_name, matcher.regex, e
                    ));
                }
            }
        }
    }

    for pattern in &config.false_positives {
        // Empty suppression entries are inert, not an error.
        if pattern.is_empty() {
            continue;
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "`falsePositives` entry '{}': pattern length ({}) exceeds maximum allowed ({}).",
                pattern,
                pattern.len(),
                MAX_PATTERN_LENGTH
            ));
        } else if let Err(e) = Regex::new(pattern) {
            errors.push(format!(
                "`falsePositives` entry '{}' is an invalid regex pattern: {}",
                pattern, e
            ));
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Configuration validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
