// wordscrub-core/src/lib.rs
//! # WordScrub Core Library
//!
//! `wordscrub-core` provides the fundamental, platform-independent logic for
//! profanity detection and redaction. It turns a declarative word/regex list
//! into compiled, case-insensitive patterns (widened for leetspeak
//! look-alikes and bounded obfuscation gaps), applies them against
//! Unicode-normalized text, and resolves overlaps between forced matches,
//! suppressions and normal matches under a position-based precedence rule.
//!
//! The library is designed to be pure and stateless: an engine is compiled
//! once from a configuration value and can then serve unlimited scans,
//! without concerns for I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `WordMatcher`s and `ProfanityConfig` for specifying detection rules.
//! * `matchers`: Contains the compiler turning matchers into executable patterns.
//! * `normalizer`: Folds diacritics so ASCII patterns match accented text.
//! * `concern`: Defines the `DetectedConcern` result record.
//! * `engine`: The `ProfanityEngine` with `list`, `redact` and `is_profane`.
//! * `headless`: Convenience wrappers for one-shot, non-resident use.
//! * `errors`: The library's structured error type.
//!
//! ## Public API
//!
//! **Configuration & Matchers**
//!
//! * [`ProfanityConfig`]: The engine's sole external input: detection flags,
//!   replacement string, and the three matcher lists.
//! * [`WordMatcher`]: One configured rule, a literal word or a regex plus a level.
//! * [`ProfanityConfig::load_from_file`]: Loads a validated JSON configuration.
//! * [`ProfanityConfig::load_default`]: Loads the embedded default word list.
//!
//! **Detection Engine**
//!
//! * [`ProfanityEngine`]: Compiles a configuration once and exposes
//!   [`list`](ProfanityEngine::list), [`redact`](ProfanityEngine::redact) and
//!   [`is_profane`](ProfanityEngine::is_profane).
//! * [`DetectedConcern`]: One detected occurrence: word, matched text,
//!   half-open offsets into the normalized text, and level.
//!
//! **Headless Mode**
//!
//! * [`headless_redact_string`] / [`headless_list_concerns`]: one-shot helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordscrub_core::ProfanityEngine;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Compile an engine from the embedded default word list.
//!     let engine = ProfanityEngine::with_default_config()?;
//!
//!     // 2. Scan and redact.
//!     let input = "hello world fuck";
//!     assert!(engine.is_profane(input));
//!     assert_eq!(engine.redact(input), "hello world ****");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Construction fails atomically with a pattern-compilation error when any
//! configured `regex` or `falsePositives` entry is invalid; scanning itself
//! never fails. The library uses `anyhow::Error` for fallible entry points
//! and defines [`WordscrubError`] for programmatic handling.
//!
//! ## Design Principles
//!
//! * **Compile once, scan many:** all pattern compilation happens at
//!   construction; scans are pure functions of (input text, compiled config).
//! * **Stateless:** the engine holds no mutable state across calls and is
//!   safe for concurrent read-only use once constructed.
//! * **Fail fast:** malformed patterns surface at construction time, never
//!   mid-scan.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod concern;
pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod matchers;
pub mod normalizer;

/// Re-exports the public configuration types and functions for managing matchers.
pub use config::{ProfanityConfig, WordMatcher, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::WordscrubError;

/// Re-exports the detection engine.
pub use engine::ProfanityEngine;

/// Re-exports the detection result record.
pub use concern::DetectedConcern;

/// Re-exports the normalization entry point for callers mapping offsets.
pub use normalizer::normalize;

/// Re-exports types and functions for one-shot, non-resident use.
pub use headless::{headless_list_concerns, headless_redact_string};

// Re-export key types from the matchers::compiler module for advanced usage.
pub use matchers::compiler::{compile_matchers, compile_suppressions, CompiledMatcher};
