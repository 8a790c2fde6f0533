//! Matcher compilation for WordScrub.
//!
//! This module is responsible for turning configured word matchers into
//! compiled, case-insensitive regular expressions ready for scanning. It
//! applies leetspeak character-class substitution and bounded obfuscation
//! gaps as configured, and compiles the suppression list so that every
//! invalid pattern is rejected at construction time rather than mid-scan.
//!
//! This module works closely with `config` (for matcher definitions) and
//! `engine` (which drives the compiled patterns over normalized text).

pub mod compiler;
