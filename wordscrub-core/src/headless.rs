// wordscrub-core/src/headless.rs
// File: wordscrub-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use of the engine (non-resident).
//! Each helper compiles the supplied configuration, runs a single scan and
//! discards the engine. Callers scanning repeatedly should construct a
//! [`ProfanityEngine`] once and reuse it instead.

use anyhow::Result;

use crate::concern::DetectedConcern;
use crate::config::ProfanityConfig;
use crate::engine::ProfanityEngine;

/// Redacts `content` in a single call.
///
/// # Arguments
///
/// * `config` - The engine configuration (e.g. from `ProfanityConfig::load_default`).
/// * `content` - The string to redact.
pub fn headless_redact_string(config: ProfanityConfig, content: &str) -> Result<String> {
    let engine = ProfanityEngine::new(config)?;
    Ok(engine.redact(content))
}

/// Lists every concern in `content` in a single call.
pub fn headless_list_concerns(
    config: ProfanityConfig,
    content: &str,
) -> Result<Vec<DetectedConcern>> {
    let engine = ProfanityEngine::new(config)?;
    Ok(engine.list(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordMatcher;

    fn config() -> ProfanityConfig {
        ProfanityConfig {
            profanities: vec![WordMatcher {
                word: "fuck".to_string(),
                level: 1,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_headless_redact_string() -> Result<()> {
        let redacted = headless_redact_string(config(), "hello world fuck")?;
        assert_eq!(redacted, "hello world ****");
        Ok(())
    }

    #[test]
    fn test_headless_list_concerns() -> Result<()> {
        let concerns = headless_list_concerns(config(), "hello world fuck")?;
        assert_eq!(concerns.len(), 1);
        assert_eq!(concerns[0].word, "fuck");
        assert_eq!(concerns[0].start_index, 12);
        assert_eq!(concerns[0].end_index, 16);
        Ok(())
    }
}
