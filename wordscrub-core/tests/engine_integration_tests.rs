// wordscrub-core/tests/engine_integration_tests.rs
use wordscrub_core::{DetectedConcern, ProfanityConfig, ProfanityEngine, WordMatcher};

/// The reference word list: leetspeak and obfuscation enabled, `ass` and
/// `damn` as leveled words, `fu+ck` as an ad hoc regex, `bass` suppressed,
/// `dumbass` forced.
fn corpus_config() -> ProfanityConfig {
    ProfanityConfig {
        detect_leet_speak: true,
        detect_obfuscated: true,
        replacement_character: "*".to_string(),
        obfuscation_length: 3,
        profanities: vec![
            WordMatcher {
                word: "ass".to_string(),
                level: 2,
                ..Default::default()
            },
            WordMatcher {
                regex: "fu+ck".to_string(),
                ..Default::default()
            },
            WordMatcher {
                word: "damn".to_string(),
                regex: "da+mn".to_string(),
                level: 2,
            },
        ],
        false_positives: vec!["bass".to_string()],
        false_negatives: vec![WordMatcher {
            word: "dumbass".to_string(),
            level: 2,
            ..Default::default()
        }],
    }
}

fn corpus_engine() -> ProfanityEngine {
    ProfanityEngine::new(corpus_config()).unwrap()
}

fn concern(
    word: &str,
    matched_text: &str,
    start_index: usize,
    end_index: usize,
    level: i32,
) -> DetectedConcern {
    DetectedConcern {
        word: word.to_string(),
        matched_text: matched_text.to_string(),
        start_index,
        end_index,
        level,
    }
}

#[test]
fn test_is_profane() {
    let engine = corpus_engine();
    let cases = [
        ("hello world", false),
        ("hello world fuck", true),
        ("ass", true),
        ("fuuuuck", true),
        ("a.s.s", true),
        ("a  s  s", true),
        ("a....s....s", false),
        ("4$$", true),
        ("a.$.$", true),
        ("dumbass", true),
        ("bass", false),
    ];
    for (text, want) in cases {
        assert_eq!(engine.is_profane(text), want, "is_profane({:?})", text);
    }
}

#[test]
fn test_redact() {
    let engine = corpus_engine();
    let cases = [
        ("hello world", "hello world"),
        ("hello world fuck", "hello world ****"),
        ("ass", "***"),
        ("fuuuuck", "*******"),
        ("a.s.s", "*****"),
        ("a  s  s", "*******"),
        ("a....s....s", "a....s....s"),
        ("4$$", "***"),
        ("a.$.$", "*****"),
        ("dumbass", "*******"),
        ("bass", "bass"),
    ];
    for (text, want) in cases {
        assert_eq!(engine.redact(text), want, "redact({:?})", text);
    }
}

#[test]
fn test_list() {
    let engine = corpus_engine();
    let cases: Vec<(&str, Vec<DetectedConcern>)> = vec![
        ("hello world", vec![]),
        ("hello world fuck", vec![concern("", "fuck", 12, 16, 0)]),
        ("ass", vec![concern("ass", "ass", 0, 3, 2)]),
        ("fuuuuck", vec![concern("", "fuuuuck", 0, 7, 0)]),
        ("daaaamn", vec![concern("damn", "daaaamn", 0, 7, 2)]),
        ("a.s.s", vec![concern("ass", "a.s.s", 0, 5, 2)]),
        ("a  s  s", vec![concern("ass", "a  s  s", 0, 7, 2)]),
        ("a....s....s", vec![]),
        ("4$$", vec![concern("ass", "4$$", 0, 3, 2)]),
        ("a.$.$", vec![concern("ass", "a.$.$", 0, 5, 2)]),
        ("dumbass", vec![concern("dumbass", "dumbass", 0, 7, 2)]),
        ("bass", vec![]),
        ("ASS", vec![concern("ass", "ASS", 0, 3, 2)]),
        // Offsets are byte offsets into the normalized text.
        ("世界 世界 ASS 世界", vec![concern("ass", "ASS", 14, 17, 2)]),
        // Diacritics are folded before matching.
        ("fûçk", vec![concern("", "fuck", 0, 4, 0)]),
    ];
    for (text, want) in cases {
        assert_eq!(engine.list(text), want, "list({:?})", text);
    }
}

#[test]
fn test_redaction_is_idempotent_on_clean_text() {
    let engine = corpus_engine();
    let clean = "the quick brown fox jumps over the lazy dog";
    assert_eq!(engine.redact(clean), clean);
    assert!(engine.list(clean).is_empty());
}

#[test]
fn test_concern_length_invariant() {
    let engine = corpus_engine();
    for text in ["a.s.s", "hello world fuck", "dumbass", "4$$", "a  s  s"] {
        for c in engine.list(text) {
            assert!(c.end_index > c.start_index, "empty span for {:?}", text);
            assert_eq!(
                c.matched_text.chars().count(),
                c.end_index - c.start_index,
                "length mismatch for {:?}",
                text
            );
        }
    }
}

#[test]
fn test_suppression_precedence() {
    // The false positive `bass` claims the span whose boundaries coincide
    // with the `ass` match, so no concern is reported.
    let engine = corpus_engine();
    assert!(engine.list("bass").is_empty());
}

#[test]
fn test_force_precedence() {
    // `dumbass` contains both a suppressed `bass` span and an `ass` match;
    // only the forced concern survives.
    let engine = corpus_engine();
    let concerns = engine.list("dumbass");
    assert_eq!(concerns, vec![concern("dumbass", "dumbass", 0, 7, 2)]);
}

#[test]
fn test_case_insensitivity_reports_identical_rules() {
    let engine = corpus_engine();
    let lower = engine.list("ass");
    let upper = engine.list("ASS");
    assert_eq!(lower.len(), 1);
    assert_eq!(upper.len(), 1);
    assert_eq!(lower[0].word, upper[0].word);
    assert_eq!(lower[0].level, upper[0].level);
    assert_eq!(lower[0].start_index, upper[0].start_index);
    assert_eq!(lower[0].end_index, upper[0].end_index);
}

#[test]
fn test_forced_concerns_are_listed_before_normal_concerns() {
    // No global position sort: the forced match is listed first even though
    // it starts after the normal match.
    let engine = corpus_engine();
    let concerns = engine.list("fuck dumbass");
    assert_eq!(concerns.len(), 2);
    assert_eq!(concerns[0].word, "dumbass");
    assert_eq!(concerns[0].start_index, 5);
    assert_eq!(concerns[1].matched_text, "fuck");
    assert_eq!(concerns[1].start_index, 0);
}

#[test]
fn test_engine_is_reusable_across_scans() {
    let engine = corpus_engine();
    let first = engine.list("a.$.$ and dumbass");
    let second = engine.list("a.$.$ and dumbass");
    assert_eq!(first, second);
    assert_eq!(engine.redact("bass"), engine.redact("bass"));
}

#[test]
fn test_construction_fails_on_invalid_matcher_regex() {
    let config = ProfanityConfig {
        profanities: vec![WordMatcher {
            regex: "(unclosed".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    };
    let err = ProfanityEngine::new(config).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to compile"));
}

#[test]
fn test_construction_fails_on_invalid_suppression() {
    let config = ProfanityConfig {
        false_positives: vec!["[z-a]".to_string()],
        ..Default::default()
    };
    assert!(ProfanityEngine::new(config).is_err());
}

#[test]
fn test_empty_suppression_entries_are_inert() {
    let config = ProfanityConfig {
        profanities: vec![WordMatcher {
            word: "ass".to_string(),
            level: 2,
            ..Default::default()
        }],
        false_positives: vec![String::new()],
        ..Default::default()
    };
    let engine = ProfanityEngine::new(config).unwrap();
    assert!(engine.is_profane("ass"));
}

#[test]
fn test_obfuscation_length_bounds_the_gap() {
    // Three interleaved non-word characters are tolerated, four are not.
    let engine = corpus_engine();
    assert!(engine.is_profane("a...s...s"));
    assert!(!engine.is_profane("a....s....s"));
}
