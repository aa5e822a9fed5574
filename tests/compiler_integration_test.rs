//! Integration tests for the pattern compiler.
//!
//! These tests verify the exact regex each pattern compiles to and that every
//! structurally invalid pattern is rejected with the right violation.

use mxid_allowlist::{compile, compile_all, AllowlistError, Part, PatternViolation};

#[test]
fn test_pattern_to_regex() {
    let cases = [
        (
            "simple pattern without wildcards",
            "@someone:example.com",
            r"^@someone:example\.com$",
        ),
        (
            "wildcard as the whole local part",
            "@*:example.com",
            r"^@([^:@]*):example\.com$",
        ),
        (
            "wildcard within the local part",
            "@bot.*.something:example.com",
            r"^@bot\.([^:@]*)\.something:example\.com$",
        ),
        (
            "wildcard as the whole domain part",
            "@someone:*",
            r"^@someone:([^:@]*)$",
        ),
        (
            "wildcard within the domain part",
            "@someone:*.organization.com",
            r"^@someone:([^:@]*)\.organization\.com$",
        ),
        (
            "wildcard in both parts",
            "@*:*",
            r"^@([^:@]*):([^:@]*)$",
        ),
    ];

    for (name, input, expected) in cases {
        let result = compile(input);
        assert!(result.is_ok(), "{name}: {:?}", result.err());
        assert_eq!(result.unwrap().as_str(), expected, "{name}");
    }
}

#[test]
fn test_invalid_patterns_fail() {
    let cases = [
        (
            "pattern that does not appear fully-qualified",
            "someone:example.com",
            PatternViolation::MissingAt,
        ),
        (
            "pattern without a delimiter",
            "@someone",
            PatternViolation::MissingDelimiter,
        ),
        (
            "pattern with empty domain part",
            "@someone:",
            PatternViolation::EmptyDomainpart,
        ),
        (
            "pattern with empty local part",
            "@:example.com",
            PatternViolation::EmptyLocalpart,
        ),
        (
            "pattern with multiple @",
            "@someone@someone:example.com",
            PatternViolation::MultipleAt,
        ),
        (
            "pattern with multiple :",
            "@someone:someone:example.com",
            PatternViolation::MultipleDelimiters,
        ),
        (
            "pattern with two wildcards in one part",
            "@a*b*:example.com",
            PatternViolation::MultipleWildcards {
                part: Part::Localpart,
            },
        ),
    ];

    for (name, input, expected) in cases {
        match compile(input) {
            Err(AllowlistError::InvalidPattern { pattern, violation }) => {
                assert_eq!(pattern, input, "{name}");
                assert_eq!(violation, expected, "{name}");
            }
            other => panic!("{name}: expected InvalidPattern, got {other:?}"),
        }
    }
}

#[test]
fn test_error_message_is_actionable() {
    let err = compile("@someone:someone:example.com").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("@someone:someone:example.com"));
    assert!(message.contains("exactly one ':'"));
}

#[test]
fn test_regex_metacharacters_are_literal() {
    let pattern = compile("@a+b(c)[d]{2}|e^$:ex-ample.com").unwrap();
    assert!(pattern.is_match("@a+b(c)[d]{2}|e^$:ex-ample.com"));
    assert!(!pattern.is_match("@aab(c)[d]{2}|e^$:ex-ample.com"));
    assert!(!pattern.is_match("@e^$:ex-ample.com"));
}

#[test]
fn test_compile_all_fails_fast() {
    let patterns = vec![
        "@good:example.com".to_string(),
        "@:example.com".to_string(),
        "@someone".to_string(),
    ];
    let err = compile_all(&patterns).unwrap_err();
    assert_eq!(err.pattern(), Some("@:example.com"));
    assert_eq!(err.violation(), Some(PatternViolation::EmptyLocalpart));
}
