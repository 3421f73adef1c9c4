//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use glagol_foundation::{
    CoordinationViolation, Error, ErrorContext, ErrorKind, NumeralViolation,
};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_lexical() {
    let err = Error::lexical("§", 7);
    assert_eq!(
        err.kind,
        ErrorKind::Lexical {
            fragment: "§".to_string(),
            offset: 7,
        }
    );
    assert!(!err.is_structural());
}

#[test]
fn error_composite_numeral() {
    let err = Error::composite_numeral(
        vec!["шесть".to_string(), "двести".to_string()],
        NumeralViolation::OutOfOrder,
    );
    assert!(matches!(
        err.kind,
        ErrorKind::CompositeNumeral {
            reason: NumeralViolation::OutOfOrder,
            ..
        }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("шесть двести"));
    assert!(msg.contains("out of order"));
}

#[test]
fn error_coordination() {
    let err = Error::coordination(
        vec!["фирмы".to_string(), "и".to_string(), ",".to_string()],
        12,
        CoordinationViolation::CommaAfterConjunction,
    );
    assert!(err.is_structural());
    let msg = format!("{err}");
    assert!(msg.contains("12"));
    assert!(msg.contains("comma directly after a conjunction"));
}

#[test]
fn error_ambiguity_limit() {
    let err = Error::ambiguity_limit(256, "show");
    assert_eq!(
        err.kind,
        ErrorKind::AmbiguityLimitExceeded {
            limit: 256,
            template: "show".to_string(),
        }
    );
    assert!(format!("{err}").contains("\"show\""));
}

// =============================================================================
// Violation Display
// =============================================================================

#[test]
fn numeral_violations_have_distinct_messages() {
    let messages: Vec<String> = [
        NumeralViolation::RepeatedMagnitude,
        NumeralViolation::OnesWithTeens,
        NumeralViolation::OutOfOrder,
        NumeralViolation::UnsupportedMagnitude,
        NumeralViolation::CaseMismatch,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn coordination_violation_display() {
    assert_eq!(
        CoordinationViolation::ConsecutiveConjunctions.to_string(),
        "two consecutive conjunctions"
    );
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::lexical("@", 3).with_context(
        ErrorContext::new()
            .with_sentence("покажи @")
            .with_stage("tokenizer"),
    );
    let ctx = err.context.expect("context was set");
    assert_eq!(ctx.sentence.as_deref(), Some("покажи @"));
    assert_eq!(ctx.stage, Some("tokenizer"));
    assert_eq!(ctx.to_string(), "in tokenizer while analyzing \"покажи @\"");
}

#[test]
fn error_without_context() {
    let err = Error::ambiguity_limit(1, "phrase");
    assert!(err.context.is_none());
}
