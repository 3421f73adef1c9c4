//! Error types for the glagol pipeline.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every kind here aborts analysis of the current input. A sentence that
//! simply does not parse is not an error; see `Analysis::NoMatch` in the
//! parser crate.

use std::fmt;

use thiserror::Error;

/// Result alias for glagol operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for glagol operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a lexical error for an unrecognized fragment.
    #[must_use]
    pub fn lexical(fragment: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::Lexical {
            fragment: fragment.into(),
            offset,
        })
    }

    /// Creates a composite numeral error.
    #[must_use]
    pub fn composite_numeral(words: Vec<String>, reason: NumeralViolation) -> Self {
        Self::new(ErrorKind::CompositeNumeral { words, reason })
    }

    /// Creates a coordination structure error.
    #[must_use]
    pub fn coordination(words: Vec<String>, offset: usize, reason: CoordinationViolation) -> Self {
        Self::new(ErrorKind::CoordinationStructure {
            words,
            offset,
            reason,
        })
    }

    /// Creates an ambiguity limit error.
    #[must_use]
    pub fn ambiguity_limit(limit: usize, template: impl Into<String>) -> Self {
        Self::new(ErrorKind::AmbiguityLimitExceeded {
            limit,
            template: template.into(),
        })
    }

    /// Returns true if the error came from structural analysis of the lattice
    /// (composite numerals or coordination), as opposed to lexing or the budget.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::CompositeNumeral { .. } | ErrorKind::CoordinationStructure { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Input contains a fragment matching no tokenizer pattern.
    #[error("unrecognized input {fragment:?} at offset {offset}")]
    Lexical {
        /// The offending substring.
        fragment: String,
        /// Byte offset of the fragment in the input.
        offset: usize,
    },

    /// Adjacent numerals do not form a valid compound number.
    #[error("invalid composite numeral \"{}\": {reason}", .words.join(" "))]
    CompositeNumeral {
        /// The numeral words of the offending run, in order.
        words: Vec<String>,
        /// Which magnitude rule was broken.
        reason: NumeralViolation,
    },

    /// Malformed separators inside a coordinated noun run.
    #[error("malformed coordination near \"{}\" at offset {offset}: {reason}", .words.join(" "))]
    CoordinationStructure {
        /// The words of the run up to and including the offending separator.
        words: Vec<String>,
        /// Byte offset of the offending separator.
        offset: usize,
        /// Which structural rule was broken.
        reason: CoordinationViolation,
    },

    /// The enumeration budget ran out before any template matched.
    #[error("ambiguity limit ({limit} sequences) exceeded while trying template {template:?}")]
    AmbiguityLimitExceeded {
        /// The configured cap.
        limit: usize,
        /// Template being tried when the cap was hit.
        template: String,
    },
}

/// Magnitude rules for composite numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralViolation {
    /// Two components of the same magnitude (e.g. two tens).
    RepeatedMagnitude,
    /// Ones and teens together.
    OnesWithTeens,
    /// A smaller magnitude precedes a larger one.
    OutOfOrder,
    /// A component outside 0..=999.
    UnsupportedMagnitude,
    /// The components share no grammatical case.
    CaseMismatch,
}

impl fmt::Display for NumeralViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepeatedMagnitude => f.write_str("magnitude repeated"),
            Self::OnesWithTeens => f.write_str("ones combined with teens"),
            Self::OutOfOrder => f.write_str("magnitudes out of order"),
            Self::UnsupportedMagnitude => f.write_str("unsupported magnitude"),
            Self::CaseMismatch => f.write_str("components disagree in case"),
        }
    }
}

/// Separator rules inside a coordinated noun run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinationViolation {
    /// `, ,`
    ConsecutiveCommas,
    /// `и и`
    ConsecutiveConjunctions,
    /// `и ,`
    CommaAfterConjunction,
}

impl fmt::Display for CoordinationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConsecutiveCommas => f.write_str("two consecutive commas"),
            Self::ConsecutiveConjunctions => f.write_str("two consecutive conjunctions"),
            Self::CommaAfterConjunction => f.write_str("comma directly after a conjunction"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The sentence being analyzed.
    pub sentence: Option<String>,
    /// Pipeline stage that raised the error.
    pub stage: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sentence text.
    #[must_use]
    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = Some(sentence.into());
        self
    }

    /// Sets the stage name.
    #[must_use]
    pub fn with_stage(mut self, stage: &'static str) -> Self {
        self.stage = Some(stage);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(stage) = self.stage {
            write!(f, "in {stage}")?;
        }
        if let Some(sentence) = &self.sentence {
            write!(f, " while analyzing {sentence:?}")?;
        }
        Ok(())
    }
}
