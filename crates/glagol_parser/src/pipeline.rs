//! End-to-end sentence analysis.
//!
//! For each sentence the lattice is built once; then every allowed template
//! walks the candidate sequences until one parses completely. The sequence
//! budget is shared across the templates of one sentence.

use glagol_foundation::{Error, ErrorContext, Result};
use glagol_morphology::{Lexicon, MemoryLexicon, MorphAnalyzer, standard_lexicon};
use tracing::{debug, debug_span, instrument, trace, warn};

use crate::config::{MatchPolicy, PipelineConfig};
use crate::cst::Parser;
use crate::grammar::{Grammar, Template};
use crate::lattice::Lattice;
use crate::phrase::Phrase;
use crate::tokenizer::{Token, Tokenizer, split_sentences};
use crate::visitor::to_ast;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A template that parsed the sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateMatch {
    /// The template id.
    pub template_id: String,
    /// The phrase tree.
    pub phrase: Phrase,
    /// Signatures of the sequence that parsed.
    pub consumed_signatures: Vec<String>,
}

/// What happened when one template was tried.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateAttempt {
    /// The template id.
    pub template_id: String,
    /// Whether some sequence parsed.
    pub matched: bool,
    /// Signatures of every sequence tried, in order.
    pub attempted: Vec<Vec<String>>,
}

/// The result of analyzing one sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Analysis {
    /// At least one template parsed.
    Matched {
        /// Matches in template order.
        matches: Vec<TemplateMatch>,
        /// Every template tried.
        attempts: Vec<TemplateAttempt>,
    },
    /// No template parsed any sequence.
    NoMatch {
        /// Every template tried.
        attempts: Vec<TemplateAttempt>,
    },
}

impl Analysis {
    /// Returns true if a template matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Returns the matches, empty for [`Analysis::NoMatch`].
    #[must_use]
    pub fn matches(&self) -> &[TemplateMatch] {
        match self {
            Self::Matched { matches, .. } => matches,
            Self::NoMatch { .. } => &[],
        }
    }

    /// Returns the first match.
    #[must_use]
    pub fn first(&self) -> Option<&TemplateMatch> {
        self.matches().first()
    }

    /// Returns the phrase of the first match.
    #[must_use]
    pub fn phrase(&self) -> Option<&Phrase> {
        self.first().map(|m| &m.phrase)
    }

    /// Returns the per-template attempts.
    #[must_use]
    pub fn attempts(&self) -> &[TemplateAttempt] {
        match self {
            Self::Matched { attempts, .. } | Self::NoMatch { attempts } => attempts,
        }
    }

    /// Returns every attempted signature sequence across templates.
    #[must_use]
    pub fn attempted_signatures(&self) -> Vec<Vec<String>> {
        self.attempts()
            .iter()
            .flat_map(|a| a.attempted.iter().cloned())
            .collect()
    }
}

/// Tokenizer, analyzer, lattice, and grammar wired together.
///
/// A pipeline holds only read-only state, so one instance can serve
/// concurrent analyses.
#[derive(Clone, Debug)]
pub struct Pipeline<L> {
    analyzer: MorphAnalyzer<L>,
    grammar: Grammar,
    config: PipelineConfig,
}

impl Pipeline<MemoryLexicon> {
    /// Creates a pipeline over the standard lexicon and grammar.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_lexicon(), Grammar::standard())
    }
}

impl<L: Lexicon> Pipeline<L> {
    /// Creates a pipeline with the default configuration.
    #[must_use]
    pub fn new(lexicon: L, grammar: Grammar) -> Self {
        Self {
            analyzer: MorphAnalyzer::new(lexicon),
            grammar,
            config: PipelineConfig::default(),
        }
    }

    /// Builder method to set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Returns the grammar.
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Returns the morphological analyzer.
    #[must_use]
    pub fn analyzer(&self) -> &MorphAnalyzer<L> {
        &self.analyzer
    }

    /// Builds the lattice of an input taken as one sentence.
    ///
    /// # Errors
    ///
    /// Returns lexical, composite numeral, and coordination errors.
    pub fn lattice(&self, text: &str) -> Result<Lattice> {
        let tokens = Tokenizer::tokenize(text)?;
        Lattice::build(&tokens, &self.analyzer)
    }

    /// Analyzes an input taken as one sentence.
    ///
    /// # Errors
    ///
    /// Returns lexical, composite numeral, and coordination errors, and
    /// [`AmbiguityLimitExceeded`](glagol_foundation::ErrorKind::AmbiguityLimitExceeded)
    /// when the sequence budget runs out. A sentence that does not parse is
    /// [`Analysis::NoMatch`], not an error.
    #[instrument(level = "debug", skip_all, fields(sentence = %text))]
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let tokens = Tokenizer::tokenize(text)?;
        self.analyze_tokens(&tokens, text)
    }

    /// Splits text into sentences and analyzes each one.
    ///
    /// # Errors
    ///
    /// Stops at the first sentence that fails; see [`Pipeline::analyze`].
    pub fn analyze_text(&self, text: &str) -> Result<Vec<Analysis>> {
        let tokens = Tokenizer::tokenize(text)?;
        split_sentences(&tokens)
            .iter()
            .map(|sentence| {
                let source = sentence
                    .iter()
                    .map(|t| t.image.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let span = debug_span!("analyze", sentence = %source);
                let _guard = span.enter();
                self.analyze_tokens(sentence, &source)
            })
            .collect()
    }

    fn analyze_tokens(&self, tokens: &[Token], source: &str) -> Result<Analysis> {
        let lattice = Lattice::build(tokens, &self.analyzer)?;
        debug!(
            slots = lattice.len(),
            sequences = lattice.sequence_count(),
            "lattice ready"
        );

        let parser = Parser::new(&self.grammar);
        let mut budget = Budget {
            limit: self.config.max_sequences,
            used: 0,
        };
        let mut matches = Vec::new();
        let mut attempts = Vec::new();

        let templates = self
            .grammar
            .templates()
            .iter()
            .filter(|t| self.config.allows(&t.id));
        for template in templates {
            let (attempt, found) = try_template(&parser, template, &lattice, &mut budget)
                .map_err(|e| {
                    e.with_context(
                        ErrorContext::new()
                            .with_sentence(source)
                            .with_stage("enumerator"),
                    )
                })?;
            attempts.push(attempt);
            if let Some(found) = found {
                matches.push(found);
                if self.config.policy == MatchPolicy::FirstTemplate {
                    break;
                }
            }
        }

        debug!(
            matched = matches.len(),
            sequences = budget.used,
            "analysis finished"
        );
        Ok(if matches.is_empty() {
            Analysis::NoMatch { attempts }
        } else {
            Analysis::Matched { matches, attempts }
        })
    }
}

/// Sequence budget shared by the templates of one sentence.
struct Budget {
    limit: usize,
    used: usize,
}

fn try_template(
    parser: &Parser<'_>,
    template: &Template,
    lattice: &Lattice,
    budget: &mut Budget,
) -> Result<(TemplateAttempt, Option<TemplateMatch>)> {
    let mut attempted = Vec::new();

    for sequence in lattice.candidates() {
        if budget.used >= budget.limit {
            warn!(
                template = %template.id,
                limit = budget.limit,
                "ambiguity limit reached"
            );
            return Err(Error::ambiguity_limit(budget.limit, template.id.clone()));
        }
        budget.used += 1;

        let signatures = sequence.signatures();
        match parser.parse(template.top, &sequence) {
            Ok(cst) => match to_ast(&cst) {
                Ok(phrase) => {
                    trace!(template = %template.id, ?signatures, "sequence parsed");
                    attempted.push(signatures.clone());
                    let attempt = TemplateAttempt {
                        template_id: template.id.clone(),
                        matched: true,
                        attempted,
                    };
                    let found = TemplateMatch {
                        template_id: template.id.clone(),
                        phrase,
                        consumed_signatures: signatures,
                    };
                    debug!(template = %template.id, phrase = %found.phrase, "template matched");
                    return Ok((attempt, Some(found)));
                }
                Err(mismatch) => {
                    warn!(template = %template.id, ?signatures, %mismatch, "parse tree has no phrase");
                    attempted.push(signatures);
                }
            },
            Err(failure) => {
                trace!(template = %template.id, ?signatures, %failure, "sequence rejected");
                attempted.push(signatures);
            }
        }
    }

    Ok((
        TemplateAttempt {
            template_id: template.id.clone(),
            matched: false,
            attempted,
        },
        None,
    ))
}
