//! Phrase trees handed to query translators.
//!
//! Phrases are plain values: they own their words, compare structurally, and
//! do not borrow from the lattice they were built from.

use std::fmt;

use glagol_foundation::WordReading;

use crate::lattice::Alternative;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A word in a phrase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    /// Surface text.
    pub text: String,
    /// Dictionary form, for analyzed words.
    pub lemma: Option<String>,
    /// Terminal signature.
    pub signature: String,
    /// Numeric value of numerals and number literals.
    pub value: Option<u32>,
}

impl Word {
    /// Builds a word from a reading.
    #[must_use]
    pub fn from_reading(reading: &WordReading) -> Self {
        Self {
            text: reading.surface.clone(),
            lemma: Some(reading.lemma.clone()),
            signature: reading.signature.clone(),
            value: reading.value,
        }
    }

    /// Builds a word from a lattice alternative.
    #[must_use]
    pub fn from_alternative(alternative: &Alternative) -> Self {
        match alternative {
            Alternative::Reading(reading) => Self::from_reading(reading),
            Alternative::Token(token) => Self {
                text: token.image.clone(),
                lemma: None,
                signature: alternative.signature(),
                value: alternative.value(),
            },
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A phrase tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phrase {
    /// An imperative verb and its object.
    VerbPhrase {
        /// The verb.
        verb: Word,
        /// What the verb applies to.
        object: Box<Phrase>,
    },
    /// A single noun or identifier.
    NounPhrase {
        /// The noun.
        noun: Word,
        /// Prepositional complement.
        complement: Option<Box<Phrase>>,
    },
    /// An adjective modifying a noun phrase.
    AdjNounPhrase {
        /// The adjective.
        adjective: Word,
        /// The modified noun phrase.
        noun: Box<Phrase>,
        /// Prepositional complement.
        complement: Option<Box<Phrase>>,
    },
    /// A quantity and the counted noun.
    NumeralNounPhrase {
        /// Always a [`Phrase::CompositeNumeral`].
        numeral: Box<Phrase>,
        /// The counted noun phrase.
        noun: Box<Phrase>,
        /// Prepositional complement.
        complement: Option<Box<Phrase>>,
    },
    /// A preposition and its noun phrase.
    PrepPhrase {
        /// The preposition.
        preposition: Word,
        /// The governed noun phrase.
        noun: Box<Phrase>,
    },
    /// Nouns joined by commas or conjunctions, in source order.
    CoordinatedNouns {
        /// The nouns.
        nouns: Vec<Word>,
        /// Prepositional complement shared by the list.
        complement: Option<Box<Phrase>>,
    },
    /// A number spelled in one or more words.
    CompositeNumeral {
        /// Components in source order.
        parts: Vec<Word>,
        /// The total, if it is a whole number.
        value: Option<u32>,
    },
}

impl Phrase {
    /// Returns the variant name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VerbPhrase { .. } => "VerbPhrase",
            Self::NounPhrase { .. } => "NounPhrase",
            Self::AdjNounPhrase { .. } => "AdjNounPhrase",
            Self::NumeralNounPhrase { .. } => "NumeralNounPhrase",
            Self::PrepPhrase { .. } => "PrepPhrase",
            Self::CoordinatedNouns { .. } => "CoordinatedNouns",
            Self::CompositeNumeral { .. } => "CompositeNumeral",
        }
    }

    /// Returns the prepositional complement, if the phrase has one.
    #[must_use]
    pub fn complement(&self) -> Option<&Phrase> {
        match self {
            Self::NounPhrase { complement, .. }
            | Self::AdjNounPhrase { complement, .. }
            | Self::NumeralNounPhrase { complement, .. }
            | Self::CoordinatedNouns { complement, .. } => complement.as_deref(),
            Self::VerbPhrase { .. } | Self::PrepPhrase { .. } | Self::CompositeNumeral { .. } => {
                None
            }
        }
    }

    /// Returns every word in source order.
    #[must_use]
    pub fn words(&self) -> Vec<&Word> {
        let mut out = Vec::new();
        self.collect_words(&mut out);
        out
    }

    fn collect_words<'p>(&'p self, out: &mut Vec<&'p Word>) {
        match self {
            Self::VerbPhrase { verb, object } => {
                out.push(verb);
                object.collect_words(out);
            }
            Self::NounPhrase { noun, complement } => {
                out.push(noun);
                collect_optional(complement.as_deref(), out);
            }
            Self::AdjNounPhrase {
                adjective,
                noun,
                complement,
            } => {
                out.push(adjective);
                noun.collect_words(out);
                collect_optional(complement.as_deref(), out);
            }
            Self::NumeralNounPhrase {
                numeral,
                noun,
                complement,
            } => {
                numeral.collect_words(out);
                noun.collect_words(out);
                collect_optional(complement.as_deref(), out);
            }
            Self::PrepPhrase { preposition, noun } => {
                out.push(preposition);
                noun.collect_words(out);
            }
            Self::CoordinatedNouns { nouns, complement } => {
                out.extend(nouns);
                collect_optional(complement.as_deref(), out);
            }
            Self::CompositeNumeral { parts, .. } => out.extend(parts),
        }
    }
}

fn collect_optional<'p>(phrase: Option<&'p Phrase>, out: &mut Vec<&'p Word>) {
    if let Some(phrase) = phrase {
        phrase.collect_words(out);
    }
}

/// Bracketed form, e.g. `VerbPhrase(покажи NounPhrase(организации))`.
impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind())?;
        match self {
            Self::VerbPhrase { verb, object } => write!(f, "{verb} {object}")?,
            Self::NounPhrase { noun, .. } => write!(f, "{noun}")?,
            Self::AdjNounPhrase {
                adjective, noun, ..
            } => write!(f, "{adjective} {noun}")?,
            Self::NumeralNounPhrase { numeral, noun, .. } => write!(f, "{numeral} {noun}")?,
            Self::PrepPhrase { preposition, noun } => write!(f, "{preposition} {noun}")?,
            Self::CoordinatedNouns { nouns, .. } => {
                let texts: Vec<&str> = nouns.iter().map(|w| w.text.as_str()).collect();
                f.write_str(&texts.join(" "))?;
            }
            Self::CompositeNumeral { parts, value } => {
                let texts: Vec<&str> = parts.iter().map(|w| w.text.as_str()).collect();
                f.write_str(&texts.join(" "))?;
                if let Some(value) = value {
                    write!(f, " ={value}")?;
                }
            }
        }
        if let Some(complement) = self.complement() {
            write!(f, " {complement}")?;
        }
        f.write_str(")")
    }
}
