//! Word readings and their signatures.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::features::{FeatureSet, PartOfSpeech};

/// Opaque handle to the lexeme a reading was derived from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LexemeRef(pub u32);

/// Builds the signature for a part of speech and feature set.
///
/// The signature is the part-of-speech tag followed by the feature tags in
/// [`FeatureSet::tags`] order, e.g. `NOUNInanFemnPlurNomn`.
#[must_use]
pub fn signature(pos: PartOfSpeech, features: &FeatureSet) -> String {
    let mut sig = String::from(pos.tag());
    for tag in features.tags() {
        sig.push_str(tag);
    }
    sig
}

/// One concrete inflected interpretation of a surface word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordReading {
    /// The surface form as it appears in the lexicon (lower case).
    pub surface: String,
    /// Dictionary form of the lexeme.
    pub lemma: String,
    /// Part of speech.
    pub part_of_speech: PartOfSpeech,
    /// Grammatical features of this form.
    pub features: FeatureSet,
    /// Numeric value, for numerals.
    pub value: Option<u32>,
    /// Grammar terminal key.
    pub signature: String,
    /// The lexeme this reading belongs to.
    pub lexeme: LexemeRef,
}

impl WordReading {
    /// Creates a reading and computes its signature.
    #[must_use]
    pub fn new(
        surface: impl Into<String>,
        lemma: impl Into<String>,
        lexeme: LexemeRef,
        part_of_speech: PartOfSpeech,
        features: FeatureSet,
    ) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            part_of_speech,
            signature: signature(part_of_speech, &features),
            features,
            value: None,
            lexeme,
        }
    }

    /// Sets the numeric value.
    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns the part-of-speech tag followed by the feature tags.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = vec![self.part_of_speech.tag()];
        tags.extend(self.features.tags());
        tags
    }

    /// Returns true if this reading is a noun.
    #[must_use]
    pub fn is_noun(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Noun
    }

    /// Returns true if this reading is a numeral.
    #[must_use]
    pub fn is_numeral(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Numeral
    }

    /// Returns true if this reading is a conjunction.
    #[must_use]
    pub fn is_conjunction(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Conjunction
    }
}

impl fmt::Display for WordReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.surface, self.signature)
    }
}
