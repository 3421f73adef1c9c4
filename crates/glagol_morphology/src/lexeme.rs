//! Lexemes and their inflection tables.

use glagol_foundation::{FeatureSet, LexemeRef, PartOfSpeech, WordReading, signature};

/// One row of an inflection table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Form {
    /// Inflected surface form, lower case.
    pub surface: String,
    /// Features specific to this form (case, number, ...).
    pub features: FeatureSet,
}

impl Form {
    /// Creates a form.
    #[must_use]
    pub fn new(surface: impl Into<String>, features: FeatureSet) -> Self {
        Self {
            surface: surface.into(),
            features,
        }
    }
}

/// A dictionary entry with its inflection table.
#[derive(Clone, Debug)]
pub struct Lexeme {
    /// Handle assigned by the owning lexicon.
    pub id: LexemeRef,
    /// Dictionary (base) form.
    pub lemma: String,
    /// Part of speech shared by every form.
    pub part_of_speech: PartOfSpeech,
    /// Features shared by every form (gender and animacy of a noun,
    /// governed cases of a preposition).
    pub inherent: FeatureSet,
    /// Numeric value, for numerals.
    pub value: Option<u32>,
    /// Inflection table in declaration order.
    pub forms: Vec<Form>,
}

impl Lexeme {
    /// Creates a lexeme with an empty table.
    ///
    /// The id is a placeholder until the lexeme is registered with a lexicon.
    #[must_use]
    pub fn new(lemma: impl Into<String>, part_of_speech: PartOfSpeech) -> Self {
        Self {
            id: LexemeRef(0),
            lemma: lemma.into(),
            part_of_speech,
            inherent: FeatureSet::new(),
            value: None,
            forms: Vec::new(),
        }
    }

    /// Sets the inherent features.
    #[must_use]
    pub fn with_inherent(mut self, inherent: FeatureSet) -> Self {
        self.inherent = inherent;
        self
    }

    /// Sets the numeric value.
    #[must_use]
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    /// Appends forms to the table.
    #[must_use]
    pub fn with_forms(mut self, forms: impl IntoIterator<Item = Form>) -> Self {
        self.forms.extend(forms);
        self
    }

    /// Returns the reading for the form at `index`, or `None` if out of range.
    #[must_use]
    pub fn reading(&self, index: usize) -> Option<WordReading> {
        let form = self.forms.get(index)?;
        let features = self.inherent.merged(form.features);
        let reading = WordReading::new(
            form.surface.clone(),
            self.lemma.clone(),
            self.id,
            self.part_of_speech,
            features,
        );
        Some(match self.value {
            Some(value) => reading.with_value(value),
            None => reading,
        })
    }

    /// Returns the grammar terminal key for a reading of this lexeme.
    #[must_use]
    pub fn signature(&self, reading: &WordReading) -> String {
        signature(self.part_of_speech, &reading.features)
    }
}
