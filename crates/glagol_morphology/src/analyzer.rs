//! Morphological analysis of single words.

use glagol_foundation::WordReading;
use tracing::trace;

use crate::lexicon::Lexicon;

/// Looks up every reading of a word in a lexicon.
///
/// Output order is part of the contract: readings are grouped by part of
/// speech in [`glagol_foundation::PartOfSpeech`] order, and within a group
/// they keep the lexicon's declaration order. Identical readings of the same
/// lexeme are reported once.
#[derive(Clone, Copy, Debug)]
pub struct MorphAnalyzer<L> {
    lexicon: L,
}

impl<L: Lexicon> MorphAnalyzer<L> {
    /// Creates an analyzer over the given lexicon.
    #[must_use]
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }

    /// Returns the underlying lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Analyzes a word. Unknown words yield an empty vector.
    #[must_use]
    pub fn analyze(&self, word: &str) -> Vec<WordReading> {
        let folded = word.to_lowercase();
        let mut readings: Vec<WordReading> = Vec::new();
        for (_, reading) in self.lexicon.lookup(&folded) {
            let duplicate = readings
                .iter()
                .any(|r| r.lexeme == reading.lexeme && r.features == reading.features);
            if !duplicate {
                readings.push(reading);
            }
        }
        // Stable: keeps declaration order inside each part-of-speech group.
        readings.sort_by_key(|r| r.part_of_speech);
        trace!(word = %folded, readings = readings.len(), "analyzed word");
        readings
    }
}
