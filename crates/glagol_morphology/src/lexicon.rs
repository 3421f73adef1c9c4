//! The lexical lookup interface.
//!
//! Lexical databases are external to the pipeline; anything that can map an
//! inflected surface form to readings can back the analyzer.

use glagol_foundation::WordReading;

use crate::lexeme::Lexeme;

/// Read-only lookup from inflected surface forms to readings.
///
/// Implementations are keyed on the exact lower-case surface form and must
/// return readings in table declaration order. Unknown words yield an empty
/// vector.
pub trait Lexicon {
    /// Looks up every (lexeme, reading) pair whose table contains `word`.
    fn lookup(&self, word: &str) -> Vec<(&Lexeme, WordReading)>;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn lookup(&self, word: &str) -> Vec<(&Lexeme, WordReading)> {
        (**self).lookup(word)
    }
}
