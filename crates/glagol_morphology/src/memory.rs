//! In-memory lexicon keyed on inflected surface forms.

use std::collections::HashMap;

use glagol_foundation::{LexemeRef, PartOfSpeech, WordReading};

use crate::lexeme::Lexeme;
use crate::lexicon::Lexicon;

/// Runtime storage for lexemes and a surface-form index over their tables.
#[derive(Clone, Debug, Default)]
pub struct MemoryLexicon {
    /// Lexemes in registration order; a lexeme's id is its index.
    lexemes: Vec<Lexeme>,
    /// Surface form -> (lexeme index, form index), in declaration order.
    index: HashMap<String, Vec<(usize, usize)>>,
}

impl MemoryLexicon {
    /// Creates a new empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a lexeme and indexes every form of its table.
    ///
    /// Surface forms are stored lower case. Returns the assigned handle.
    pub fn register(&mut self, mut lexeme: Lexeme) -> LexemeRef {
        let position = self.lexemes.len();
        let id = LexemeRef(u32::try_from(position).unwrap_or(u32::MAX));
        lexeme.id = id;
        for (form_index, form) in lexeme.forms.iter().enumerate() {
            self.index
                .entry(form.surface.to_lowercase())
                .or_default()
                .push((position, form_index));
        }
        self.lexemes.push(lexeme);
        id
    }

    /// Registers several lexemes in order.
    pub fn register_all(&mut self, lexemes: impl IntoIterator<Item = Lexeme>) {
        for lexeme in lexemes {
            self.register(lexeme);
        }
    }

    /// Looks up a lexeme by handle.
    #[must_use]
    pub fn lexeme(&self, id: LexemeRef) -> Option<&Lexeme> {
        self.lexemes.get(id.0 as usize)
    }

    /// Looks up a lexeme by lemma and part of speech.
    #[must_use]
    pub fn find(&self, lemma: &str, part_of_speech: PartOfSpeech) -> Option<&Lexeme> {
        self.lexemes
            .iter()
            .find(|l| l.lemma == lemma && l.part_of_speech == part_of_speech)
    }

    /// Iterates lexemes in registration order.
    pub fn lexemes(&self) -> impl Iterator<Item = &Lexeme> {
        self.lexemes.iter()
    }

    /// Returns the number of registered lexemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// Returns true if no lexemes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup(&self, word: &str) -> Vec<(&Lexeme, WordReading)> {
        let Some(entries) = self.index.get(word) else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|&(lexeme_index, form_index)| {
                let lexeme = self.lexemes.get(lexeme_index)?;
                lexeme.reading(form_index).map(|reading| (lexeme, reading))
            })
            .collect()
    }
}
