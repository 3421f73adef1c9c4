//! Morphological analysis for glagol.
//!
//! Turns a surface word into every reading the lexicon knows for it.
//!
//! # Modules
//!
//! - [`lexicon`] - The lookup interface lexical databases implement
//! - [`lexeme`] - Lexemes with their inflection tables
//! - [`paradigm`] - Declension and conjugation paradigms that generate tables
//! - [`memory`] - An in-memory lexicon keyed on inflected surface forms
//! - [`analyzer`] - Case folding, lookup, and deterministic reading order
//! - [`stdlib`] - Standard lexicon for data-query sentences

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod lexeme;
pub mod lexicon;
pub mod memory;
pub mod paradigm;
pub mod stdlib;

pub use analyzer::MorphAnalyzer;
pub use lexeme::{Form, Lexeme};
pub use lexicon::Lexicon;
pub use memory::MemoryLexicon;
pub use stdlib::standard_lexicon;
