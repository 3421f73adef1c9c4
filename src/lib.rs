//! Glagol - Russian query sentences to phrase trees
//!
//! This crate re-exports all layers of the glagol pipeline for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: glagol_parser     — Tokenizer, lattice, grammar, phrase trees
//! Layer 1: glagol_morphology — Lexicon, paradigms, morphological analyzer
//! Layer 0: glagol_foundation — Grammatical features, readings, Error
//! ```

pub use glagol_foundation as foundation;
pub use glagol_morphology as morphology;
pub use glagol_parser as parser;

pub use glagol_parser::{Analysis, Phrase, Pipeline, PipelineConfig};
