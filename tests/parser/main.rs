//! Integration tests for the glagol_parser crate.
//!
//! Tests for the sentence analysis pipeline:
//! - Tokenization
//! - Lattice construction and folding
//! - Grammar and constraint checking
//! - Full pipeline with templates and budgets

mod grammar_tests;
mod lattice_tests;
mod tokenizer_tests;
