//! Russian natural-language parser for data queries.
//!
//! This crate turns sentences like "покажи все организации из минска" into
//! phrase trees that a query translator can walk.
//!
//! # Architecture
//!
//! ```text
//! "покажи все организации из минска"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [покажи, все, организации, из, минска]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MORPHOLOGY      │  → все: {nom pl, acc pl}, организации: {5 readings}, ...
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LATTICE         │  → slots; composite numerals and noun lists folded
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ENUMERATOR      │  → one concrete sequence at a time
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR         │  → CST for the first sequence a template accepts
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VISITOR         │  → VerbPhrase(покажи AdjNounPhrase(все ...))
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`lattice`] - Per-position alternatives and structural folding
//! - [`enumerator`] - Lazy walk over concrete sequences
//! - [`grammar`] - Rules, agreement constraints, and the standard grammar
//! - [`cst`] - Concrete syntax trees and the LL(1) parser
//! - [`phrase`] - Phrase trees
//! - [`visitor`] - CST to phrase tree conversion
//! - [`config`] - Budget and template policy
//! - [`pipeline`] - End-to-end orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod cst;
pub mod enumerator;
pub mod grammar;
pub mod lattice;
pub mod phrase;
pub mod pipeline;
pub mod tokenizer;
pub mod visitor;

// Re-export main types for convenience
pub use config::{MatchPolicy, PipelineConfig};
pub use cst::{CstNode, ParseFailure, Parser};
pub use enumerator::{Candidates, Sequence, Terminal};
pub use grammar::{GRAMMAR_VERSION, Grammar, RuleKind};
pub use lattice::{Alternative, Lattice, Slot};
pub use phrase::{Phrase, Word};
pub use pipeline::{Analysis, Pipeline, TemplateAttempt, TemplateMatch};
pub use tokenizer::{Token, TokenType, Tokenizer};
pub use visitor::{ShapeMismatch, to_ast};
