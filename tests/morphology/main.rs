//! Integration tests for Layer 1: Morphology
//!
//! Tests for the in-memory lexicon, paradigms, and the analyzer over the
//! standard lexicon.

mod analyzer;
