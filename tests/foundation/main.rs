//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: grammatical features, word readings, and Error.

mod errors;
mod features;
mod readings;
