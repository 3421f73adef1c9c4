//! End-to-end tests through the root crate.
//!
//! Sentences go in, phrase trees come out; these tests pin the exact trees.
