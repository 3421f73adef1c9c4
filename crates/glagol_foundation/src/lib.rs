//! Core grammatical types and errors for glagol.
//!
//! This crate provides:
//! - [`PartOfSpeech`] and the grammatical feature enums ([`Case`], [`Number`],
//!   [`Gender`], [`Animacy`], [`Mood`], [`Person`])
//! - [`FeatureSet`] - The features of one inflected form
//! - [`WordReading`] - One tagged interpretation of a surface word
//! - [`signature`] - Deterministic terminal keys for the grammar
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod features;
pub mod reading;

pub use error::{
    CoordinationViolation, Error, ErrorContext, ErrorKind, NumeralViolation, Result,
};
pub use features::{Animacy, Case, CaseSet, FeatureSet, Gender, Mood, Number, PartOfSpeech, Person};
pub use reading::{LexemeRef, WordReading, signature};
