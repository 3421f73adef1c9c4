//! Input tokenization.
//!
//! Converts raw text into a flat stream of typed tokens. The tokenizer has no
//! linguistic knowledge: it only knows the shapes of words, numbers, dates,
//! identifiers, and punctuation.

use glagol_foundation::{Error, ErrorContext, Result};
use logos::Logos;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw lexer patterns.
///
/// Longest match wins, so a date beats the number it starts with and a
/// hyphenated compound beats its first part.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
enum RawToken {
    #[regex(r"\r?\n")]
    LineBreak,

    #[regex(r"[ \t]+")]
    WhiteSpace,

    #[regex(r"[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{2,4}")]
    Date,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[а-яА-ЯёЁ]+(-[а-яА-ЯёЁ]+)*")]
    Word,

    #[regex(r#"[.!?;:()"«»—-]"#)]
    PunctuationMark,

    #[token(",")]
    Comma,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
}

/// Token category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenType {
    /// Cyrillic word, possibly hyphenated.
    Word,
    /// `,`
    Comma,
    /// Integer or decimal literal.
    Number,
    /// `dd.mm.yyyy` literal.
    Date,
    /// Latin identifier, usually an entity or table name.
    Identifier,
    /// Any other punctuation.
    PunctuationMark,
    /// Spaces and tabs.
    WhiteSpace,
    /// A line break.
    LineBreak,
}

impl From<RawToken> for TokenType {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::LineBreak => Self::LineBreak,
            RawToken::WhiteSpace => Self::WhiteSpace,
            RawToken::Date => Self::Date,
            RawToken::Number => Self::Number,
            RawToken::Word => Self::Word,
            RawToken::PunctuationMark => Self::PunctuationMark,
            RawToken::Comma => Self::Comma,
            RawToken::Identifier => Self::Identifier,
        }
    }
}

/// A token from the input text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The exact source text of the token.
    pub image: String,
    /// Byte offset of the token in the input.
    pub start_offset: usize,
    /// Token category.
    pub token_type: TokenType,
    /// Numeric value of a number literal.
    pub value: Option<f64>,
}

impl Token {
    /// Creates a token without a value.
    #[must_use]
    pub fn new(image: impl Into<String>, start_offset: usize, token_type: TokenType) -> Self {
        Self {
            image: image.into(),
            start_offset,
            token_type,
            value: None,
        }
    }

    /// Returns true for whitespace and line breaks.
    #[must_use]
    pub fn is_layout(&self) -> bool {
        matches!(
            self.token_type,
            TokenType::WhiteSpace | TokenType::LineBreak
        )
    }

    /// Returns true for `.`, `!`, and `?`.
    #[must_use]
    pub fn ends_sentence(&self) -> bool {
        self.token_type == TokenType::PunctuationMark && matches!(self.image.as_str(), "." | "!" | "?")
    }
}

/// Tokenizes input text.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes a raw input string.
    ///
    /// Whitespace and line breaks are kept in the stream.
    ///
    /// # Errors
    ///
    /// Returns a lexical error naming the first fragment that matches no
    /// pattern, with its byte offset.
    pub fn tokenize(input: &str) -> Result<Vec<Token>> {
        let mut lexer = RawToken::lexer(input);
        let mut tokens = Vec::new();

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let Ok(raw) = result else {
                let fragment = input
                    .get(span.start..)
                    .and_then(|rest| rest.chars().next())
                    .map(String::from)
                    .unwrap_or_default();
                return Err(Error::lexical(fragment, span.start).with_context(
                    ErrorContext::new()
                        .with_sentence(input)
                        .with_stage("tokenizer"),
                ));
            };
            let mut token = Token::new(lexer.slice(), span.start, raw.into());
            if raw == RawToken::Number {
                token.value = lexer.slice().parse().ok();
            }
            tokens.push(token);
        }

        Ok(tokens)
    }
}

/// Drops whitespace and line breaks.
#[must_use]
pub fn significant(tokens: &[Token]) -> Vec<Token> {
    tokens.iter().filter(|t| !t.is_layout()).cloned().collect()
}

/// Splits a token stream into sentences.
///
/// A sentence ends after `.`, `!`, or `?` (kept as its last token) or at a
/// line break. Layout tokens are dropped and empty sentences are skipped.
#[must_use]
pub fn split_sentences(tokens: &[Token]) -> Vec<Vec<Token>> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        match token.token_type {
            TokenType::LineBreak => {
                if !current.is_empty() {
                    sentences.push(std::mem::take(&mut current));
                }
            }
            TokenType::WhiteSpace => {}
            _ => {
                let ends = token.ends_sentence();
                current.push(token.clone());
                if ends {
                    sentences.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}
