//! Tokenizer tests.
//!
//! Tests for converting raw input to token streams.

use glagol_foundation::ErrorKind;
use glagol_parser::tokenizer::{TokenType, Tokenizer, significant, split_sentences};
use proptest::prelude::*;

fn types(input: &str) -> Vec<TokenType> {
    let tokens = Tokenizer::tokenize(input).expect("tokenizes");
    let kept = significant(&tokens);
    kept.iter().map(|t| t.token_type).collect()
}

#[test]
fn tokenize_query() {
    let tokens = Tokenizer::tokenize("покажи все организации").expect("tokenizes");
    let kept = significant(&tokens);
    let images: Vec<&str> = kept.iter().map(|t| t.image.as_str()).collect();
    assert_eq!(images, vec!["покажи", "все", "организации"]);
}

#[test]
fn tokenize_keeps_layout() {
    let tokens = Tokenizer::tokenize("поле\nполе").expect("tokenizes");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].token_type, TokenType::LineBreak);
}

#[test]
fn offsets_are_bytes() {
    let tokens = Tokenizer::tokenize("из минска").expect("tokenizes");
    let offsets: Vec<usize> = tokens.iter().map(|t| t.start_offset).collect();
    // "из" is four bytes, the space one
    assert_eq!(offsets, vec![0, 4, 5]);
}

#[test]
fn token_categories() {
    assert_eq!(
        types("фирмы, 25 TgdcCompany 01.02.2020 !"),
        vec![
            TokenType::Word,
            TokenType::Comma,
            TokenType::Number,
            TokenType::Identifier,
            TokenType::Date,
            TokenType::PunctuationMark,
        ]
    );
}

#[test]
fn hyphenated_word_is_one_token() {
    assert_eq!(types("северо-запад"), vec![TokenType::Word]);
}

#[test]
fn number_value() {
    let tokens = Tokenizer::tokenize("3.5").expect("tokenizes");
    assert_eq!(tokens[0].value, Some(3.5));
}

#[test]
fn unknown_character_is_a_lexical_error() {
    let err = Tokenizer::tokenize("поле § поле").expect_err("§ matches nothing");
    assert_eq!(
        err.kind,
        ErrorKind::Lexical {
            fragment: "§".to_string(),
            offset: 9,
        }
    );
    assert_eq!(err.context.and_then(|c| c.stage), Some("tokenizer"));
}

#[test]
fn sentences_split_on_terminators_and_line_breaks() {
    let tokens = Tokenizer::tokenize("покажи фирмы. найди банки\nполе").expect("tokenizes");
    let split = split_sentences(&tokens);
    let sentences: Vec<Vec<&str>> = split
        .iter()
        .map(|s| s.iter().map(|t| t.image.as_str()).collect())
        .collect();
    assert_eq!(
        sentences,
        vec![vec!["покажи", "фирмы", "."], vec!["найди", "банки"], vec!["поле"]]
    );
}

proptest! {
    #[test]
    fn tokens_cover_the_input(input in r#"[а-яА-ЯёЁa-zA-Z0-9_ \t\n,.!?;:()"«»—-]{0,40}"#) {
        let tokens = Tokenizer::tokenize(&input).expect("every character is covered");
        let rebuilt: String = tokens.iter().map(|t| t.image.as_str()).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn dates_are_single_tokens(day in 1u32..=31, month in 1u32..=12, year in 1900u32..=2100) {
        let input = format!("{day:02}.{month:02}.{year}");
        let tokens = Tokenizer::tokenize(&input).expect("tokenizes");
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].token_type, TokenType::Date);
    }

    #[test]
    fn hyphenated_words_stay_whole(parts in prop::collection::vec("[а-яё]{1,6}", 1..4)) {
        let input = parts.join("-");
        let tokens = Tokenizer::tokenize(&input).expect("tokenizes");
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].token_type, TokenType::Word);
    }

    #[test]
    fn offsets_increase(input in "[а-я ,]{0,30}") {
        let tokens = Tokenizer::tokenize(&input).expect("tokenizes");
        prop_assert!(tokens.windows(2).all(|w| w[0].start_offset < w[1].start_offset));
    }

    #[test]
    fn foreign_characters_are_rejected(prefix in "[а-я ]{0,10}", bad in "[#$%&*+=@^~]") {
        let input = format!("{prefix}{bad}");
        let err = Tokenizer::tokenize(&input).expect_err("not a token");
        prop_assert_eq!(
            err.kind,
            ErrorKind::Lexical { fragment: bad, offset: prefix.len() }
        );
    }
}
