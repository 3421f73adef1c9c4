//! Lattice tests.
//!
//! Tests for slot construction, composite numerals, and coordinated nouns.

use glagol_foundation::{Case, CoordinationViolation, ErrorKind, NumeralViolation, Result};
use glagol_morphology::{MorphAnalyzer, standard_lexicon};
use glagol_parser::lattice::{GroupKind, Lattice, slot_cases};
use glagol_parser::tokenizer::Tokenizer;
use proptest::prelude::*;

fn lattice(input: &str) -> Result<Lattice> {
    let lexicon = standard_lexicon();
    let tokens = Tokenizer::tokenize(input)?;
    Lattice::build(&tokens, &MorphAnalyzer::new(&lexicon))
}

fn texts(lattice: &Lattice) -> Vec<&str> {
    lattice.slots().iter().map(|s| s.text()).collect()
}

fn numeral_error(input: &str) -> NumeralViolation {
    match lattice(input).map(|_| ()).expect_err("invalid numeral").kind {
        ErrorKind::CompositeNumeral { reason, .. } => reason,
        other => panic!("unexpected error {other:?}"),
    }
}

// =============================================================================
// Slots
// =============================================================================

#[test]
fn one_slot_per_significant_token() {
    let lattice = lattice("покажи все организации из минска").expect("builds");
    assert_eq!(lattice.len(), 5);
    let sizes: Vec<usize> = lattice.slots().iter().map(|s| s.len()).collect();
    assert_eq!(sizes, vec![1, 2, 5, 1, 1]);
    assert_eq!(lattice.sequence_count(), 10);
}

#[test]
fn slot_offsets_follow_the_source() {
    let lattice = lattice("большое  поле").expect("builds");
    let offsets: Vec<usize> = lattice.slots().iter().map(|s| s.start_offset()).collect();
    assert_eq!(offsets, vec![0, 16]);
}

#[test]
fn punctuation_becomes_a_token_slot() {
    let lattice = lattice("поле.").expect("builds");
    let last = &lattice.slots()[1];
    assert_eq!(last.alternatives()[0].signature(), "PUNCT");
}

// =============================================================================
// Composite numerals
// =============================================================================

#[test]
fn composite_numeral_is_one_slot() {
    let lattice = lattice("двести восемьдесят шесть организаций").expect("builds");
    assert_eq!(texts(&lattice), vec!["двести восемьдесят шесть", "организаций"]);
    let slot = &lattice.slots()[0];
    let group = slot.group().expect("composite group");
    assert_eq!(group.kind(), GroupKind::Composite);
    assert_eq!(group.members().len(), 3);
    assert!(slot.alternatives().iter().all(|a| a.value() == Some(286)));
    assert_eq!(slot_cases(slot), vec![Case::Nominative, Case::Accusative]);
}

#[test]
fn oblique_composite_keeps_shared_cases() {
    let lattice = lattice("двухсот восьмидесяти").expect("builds");
    assert_eq!(slot_cases(&lattice.slots()[0]), vec![Case::Genitive]);
}

#[test]
fn hundred_twenty_five() {
    let lattice = lattice("сто двадцать пять").expect("builds");
    assert_eq!(lattice.len(), 1);
    assert_eq!(lattice.slots()[0].alternatives()[0].value(), Some(125));
}

#[test]
fn composite_numeral_violations() {
    assert_eq!(numeral_error("двадцать тридцать"), NumeralViolation::RepeatedMagnitude);
    assert_eq!(numeral_error("шесть двести"), NumeralViolation::OutOfOrder);
    assert_eq!(numeral_error("пять двенадцать"), NumeralViolation::OnesWithTeens);
    assert_eq!(numeral_error("двадцать двенадцать"), NumeralViolation::RepeatedMagnitude);
    assert_eq!(numeral_error("двести восьмидесяти"), NumeralViolation::CaseMismatch);
}

#[test]
fn composite_error_carries_the_run() {
    let err = lattice("покажи шесть двести фирм").expect_err("out of order");
    let ErrorKind::CompositeNumeral { words, .. } = &err.kind else {
        panic!("composite numeral error expected");
    };
    assert_eq!(words, &vec!["шесть".to_string(), "двести".to_string()]);
    assert!(err.is_structural());
}

// =============================================================================
// Coordinated nouns
// =============================================================================

#[test]
fn coordination_folds_commas_and_conjunctions() {
    let lattice = lattice("фирмы из минска, пинска и бреста").expect("builds");
    assert_eq!(texts(&lattice), vec!["фирмы", "из", "минска , пинска и бреста"]);
    let group = lattice.slots()[2].group().expect("coordination group");
    assert_eq!(group.kind(), GroupKind::Coordination);
    assert_eq!(group.members().len(), 3);
}

#[test]
fn comma_before_conjunction_is_allowed() {
    let lattice = lattice("минска, пинска, и бреста").expect("builds");
    assert_eq!(lattice.len(), 1);
}

#[test]
fn coordination_narrows_cases() {
    let lattice = lattice("организации и фирмы").expect("builds");
    assert_eq!(lattice.len(), 1);
    assert_eq!(
        slot_cases(&lattice.slots()[0]),
        vec![Case::Nominative, Case::Genitive, Case::Accusative]
    );
}

#[test]
fn disjoint_cases_do_not_coordinate() {
    let lattice = lattice("минска и поле").expect("builds");
    assert_eq!(lattice.len(), 3);
}

#[test]
fn malformed_coordination() {
    let cases = [
        ("минска, , пинска", CoordinationViolation::ConsecutiveCommas),
        ("минска и и пинска", CoordinationViolation::ConsecutiveConjunctions),
        ("минска и , пинска", CoordinationViolation::CommaAfterConjunction),
    ];
    for (input, expected) in cases {
        let err = lattice(input).expect_err(input);
        assert!(
            matches!(err.kind, ErrorKind::CoordinationStructure { reason, .. } if reason == expected),
            "{input}: {:?}",
            err.kind
        );
        assert_eq!(err.context.and_then(|c| c.stage), Some("lattice"));
    }
}

#[test]
fn folding_is_idempotent() {
    for input in [
        "фирмы из минска, пинска и бреста",
        "покажи двести восемьдесят шесть организаций",
        "фирмы и банки",
    ] {
        let once = lattice(input).expect("builds");
        let twice = Lattice::fold(once.slots().to_vec()).expect("refolds");
        assert_eq!(once, twice, "{input}");
    }
}

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn candidates_match_sequence_count() {
    let lattice = lattice("большое поле").expect("builds");
    assert_eq!(lattice.candidates().count(), lattice.sequence_count());
    assert!(lattice.candidates().all(|s| s.len() == 2));
}

#[test]
fn empty_lattice_has_no_candidates() {
    let lattice = lattice("").expect("builds");
    assert!(lattice.is_empty());
    assert_eq!(lattice.candidates().count(), 0);
}

proptest! {
    #[test]
    fn valid_composites_sum(hundreds in 1usize..10, tens in 2usize..10, ones in 1usize..10) {
        const HUNDREDS: [&str; 10] = [
            "", "сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот", "семьсот",
            "восемьсот", "девятьсот",
        ];
        const TENS: [&str; 10] = [
            "", "", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят",
            "восемьдесят", "девяносто",
        ];
        const ONES: [&str; 10] = [
            "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
        ];
        let input = format!("{} {} {}", HUNDREDS[hundreds], TENS[tens], ONES[ones]);
        let lattice = lattice(&input).expect("valid composite");
        prop_assert_eq!(lattice.len(), 1);
        let expected = u32::try_from(hundreds * 100 + tens * 10 + ones).expect("below 1000");
        prop_assert!(lattice.slots()[0].alternatives().iter().all(|a| a.value() == Some(expected)));
    }
}
