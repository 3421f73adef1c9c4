//! Analyzer tests over the standard lexicon.

use glagol_foundation::{Case, Number, PartOfSpeech};
use glagol_morphology::{MorphAnalyzer, standard_lexicon};
use proptest::prelude::*;

fn signatures(word: &str) -> Vec<String> {
    let lexicon = standard_lexicon();
    MorphAnalyzer::new(&lexicon)
        .analyze(word)
        .into_iter()
        .map(|r| r.signature)
        .collect()
}

#[test]
fn organizations_has_five_readings() {
    assert_eq!(
        signatures("организации"),
        vec![
            "NOUNInanFemnSingGent",
            "NOUNInanFemnSingDatv",
            "NOUNInanFemnSingLoct",
            "NOUNInanFemnPlurNomn",
            "NOUNInanFemnPlurAccs",
        ]
    );
}

#[test]
fn organizations_genitive_plural_is_unambiguous() {
    assert_eq!(signatures("организаций"), vec!["NOUNInanFemnPlurGent"]);
}

#[test]
fn whole_plural_is_nominative_or_accusative() {
    assert_eq!(signatures("все"), vec!["ADJFPlurNomn", "ADJFInanPlurAccs"]);
}

#[test]
fn upper_case_input_is_folded() {
    assert_eq!(signatures("МИНСКА"), signatures("минска"));
}

#[test]
fn preposition_carries_government() {
    assert_eq!(signatures("в"), vec!["PREPGovAccsGovLoct"]);
}

#[test]
fn soft_numeral_oblique_forms() {
    let lexicon = standard_lexicon();
    let analyzer = MorphAnalyzer::new(&lexicon);
    let cases: Vec<Option<Case>> = analyzer
        .analyze("пяти")
        .iter()
        .map(|r| r.features.case)
        .collect();
    assert_eq!(
        cases,
        vec![Some(Case::Genitive), Some(Case::Dative), Some(Case::Prepositional)]
    );
}

#[test]
fn numerals_carry_their_value() {
    let lexicon = standard_lexicon();
    let analyzer = MorphAnalyzer::new(&lexicon);
    for reading in analyzer.analyze("двухсот") {
        assert_eq!(reading.part_of_speech, PartOfSpeech::Numeral);
        assert_eq!(reading.value, Some(200));
        assert_eq!(reading.lemma, "двести");
    }
}

#[test]
fn place_names_are_singular() {
    let lexicon = standard_lexicon();
    let analyzer = MorphAnalyzer::new(&lexicon);
    let readings = analyzer.analyze("бресте");
    assert!(!readings.is_empty());
    assert!(
        readings
            .iter()
            .all(|r| r.features.number == Some(Number::Singular))
    );
}

proptest! {
    #[test]
    fn analysis_is_deterministic(word in "[а-я]{1,8}") {
        let lexicon = standard_lexicon();
        let analyzer = MorphAnalyzer::new(&lexicon);
        prop_assert_eq!(analyzer.analyze(&word), analyzer.analyze(&word));
    }

    #[test]
    fn readings_are_grouped_by_part_of_speech(
        word in prop::sample::select(vec!["все", "поле", "пяти", "и", "большое", "организации"])
    ) {
        let lexicon = standard_lexicon();
        let readings = MorphAnalyzer::new(&lexicon).analyze(word);
        prop_assert!(readings.windows(2).all(|w| w[0].part_of_speech <= w[1].part_of_speech));
    }
}
