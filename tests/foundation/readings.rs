//! Integration tests for word readings and signatures

use glagol_foundation::{
    Case, CaseSet, FeatureSet, Gender, LexemeRef, Number, PartOfSpeech, WordReading, signature,
};
use proptest::prelude::*;

fn reading(case: Case, number: Number) -> WordReading {
    WordReading::new(
        "поле",
        "поле",
        LexemeRef(3),
        PartOfSpeech::Noun,
        FeatureSet::new()
            .with_gender(Gender::Neuter)
            .with_number(number)
            .with_case(case),
    )
}

#[test]
fn reading_signature() {
    let r = reading(Case::Accusative, Number::Singular);
    assert_eq!(r.signature, "NOUNNeutSingAccs");
    assert_eq!(r.tags(), vec!["NOUN", "Neut", "Sing", "Accs"]);
    assert!(r.is_noun());
    assert!(!r.is_numeral());
}

#[test]
fn preposition_signature_names_government() {
    let features = FeatureSet::new().with_governs(CaseSet::of(&[Case::Genitive]));
    assert_eq!(signature(PartOfSpeech::Preposition, &features), "PREPGovGent");
}

#[test]
fn numeral_value() {
    let r = WordReading::new(
        "три",
        "три",
        LexemeRef(0),
        PartOfSpeech::Numeral,
        FeatureSet::new().with_case(Case::Nominative),
    )
    .with_value(3);
    assert_eq!(r.value, Some(3));
    assert_eq!(r.to_string(), "три[NUMRNomn]");
}

fn any_case() -> impl Strategy<Value = Case> {
    prop::sample::select(Case::ALL.to_vec())
}

fn any_number() -> impl Strategy<Value = Number> {
    prop_oneof![Just(Number::Singular), Just(Number::Plural)]
}

proptest! {
    #[test]
    fn signature_is_a_function_of_features(case in any_case(), number in any_number()) {
        let a = reading(case, number);
        let b = reading(case, number);
        prop_assert_eq!(&a.signature, &b.signature);
        prop_assert!(a.signature.starts_with("NOUN"));
        prop_assert!(a.signature.ends_with(case.tag()));
    }

    #[test]
    fn distinct_features_give_distinct_signatures(
        a in (any_case(), any_number()),
        b in (any_case(), any_number()),
    ) {
        let (left, right) = (reading(a.0, a.1), reading(b.0, b.1));
        prop_assert_eq!(left.signature == right.signature, a == b);
    }
}
