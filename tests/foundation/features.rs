//! Integration tests for grammatical features
//!
//! Tests tags, case sets, and feature merging.

use glagol_foundation::{
    Animacy, Case, CaseSet, FeatureSet, Gender, Mood, Number, PartOfSpeech, Person,
};

#[test]
fn tags_are_four_characters() {
    for pos in PartOfSpeech::ALL {
        assert_eq!(pos.tag().len(), 4, "{pos:?}");
    }
    for case in Case::ALL {
        assert_eq!(case.tag().len(), 4, "{case:?}");
    }
}

#[test]
fn case_set_operations() {
    let government = CaseSet::of(&[Case::Genitive, Case::Accusative]);
    assert!(government.contains(Case::Genitive));
    assert!(!government.contains(Case::Dative));

    let narrowed = government.intersection(CaseSet::of(&[Case::Accusative, Case::Dative]));
    assert_eq!(narrowed.iter().collect::<Vec<_>>(), vec![Case::Accusative]);
    assert!(government.intersection(CaseSet::of(&[Case::Dative])).is_empty());
}

#[test]
fn case_set_iterates_in_table_order() {
    let set: CaseSet = [Case::Prepositional, Case::Nominative, Case::Dative]
        .into_iter()
        .collect();
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec![Case::Nominative, Case::Dative, Case::Prepositional]
    );
    assert_eq!(CaseSet::ALL.iter().count(), 6);
}

#[test]
fn tags_follow_signature_order() {
    let features = FeatureSet::new()
        .with_case(Case::Genitive)
        .with_number(Number::Plural)
        .with_gender(Gender::Feminine)
        .with_animacy(Animacy::Inanimate);
    assert_eq!(features.tags(), vec!["Inan", "Femn", "Plur", "Gent"]);

    let verb = FeatureSet::new()
        .with_person(Person::Second)
        .with_mood(Mood::Imperative)
        .with_number(Number::Singular);
    assert_eq!(verb.tags(), vec!["Sing", "Impr", "2per"]);
}

#[test]
fn merged_prefers_the_overlay() {
    let base = FeatureSet::new()
        .with_case(Case::Nominative)
        .with_gender(Gender::Neuter);
    let overlay = FeatureSet::new().with_case(Case::Accusative);
    let merged = base.merged(overlay);
    assert_eq!(merged.case, Some(Case::Accusative));
    assert_eq!(merged.gender, Some(Gender::Neuter));
}
