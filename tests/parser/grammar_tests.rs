//! Grammar tests.
//!
//! Tests for terminal patterns, constraints, and parsing with custom grammars.

use glagol_foundation::{Case, CaseSet, FeatureSet, Gender, Number};
use glagol_morphology::{MorphAnalyzer, standard_lexicon};
use glagol_parser::cst::{FailureReason, Parser};
use glagol_parser::grammar::{
    Constraint, Element, Feature, GRAMMAR_VERSION, Grammar, Head, Pattern, Production, Rule,
    RuleKind,
};
use glagol_parser::lattice::Lattice;
use glagol_parser::tokenizer::Tokenizer;

fn lattice(input: &str) -> Lattice {
    let lexicon = standard_lexicon();
    let tokens = Tokenizer::tokenize(input).expect("tokenizes");
    Lattice::build(&tokens, &MorphAnalyzer::new(&lexicon)).expect("builds")
}

fn head(features: FeatureSet) -> Option<Head> {
    Some(Head {
        features,
        value: None,
    })
}

fn quantity(value: u32, case: Option<Case>) -> Option<Head> {
    Some(Head {
        features: FeatureSet {
            case,
            ..FeatureSet::new()
        },
        value: Some(value),
    })
}

fn noun(case: Case, number: Number) -> Option<Head> {
    head(FeatureSet::new().with_case(case).with_number(number))
}

// =============================================================================
// Standard grammar
// =============================================================================

#[test]
fn standard_grammar_shape() {
    let grammar = Grammar::standard();
    assert_eq!(grammar.version(), GRAMMAR_VERSION);
    let ids: Vec<&str> = grammar.templates().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["show", "sort", "phrase"]);
    assert_eq!(grammar.template("sort").map(|t| t.top), Some(RuleKind::Sort));
    assert!(grammar.rule(RuleKind::PrepPhrase).is_some());
}

#[test]
fn pattern_display() {
    let pattern = Pattern::new("VERB Impr").with_lemmas(["показать", "найти"]);
    assert_eq!(pattern.to_string(), "VERB Impr[показать|найти]");
}

#[test]
fn pattern_matches_tags_and_lemmas() {
    let lattice = lattice("покажи отсортируй");
    let show = &lattice.slots()[0].alternatives()[0];
    let sort = &lattice.slots()[1].alternatives()[0];
    let pattern = Pattern::new("VERB Impr").with_lemmas(["показать"]);
    assert!(pattern.matches(show));
    assert!(!pattern.matches(sort));
    assert!(Pattern::new("VERB").matches(sort));
    assert!(!Pattern::new("NOUN").matches(sort));
}

// =============================================================================
// Constraints
// =============================================================================

#[test]
fn agreement_skips_gender_in_the_plural() {
    let adjective = head(FeatureSet::new().with_number(Number::Plural).with_case(Case::Nominative));
    let noun = head(
        FeatureSet::new()
            .with_number(Number::Plural)
            .with_case(Case::Nominative)
            .with_gender(Gender::Feminine),
    );
    assert!(Constraint::agree(0, 1).holds(&[adjective, noun]));

    let masculine = head(
        FeatureSet::new()
            .with_number(Number::Singular)
            .with_gender(Gender::Masculine),
    );
    let feminine = head(
        FeatureSet::new()
            .with_number(Number::Singular)
            .with_gender(Gender::Feminine),
    );
    assert!(!Constraint::agree(0, 1).holds(&[masculine, feminine]));
}

#[test]
fn agreement_on_selected_features() {
    let constraint = Constraint::Agree {
        left: 0,
        right: 1,
        features: vec![Feature::Case],
    };
    assert!(constraint.holds(&[
        noun(Case::Genitive, Number::Singular),
        noun(Case::Genitive, Number::Plural),
    ]));
}

#[test]
fn absent_child_satisfies_constraints() {
    assert!(Constraint::agree(0, 2).holds(&[noun(Case::Dative, Number::Plural), None, None]));
    assert!(Constraint::Governs { preposition: 0, noun: 1 }.holds(&[None, None]));
}

#[test]
fn prepositions_govern_case() {
    let from = head(FeatureSet::new().with_governs(CaseSet::of(&[Case::Genitive])));
    let governs = Constraint::Governs { preposition: 0, noun: 1 };
    assert!(governs.holds(&[from, noun(Case::Genitive, Number::Singular)]));
    assert!(!governs.holds(&[from, noun(Case::Dative, Number::Singular)]));
}

#[test]
fn numeral_government_in_direct_cases() {
    let q = Constraint::Quantifies { numeral: 0, noun: 1 };
    // один, двадцать один: singular in the numeral's case
    assert!(q.holds(&[quantity(21, Some(Case::Accusative)), noun(Case::Accusative, Number::Singular)]));
    assert!(!q.holds(&[quantity(21, Some(Case::Accusative)), noun(Case::Nominative, Number::Singular)]));
    // два, тридцать три: genitive singular
    assert!(q.holds(&[quantity(33, Some(Case::Nominative)), noun(Case::Genitive, Number::Singular)]));
    assert!(!q.holds(&[quantity(33, Some(Case::Nominative)), noun(Case::Genitive, Number::Plural)]));
    // одиннадцать, двенадцать, пять: genitive plural
    assert!(q.holds(&[quantity(11, Some(Case::Nominative)), noun(Case::Genitive, Number::Plural)]));
    assert!(q.holds(&[quantity(12, Some(Case::Nominative)), noun(Case::Genitive, Number::Plural)]));
    assert!(q.holds(&[quantity(286, Some(Case::Accusative)), noun(Case::Genitive, Number::Plural)]));
}

#[test]
fn number_literal_government() {
    let q = Constraint::Quantifies { numeral: 0, noun: 1 };
    assert!(q.holds(&[quantity(1, None), noun(Case::Nominative, Number::Singular)]));
    assert!(q.holds(&[quantity(1, None), noun(Case::Accusative, Number::Singular)]));
    assert!(q.holds(&[quantity(5, None), noun(Case::Genitive, Number::Plural)]));
    assert!(!q.holds(&[quantity(5, None), noun(Case::Nominative, Number::Plural)]));
}

#[test]
fn numeral_government_in_oblique_cases() {
    let q = Constraint::Quantifies { numeral: 0, noun: 1 };
    assert!(q.holds(&[quantity(5, Some(Case::Dative)), noun(Case::Dative, Number::Plural)]));
    assert!(!q.holds(&[quantity(5, Some(Case::Dative)), noun(Case::Genitive, Number::Plural)]));
    assert!(q.holds(&[quantity(21, Some(Case::Instrumental)), noun(Case::Instrumental, Number::Singular)]));
}

// =============================================================================
// Custom grammars
// =============================================================================

#[test]
fn custom_grammar_parses_its_own_templates() {
    let grammar = Grammar::new("test")
        .with_rule(Rule::new(
            RuleKind::NounHead,
            vec![Production::new(vec![Element::terminal(Pattern::new("NOUN"))])],
        ))
        .with_rule(Rule::new(
            RuleKind::Phrase,
            vec![Production::new(vec![
                Element::rule(RuleKind::NounHead),
                Element::terminal(Pattern::new("PUNCT")).optional(),
            ])],
        ))
        .with_template("noun", RuleKind::Phrase);

    let parser = Parser::new(&grammar);
    let lattice = lattice("поле!");
    let parsed = lattice
        .candidates()
        .filter(|s| parser.parse(RuleKind::Phrase, s).is_ok())
        .count();
    // nominative, accusative, and prepositional readings of поле all qualify
    assert_eq!(parsed, 3);
}

#[test]
fn with_rule_replaces_same_kind() {
    let grammar = Grammar::standard().with_rule(Rule::new(
        RuleKind::NounHead,
        vec![Production::new(vec![Element::terminal(Pattern::new("IDENT"))])],
    ));
    let parser = Parser::new(&grammar);
    let lattice = lattice("поле");
    let sequence = lattice.candidates().next().expect("one sequence");
    let failure = parser
        .parse(RuleKind::Phrase, &sequence)
        .expect_err("nouns are no longer heads");
    assert_eq!(failure.reason, FailureReason::NoProduction(RuleKind::Phrase));
}
