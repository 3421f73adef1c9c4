//! Inflection paradigms.
//!
//! A paradigm is an ending table; combining it with a stem produces the full
//! inflection table of a [`Lexeme`]. Accusative forms that depend on animacy
//! are derived here rather than stored in the tables.

use glagol_foundation::{
    Animacy, Case, CaseSet, FeatureSet, Gender, Mood, Number, PartOfSpeech, Person,
};

use crate::lexeme::{Form, Lexeme};

/// Noun endings in [`Case::ALL`] order, singular then plural.
///
/// Accusative entries are the inanimate accusative.
#[derive(Clone, Copy, Debug)]
pub struct NounDeclension {
    /// Singular endings.
    pub singular: [&'static str; 6],
    /// Plural endings.
    pub plural: [&'static str; 6],
}

/// Masculine hard stem: город, отдел.
pub const MASCULINE_HARD: NounDeclension = NounDeclension {
    singular: ["", "а", "у", "", "ом", "е"],
    plural: ["ы", "ов", "ам", "ы", "ами", "ах"],
};

/// Masculine stem ending in a velar: сотрудник, банк.
pub const MASCULINE_VELAR: NounDeclension = NounDeclension {
    singular: ["", "а", "у", "", "ом", "е"],
    plural: ["и", "ов", "ам", "и", "ами", "ах"],
};

/// Feminine in -а: фирма, дата.
pub const FEMININE_A: NounDeclension = NounDeclension {
    singular: ["а", "ы", "е", "у", "ой", "е"],
    plural: ["ы", "", "ам", "ы", "ами", "ах"],
};

/// Feminine in -ия: организация, компания.
pub const FEMININE_IA: NounDeclension = NounDeclension {
    singular: ["я", "и", "и", "ю", "ей", "и"],
    plural: ["и", "й", "ям", "и", "ями", "ях"],
};

/// Neuter in -е: поле.
pub const NEUTER_E: NounDeclension = NounDeclension {
    singular: ["е", "я", "ю", "е", "ем", "е"],
    plural: ["я", "ей", "ям", "я", "ями", "ях"],
};

/// Neuter in -ие: название, значение.
pub const NEUTER_IE: NounDeclension = NounDeclension {
    singular: ["е", "я", "ю", "е", "ем", "и"],
    plural: ["я", "й", "ям", "я", "ями", "ях"],
};

/// Adjective endings.
///
/// Neuter oblique forms equal the masculine ones; the accusative is derived
/// from the nominative or genitive except in the feminine.
#[derive(Clone, Copy, Debug)]
pub struct AdjectiveDeclension {
    /// Masculine nominative singular.
    pub masculine: &'static str,
    /// Neuter nominative singular.
    pub neuter: &'static str,
    /// Masculine/neuter genitive, dative, instrumental, prepositional.
    pub oblique: [&'static str; 4],
    /// Feminine singular in [`Case::ALL`] order.
    pub feminine: [&'static str; 6],
    /// Plural nominative, genitive, dative, instrumental, prepositional.
    pub plural: [&'static str; 5],
}

/// Hard stem with unstressed ending: новый, крупный.
pub const ADJECTIVE_HARD: AdjectiveDeclension = AdjectiveDeclension {
    masculine: "ый",
    neuter: "ое",
    oblique: ["ого", "ому", "ым", "ом"],
    feminine: ["ая", "ой", "ой", "ую", "ой", "ой"],
    plural: ["ые", "ых", "ым", "ыми", "ых"],
};

/// Sibilant or velar stem with stressed ending: большой.
pub const ADJECTIVE_STRESSED: AdjectiveDeclension = AdjectiveDeclension {
    masculine: "ой",
    neuter: "ое",
    oblique: ["ого", "ому", "им", "ом"],
    feminine: ["ая", "ой", "ой", "ую", "ой", "ой"],
    plural: ["ие", "их", "им", "ими", "их"],
};

/// The pronominal adjective весь, spelled out in full (use an empty stem).
pub const ADJECTIVE_WHOLE: AdjectiveDeclension = AdjectiveDeclension {
    masculine: "весь",
    neuter: "всё",
    oblique: ["всего", "всему", "всем", "всём"],
    feminine: ["вся", "всей", "всей", "всю", "всей", "всей"],
    plural: ["все", "всех", "всем", "всеми", "всех"],
};

fn case_number(case: Case, number: Number) -> FeatureSet {
    FeatureSet::new().with_number(number).with_case(case)
}

/// Builds a noun with singular and plural forms.
#[must_use]
pub fn noun(
    lemma: &str,
    stem: &str,
    gender: Gender,
    animacy: Animacy,
    declension: &NounDeclension,
) -> Lexeme {
    let forms = noun_forms(stem, animacy, declension, Number::Singular)
        .chain(noun_forms(stem, animacy, declension, Number::Plural));
    Lexeme::new(lemma, PartOfSpeech::Noun)
        .with_inherent(
            FeatureSet::new()
                .with_animacy(animacy)
                .with_gender(gender),
        )
        .with_forms(forms.collect::<Vec<_>>())
}

/// Builds a singular-only noun (place names).
#[must_use]
pub fn singular_noun(
    lemma: &str,
    stem: &str,
    gender: Gender,
    animacy: Animacy,
    declension: &NounDeclension,
) -> Lexeme {
    Lexeme::new(lemma, PartOfSpeech::Noun)
        .with_inherent(
            FeatureSet::new()
                .with_animacy(animacy)
                .with_gender(gender),
        )
        .with_forms(noun_forms(stem, animacy, declension, Number::Singular).collect::<Vec<_>>())
}

fn noun_forms<'a>(
    stem: &'a str,
    animacy: Animacy,
    declension: &'a NounDeclension,
    number: Number,
) -> impl Iterator<Item = Form> + 'a {
    let endings = match number {
        Number::Singular => &declension.singular,
        Number::Plural => &declension.plural,
    };
    Case::ALL.into_iter().map(move |case| {
        // Animate masculine singular and all animate plurals take the genitive
        // form in the accusative. Feminine -а nouns keep their own -у form.
        let ending = if case == Case::Accusative
            && animacy == Animacy::Animate
            && (number == Number::Plural || endings[3] == endings[0])
        {
            endings[1]
        } else {
            endings[case as usize]
        };
        Form::new(format!("{stem}{ending}"), case_number(case, number))
    })
}

/// Builds an adjective with the full gender/number/case table.
#[must_use]
pub fn adjective(lemma: &str, stem: &str, declension: &AdjectiveDeclension) -> Lexeme {
    let word = |ending: &str| format!("{stem}{ending}");
    let [genitive, dative, instrumental, prepositional] = declension.oblique;
    let mut forms = Vec::with_capacity(27);

    let masc = |case| case_number(case, Number::Singular).with_gender(Gender::Masculine);
    forms.push(Form::new(word(declension.masculine), masc(Case::Nominative)));
    forms.push(Form::new(word(genitive), masc(Case::Genitive)));
    forms.push(Form::new(word(dative), masc(Case::Dative)));
    forms.push(Form::new(
        word(declension.masculine),
        masc(Case::Accusative).with_animacy(Animacy::Inanimate),
    ));
    forms.push(Form::new(
        word(genitive),
        masc(Case::Accusative).with_animacy(Animacy::Animate),
    ));
    forms.push(Form::new(word(instrumental), masc(Case::Instrumental)));
    forms.push(Form::new(word(prepositional), masc(Case::Prepositional)));

    let neut = |case| case_number(case, Number::Singular).with_gender(Gender::Neuter);
    forms.push(Form::new(word(declension.neuter), neut(Case::Nominative)));
    forms.push(Form::new(word(genitive), neut(Case::Genitive)));
    forms.push(Form::new(word(dative), neut(Case::Dative)));
    forms.push(Form::new(word(declension.neuter), neut(Case::Accusative)));
    forms.push(Form::new(word(instrumental), neut(Case::Instrumental)));
    forms.push(Form::new(word(prepositional), neut(Case::Prepositional)));

    for (case, ending) in Case::ALL.into_iter().zip(declension.feminine) {
        forms.push(Form::new(
            word(ending),
            case_number(case, Number::Singular).with_gender(Gender::Feminine),
        ));
    }

    let [p_nom, p_gen, p_dat, p_ins, p_prep] = declension.plural;
    let plur = |case| case_number(case, Number::Plural);
    forms.push(Form::new(word(p_nom), plur(Case::Nominative)));
    forms.push(Form::new(word(p_gen), plur(Case::Genitive)));
    forms.push(Form::new(word(p_dat), plur(Case::Dative)));
    forms.push(Form::new(
        word(p_nom),
        plur(Case::Accusative).with_animacy(Animacy::Inanimate),
    ));
    forms.push(Form::new(
        word(p_gen),
        plur(Case::Accusative).with_animacy(Animacy::Animate),
    ));
    forms.push(Form::new(word(p_ins), plur(Case::Instrumental)));
    forms.push(Form::new(word(p_prep), plur(Case::Prepositional)));

    Lexeme::new(lemma, PartOfSpeech::Adjective).with_forms(forms)
}

/// Builds a cardinal numeral from its six case forms in [`Case::ALL`] order.
///
/// The lemma is the nominative form.
#[must_use]
pub fn numeral(value: u32, forms: [&str; 6]) -> Lexeme {
    Lexeme::new(forms[0], PartOfSpeech::Numeral)
        .with_value(value)
        .with_forms(
            Case::ALL
                .into_iter()
                .zip(forms)
                .map(|(case, form)| Form::new(form, FeatureSet::new().with_case(case)))
                .collect::<Vec<_>>(),
        )
}

/// Builds a numeral that inflects for gender (один, два).
///
/// Tables are in [`Case::ALL`] order. A case form shared by all three genders
/// is stored once without gender; otherwise every gender gets its own form,
/// so "одного" reads as both masculine and neuter.
#[must_use]
pub fn gendered_numeral(
    value: u32,
    masculine: [&str; 6],
    feminine: [&str; 6],
    neuter: [&str; 6],
) -> Lexeme {
    let mut forms = Vec::with_capacity(18);
    for (i, case) in Case::ALL.into_iter().enumerate() {
        let by_gender = [
            (Gender::Masculine, masculine[i]),
            (Gender::Feminine, feminine[i]),
            (Gender::Neuter, neuter[i]),
        ];
        if by_gender.iter().all(|(_, form)| *form == masculine[i]) {
            forms.push(Form::new(masculine[i], FeatureSet::new().with_case(case)));
            continue;
        }
        for (gender, form) in by_gender {
            forms.push(Form::new(
                form,
                FeatureSet::new().with_gender(gender).with_case(case),
            ));
        }
    }
    Lexeme::new(masculine[0], PartOfSpeech::Numeral)
        .with_value(value)
        .with_forms(forms)
}

/// Builds a numeral in -ь that declines like пять: пяти, пятью.
#[must_use]
pub fn soft_numeral(lemma: &str, value: u32) -> Lexeme {
    let stem = lemma.strip_suffix('ь').unwrap_or(lemma);
    let oblique = format!("{stem}и");
    let instrumental = format!("{stem}ью");
    numeral(
        value,
        [
            lemma,
            oblique.as_str(),
            oblique.as_str(),
            lemma,
            instrumental.as_str(),
            oblique.as_str(),
        ],
    )
}

/// Builds a preposition governing the given cases.
#[must_use]
pub fn preposition(lemma: &str, governs: &[Case]) -> Lexeme {
    Lexeme::new(lemma, PartOfSpeech::Preposition)
        .with_inherent(FeatureSet::new().with_governs(CaseSet::of(governs)))
        .with_forms([Form::new(lemma, FeatureSet::new())])
}

/// Builds an uninflected word (conjunction, particle, adverb).
#[must_use]
pub fn invariable(lemma: &str, part_of_speech: PartOfSpeech) -> Lexeme {
    Lexeme::new(lemma, part_of_speech).with_forms([Form::new(lemma, FeatureSet::new())])
}

/// Builds a verb from its infinitive and second-person imperatives.
#[must_use]
pub fn imperative_verb(infinitive: &str, singular: &str, plural: &str) -> Lexeme {
    let imperative = |number| {
        FeatureSet::new()
            .with_number(number)
            .with_mood(Mood::Imperative)
            .with_person(Person::Second)
    };
    Lexeme::new(infinitive, PartOfSpeech::Verb).with_forms([
        Form::new(infinitive, FeatureSet::new().with_mood(Mood::Infinitive)),
        Form::new(singular, imperative(Number::Singular)),
        Form::new(plural, imperative(Number::Plural)),
    ])
}

/// Builds a personal pronoun from its six case forms.
#[must_use]
pub fn pronoun(person: Person, number: Number, forms: [&str; 6]) -> Lexeme {
    Lexeme::new(forms[0], PartOfSpeech::Pronoun)
        .with_inherent(FeatureSet::new().with_number(number).with_person(person))
        .with_forms(
            Case::ALL
                .into_iter()
                .zip(forms)
                .map(|(case, form)| Form::new(form, FeatureSet::new().with_case(case)))
                .collect::<Vec<_>>(),
        )
}
