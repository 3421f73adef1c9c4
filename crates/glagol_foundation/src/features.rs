//! Grammatical features of inflected Russian word forms.
//!
//! Every enum here has a fixed four-character tag used to build signatures.
//! The declaration order of [`PartOfSpeech`] is significant: readings are
//! grouped in that order by the analyzer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Part of speech of a word reading.
///
/// The derived `Ord` is the grouping order used for analyzer output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartOfSpeech {
    /// Full adjective (большой, весь).
    Adjective,
    /// Adverb.
    Adverb,
    /// Conjunction (и, или).
    Conjunction,
    /// Noun.
    Noun,
    /// Cardinal numeral.
    Numeral,
    /// Particle (не, ли).
    Particle,
    /// Preposition.
    Preposition,
    /// Pronoun.
    Pronoun,
    /// Verb form.
    Verb,
}

impl PartOfSpeech {
    /// All parts of speech in grouping order.
    pub const ALL: [PartOfSpeech; 9] = [
        Self::Adjective,
        Self::Adverb,
        Self::Conjunction,
        Self::Noun,
        Self::Numeral,
        Self::Particle,
        Self::Preposition,
        Self::Pronoun,
        Self::Verb,
    ];

    /// Returns the signature tag for this part of speech.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Adjective => "ADJF",
            Self::Adverb => "ADVB",
            Self::Conjunction => "CONJ",
            Self::Noun => "NOUN",
            Self::Numeral => "NUMR",
            Self::Particle => "PRCL",
            Self::Preposition => "PREP",
            Self::Pronoun => "NPRO",
            Self::Verb => "VERB",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Grammatical case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Case {
    /// Именительный.
    Nominative,
    /// Родительный.
    Genitive,
    /// Дательный.
    Dative,
    /// Винительный.
    Accusative,
    /// Творительный.
    Instrumental,
    /// Предложный.
    Prepositional,
}

impl Case {
    /// All cases in declension-table order.
    pub const ALL: [Case; 6] = [
        Self::Nominative,
        Self::Genitive,
        Self::Dative,
        Self::Accusative,
        Self::Instrumental,
        Self::Prepositional,
    ];

    /// Returns the signature tag for this case.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Nominative => "Nomn",
            Self::Genitive => "Gent",
            Self::Dative => "Datv",
            Self::Accusative => "Accs",
            Self::Instrumental => "Ablt",
            Self::Prepositional => "Loct",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A small set of cases, used for preposition government and agreement narrowing.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaseSet(u8);

impl CaseSet {
    /// The empty set.
    pub const EMPTY: CaseSet = CaseSet(0);

    /// Every case.
    pub const ALL: CaseSet = CaseSet(0b11_1111);

    /// Creates a set from a slice of cases.
    #[must_use]
    pub fn of(cases: &[Case]) -> Self {
        cases.iter().fold(Self::EMPTY, |set, &case| set.with(case))
    }

    /// Returns this set with `case` added.
    #[must_use]
    pub const fn with(self, case: Case) -> Self {
        Self(self.0 | case.bit())
    }

    /// Returns true if the set contains `case`.
    #[must_use]
    pub const fn contains(self, case: Case) -> bool {
        self.0 & case.bit() != 0
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the contained cases in declension-table order.
    pub fn iter(self) -> impl Iterator<Item = Case> {
        Case::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl fmt::Debug for CaseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Case::tag)).finish()
    }
}

impl FromIterator<Case> for CaseSet {
    fn from_iter<I: IntoIterator<Item = Case>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, CaseSet::with)
    }
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// Singular.
    Singular,
    /// Plural.
    Plural,
}

impl Number {
    /// Returns the signature tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Singular => "Sing",
            Self::Plural => "Plur",
        }
    }
}

/// Grammatical gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    /// Masculine.
    Masculine,
    /// Feminine.
    Feminine,
    /// Neuter.
    Neuter,
}

impl Gender {
    /// Returns the signature tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Masculine => "Masc",
            Self::Feminine => "Femn",
            Self::Neuter => "Neut",
        }
    }
}

/// Animacy, which decides whether the accusative follows the nominative or genitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Animacy {
    /// Animate.
    Animate,
    /// Inanimate.
    Inanimate,
}

impl Animacy {
    /// Returns the signature tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Animate => "Anim",
            Self::Inanimate => "Inan",
        }
    }
}

/// Verb mood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mood {
    /// Indicative.
    Indicative,
    /// Imperative.
    Imperative,
    /// Infinitive.
    Infinitive,
}

impl Mood {
    /// Returns the signature tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Indicative => "Indc",
            Self::Imperative => "Impr",
            Self::Infinitive => "Infn",
        }
    }
}

/// Grammatical person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Person {
    /// First person.
    First,
    /// Second person.
    Second,
    /// Third person.
    Third,
}

impl Person {
    /// Returns the signature tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::First => "1per",
            Self::Second => "2per",
            Self::Third => "3per",
        }
    }
}

/// The grammatical features of one inflected form.
///
/// Absent features are `None`; agreement treats an absent feature as
/// compatible with anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureSet {
    /// Case, for declinable words.
    pub case: Option<Case>,
    /// Number.
    pub number: Option<Number>,
    /// Gender (nouns always, adjectives only in the singular).
    pub gender: Option<Gender>,
    /// Animacy (nouns only).
    pub animacy: Option<Animacy>,
    /// Mood (verbs only).
    pub mood: Option<Mood>,
    /// Person (verbs and personal pronouns).
    pub person: Option<Person>,
    /// Cases a preposition governs.
    pub governs: CaseSet,
}

impl FeatureSet {
    /// Creates an empty feature set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case: None,
            number: None,
            gender: None,
            animacy: None,
            mood: None,
            person: None,
            governs: CaseSet::EMPTY,
        }
    }

    /// Sets the case.
    #[must_use]
    pub const fn with_case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    /// Sets the number.
    #[must_use]
    pub const fn with_number(mut self, number: Number) -> Self {
        self.number = Some(number);
        self
    }

    /// Sets the gender.
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets the animacy.
    #[must_use]
    pub const fn with_animacy(mut self, animacy: Animacy) -> Self {
        self.animacy = Some(animacy);
        self
    }

    /// Sets the mood.
    #[must_use]
    pub const fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Sets the person.
    #[must_use]
    pub const fn with_person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }

    /// Sets the governed cases.
    #[must_use]
    pub const fn with_governs(mut self, governs: CaseSet) -> Self {
        self.governs = governs;
        self
    }

    /// Overlays `other` on top of `self`: features present in `other` win.
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        Self {
            case: other.case.or(self.case),
            number: other.number.or(self.number),
            gender: other.gender.or(self.gender),
            animacy: other.animacy.or(self.animacy),
            mood: other.mood.or(self.mood),
            person: other.person.or(self.person),
            governs: if other.governs.is_empty() {
                self.governs
            } else {
                other.governs
            },
        }
    }

    /// Returns the feature tags in signature order.
    ///
    /// Order: animacy, gender, number, case, mood, person, governed cases.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        tags.extend(self.animacy.map(Animacy::tag));
        tags.extend(self.gender.map(Gender::tag));
        tags.extend(self.number.map(Number::tag));
        tags.extend(self.case.map(Case::tag));
        tags.extend(self.mood.map(Mood::tag));
        tags.extend(self.person.map(Person::tag));
        tags.extend(self.governs.iter().map(governed_tag));
        tags
    }
}

/// Tag used for a governed case, distinct from the word's own case tag.
#[must_use]
pub const fn governed_tag(case: Case) -> &'static str {
    match case {
        Case::Nominative => "GovNomn",
        Case::Genitive => "GovGent",
        Case::Dative => "GovDatv",
        Case::Accusative => "GovAccs",
        Case::Instrumental => "GovAblt",
        Case::Prepositional => "GovLoct",
    }
}
