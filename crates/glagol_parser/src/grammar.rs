//! Sentence grammars.
//!
//! A grammar is a set of rules, one per [`RuleKind`], plus named templates
//! that each pick a top rule. Rules are lists of productions; a production is
//! a fixed sequence of terminal patterns and rule references, each optionally
//! marked optional, with agreement constraints over its children.
//!
//! The parser chooses a production by looking at the next terminal only, so
//! productions of one rule must start differently. Ambiguity is never
//! resolved here: it lives in the lattice, and a sequence that fails is
//! simply replaced by the next one.

use std::fmt;

use glagol_foundation::{Case, CaseSet, FeatureSet, Number};

use crate::lattice::Alternative;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Version of the standard grammar. Bumped whenever its templates change shape.
pub const GRAMMAR_VERSION: &str = "1.1.0";

/// Syntactic categories.
///
/// Closed on purpose: the tree builder matches on every kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RuleKind {
    /// Imperative "show X".
    Show,
    /// Imperative "sort by X".
    Sort,
    /// A bare object phrase.
    Phrase,
    /// Any noun-headed object.
    Object,
    /// Adjective plus noun.
    AdjNoun,
    /// Quantity plus noun.
    NumeralNoun,
    /// A numeral word or number literal.
    Numeral,
    /// Noun with an optional prepositional complement.
    NounPhrase,
    /// A noun or an identifier.
    NounHead,
    /// Preposition plus noun.
    PrepPhrase,
}

impl RuleKind {
    /// Returns the rule name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Sort => "sort",
            Self::Phrase => "phrase",
            Self::Object => "object",
            Self::AdjNoun => "adj-noun",
            Self::NumeralNoun => "numeral-noun",
            Self::Numeral => "numeral",
            Self::NounPhrase => "noun-phrase",
            Self::NounHead => "noun-head",
            Self::PrepPhrase => "prep-phrase",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A terminal pattern: required tags plus an optional lemma restriction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    tags: Vec<String>,
    lemmas: Vec<String>,
}

impl Pattern {
    /// Creates a pattern from space-separated tags, e.g. `"VERB Impr"`.
    #[must_use]
    pub fn new(tags: &str) -> Self {
        Self {
            tags: tags.split_whitespace().map(String::from).collect(),
            lemmas: Vec::new(),
        }
    }

    /// Restricts the pattern to readings of these lemmas.
    #[must_use]
    pub fn with_lemmas<I, S>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lemmas = lemmas.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the alternative carries every tag (and an allowed lemma).
    #[must_use]
    pub fn matches(&self, alternative: &Alternative) -> bool {
        let tags = alternative.tags();
        self.tags.iter().all(|tag| tags.iter().any(|t| *t == tag.as_str()))
            && (self.lemmas.is_empty()
                || alternative
                    .lemma()
                    .is_some_and(|lemma| self.lemmas.iter().any(|l| l == lemma)))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join(" "))?;
        if !self.lemmas.is_empty() {
            write!(f, "[{}]", self.lemmas.join("|"))?;
        }
        Ok(())
    }
}

/// A production element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// Matches one terminal.
    Terminal(Pattern),
    /// Recurses into a rule.
    Rule(RuleKind),
}

/// A symbol in a production, possibly optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// The symbol.
    pub symbol: Symbol,
    /// Whether the symbol may be absent.
    pub optional: bool,
}

impl Element {
    /// A required terminal.
    #[must_use]
    pub fn terminal(pattern: Pattern) -> Self {
        Self {
            symbol: Symbol::Terminal(pattern),
            optional: false,
        }
    }

    /// A required rule reference.
    #[must_use]
    pub fn rule(kind: RuleKind) -> Self {
        Self {
            symbol: Symbol::Rule(kind),
            optional: false,
        }
    }

    /// Marks the element optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Features compared by [`Constraint::Agree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    /// Grammatical case.
    Case,
    /// Grammatical number.
    Number,
    /// Gender, compared only when neither side is plural.
    Gender,
    /// Animacy.
    Animacy,
}

impl Feature {
    /// Case, number, gender, and animacy.
    pub const NOMINAL: [Feature; 4] = [Self::Case, Self::Number, Self::Gender, Self::Animacy];
}

/// The grammatical summary of a parsed constituent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Head {
    /// Features of the head word, filled in from agreeing dependents.
    pub features: FeatureSet,
    /// Numeric value of a quantity head.
    pub value: Option<u32>,
}

/// A condition over a production's children, by element index.
///
/// Constraints referring to an absent optional child hold trivially.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// Two children agree in the listed features.
    Agree {
        /// First child.
        left: usize,
        /// Second child.
        right: usize,
        /// Compared features.
        features: Vec<Feature>,
    },
    /// A preposition governs the case of a noun.
    Governs {
        /// The preposition.
        preposition: usize,
        /// The governed noun.
        noun: usize,
    },
    /// A quantity selects the case and number of a noun.
    Quantifies {
        /// The numeral or number literal.
        numeral: usize,
        /// The counted noun.
        noun: usize,
    },
    /// A child is in one of the given cases.
    Case {
        /// The child.
        child: usize,
        /// Allowed cases.
        cases: CaseSet,
    },
}

impl Constraint {
    /// Agreement in case, number, gender, and animacy.
    #[must_use]
    pub fn agree(left: usize, right: usize) -> Self {
        Self::Agree {
            left,
            right,
            features: Feature::NOMINAL.to_vec(),
        }
    }

    /// Checks the constraint against the children's heads.
    #[must_use]
    pub fn holds(&self, heads: &[Option<Head>]) -> bool {
        let head = |index: usize| heads.get(index).copied().flatten();
        match self {
            Self::Agree {
                left,
                right,
                features,
            } => match (head(*left), head(*right)) {
                (Some(a), Some(b)) => agree(&a.features, &b.features, features),
                _ => true,
            },
            Self::Governs { preposition, noun } => match (head(*preposition), head(*noun)) {
                (Some(p), Some(n)) => governs(&p.features, &n.features),
                _ => true,
            },
            Self::Quantifies { numeral, noun } => match (head(*numeral), head(*noun)) {
                (Some(q), Some(n)) => quantifies(&q, &n.features),
                _ => true,
            },
            Self::Case { child, cases } => head(*child)
                .is_none_or(|h| h.features.case.is_none_or(|case| cases.contains(case))),
        }
    }

    /// Returns the child a head fills its missing features from, if the
    /// constraint is an agreement involving `head`.
    fn agreeing_partner(&self, head: usize) -> Option<usize> {
        match self {
            Self::Agree { left, right, .. } if *left == head => Some(*right),
            Self::Agree { left, right, .. } if *right == head => Some(*left),
            _ => None,
        }
    }
}

fn compatible<T: PartialEq>(a: Option<T>, b: Option<T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

fn agree(a: &FeatureSet, b: &FeatureSet, features: &[Feature]) -> bool {
    features.iter().all(|feature| match feature {
        Feature::Case => compatible(a.case, b.case),
        Feature::Number => compatible(a.number, b.number),
        Feature::Gender => {
            a.number == Some(Number::Plural)
                || b.number == Some(Number::Plural)
                || compatible(a.gender, b.gender)
        }
        Feature::Animacy => compatible(a.animacy, b.animacy),
    })
}

fn governs(preposition: &FeatureSet, noun: &FeatureSet) -> bool {
    preposition.governs.is_empty()
        || noun
            .case
            .is_none_or(|case| preposition.governs.contains(case))
}

/// Russian numeral government.
///
/// In the nominative or accusative, a number ending in 1 (but not 11) takes a
/// singular noun in the same case, 2 to 4 (but not 12 to 14) the genitive
/// singular, and anything else the genitive plural. In oblique cases the noun
/// takes the numeral's case, plural unless the number ends in 1. Numerals
/// inflected for gender (один, одна, два, две) also agree in gender.
fn quantifies(numeral: &Head, noun: &FeatureSet) -> bool {
    let Some(value) = numeral.value else {
        return true;
    };
    let ends_in_one = value % 10 == 1 && value % 100 != 11;
    let paucal = (2..=4).contains(&(value % 10)) && !(12..=14).contains(&(value % 100));
    let direct = CaseSet::of(&[Case::Nominative, Case::Accusative]);

    let (cases, number) = match numeral.features.case {
        None | Some(Case::Nominative | Case::Accusative) => {
            if ends_in_one {
                let cases = numeral.features.case.map_or(direct, |c| CaseSet::of(&[c]));
                (cases, Number::Singular)
            } else if paucal {
                (CaseSet::of(&[Case::Genitive]), Number::Singular)
            } else {
                (CaseSet::of(&[Case::Genitive]), Number::Plural)
            }
        }
        Some(oblique) => {
            let number = if ends_in_one {
                Number::Singular
            } else {
                Number::Plural
            };
            (CaseSet::of(&[oblique]), number)
        }
    };

    noun.case.is_none_or(|case| cases.contains(case))
        && compatible(noun.number, Some(number))
        && compatible(noun.gender, numeral.features.gender)
}

/// One alternative of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Production {
    /// Elements in order.
    pub elements: Vec<Element>,
    /// Index of the head element.
    pub head: usize,
    /// Conditions checked once every element is parsed.
    pub constraints: Vec<Constraint>,
}

impl Production {
    /// Creates a production headed by its first element.
    #[must_use]
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            head: 0,
            constraints: Vec::new(),
        }
    }

    /// Sets the head element.
    #[must_use]
    pub fn with_head(mut self, head: usize) -> Self {
        self.head = head;
        self
    }

    /// Adds a constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Returns true if every element is optional.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.elements.iter().all(|e| e.optional)
    }

    /// Checks every constraint.
    #[must_use]
    pub fn accepts(&self, heads: &[Option<Head>]) -> bool {
        self.constraints.iter().all(|c| c.holds(heads))
    }

    /// Computes the head of a parsed production.
    ///
    /// The head child's features win; features it lacks are taken from the
    /// children it agrees with.
    #[must_use]
    pub fn head_of(&self, heads: &[Option<Head>]) -> Head {
        let mut head = heads.get(self.head).copied().flatten().unwrap_or_default();
        for partner in self
            .constraints
            .iter()
            .filter_map(|c| c.agreeing_partner(self.head))
        {
            if let Some(Some(other)) = heads.get(partner) {
                head.features = other.features.merged(head.features);
            }
        }
        head
    }
}

/// A rule: its kind and its productions, tried in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// The category this rule defines.
    pub kind: RuleKind,
    /// Productions in priority order.
    pub productions: Vec<Production>,
}

impl Rule {
    /// Creates a rule.
    #[must_use]
    pub fn new(kind: RuleKind, productions: Vec<Production>) -> Self {
        Self { kind, productions }
    }
}

/// A named sentence template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    /// Template id reported in results.
    pub id: String,
    /// The rule that must consume the whole sentence.
    pub top: RuleKind,
}

/// A set of rules and templates.
///
/// Built once and shared by reference; parsing never mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar {
    version: String,
    rules: Vec<Rule>,
    templates: Vec<Template>,
}

impl Grammar {
    /// Creates an empty grammar.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            rules: Vec::new(),
            templates: Vec::new(),
        }
    }

    /// Adds a rule, replacing any rule of the same kind.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.retain(|r| r.kind != rule.kind);
        self.rules.push(rule);
        self
    }

    /// Adds a template. Templates are tried in the order they are added.
    #[must_use]
    pub fn with_template(mut self, id: impl Into<String>, top: RuleKind) -> Self {
        self.templates.push(Template {
            id: id.into(),
            top,
        });
        self
    }

    /// Returns the grammar version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the rule for a kind.
    #[must_use]
    pub fn rule(&self, kind: RuleKind) -> Option<&Rule> {
        self.rules.iter().find(|r| r.kind == kind)
    }

    /// Returns the templates in trial order.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Looks up a template by id.
    #[must_use]
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Returns true if `symbol` can begin with `alternative`.
    #[must_use]
    pub fn starts(&self, symbol: &Symbol, alternative: &Alternative) -> bool {
        match symbol {
            Symbol::Terminal(pattern) => pattern.matches(alternative),
            Symbol::Rule(kind) => self.rule(*kind).is_some_and(|rule| {
                rule.productions
                    .iter()
                    .any(|p| self.production_starts(p, alternative))
            }),
        }
    }

    /// Returns true if `production` can begin with `alternative`.
    #[must_use]
    pub fn production_starts(&self, production: &Production, alternative: &Alternative) -> bool {
        for element in &production.elements {
            if self.starts(&element.symbol, alternative) {
                return true;
            }
            if !element.optional {
                return false;
            }
        }
        false
    }

    /// The standard query grammar.
    ///
    /// Templates, in trial order:
    /// - `show`: `VERB Impr[показать|вывести|найти] Object PUNCT?`, object accusative
    /// - `sort`: `VERB Impr[отсортировать|упорядочить] PrepPhrase PUNCT?`
    /// - `phrase`: `Object PUNCT?`
    #[must_use]
    pub fn standard() -> Self {
        use RuleKind::{
            AdjNoun, NounHead, NounPhrase, Numeral, NumeralNoun, Object, Phrase, PrepPhrase,
            Show, Sort,
        };

        let punctuation = || Element::terminal(Pattern::new("PUNCT")).optional();
        let complement = || Element::rule(PrepPhrase).optional();
        let single = |tags: &str| Production::new(vec![Element::terminal(Pattern::new(tags))]);

        Self::new(GRAMMAR_VERSION)
            .with_rule(Rule::new(
                Show,
                vec![
                    Production::new(vec![
                        Element::terminal(
                            Pattern::new("VERB Impr").with_lemmas(["показать", "вывести", "найти"]),
                        ),
                        Element::rule(Object),
                        punctuation(),
                    ])
                    .with_constraint(Constraint::Case {
                        child: 1,
                        cases: CaseSet::of(&[Case::Accusative]),
                    }),
                ],
            ))
            .with_rule(Rule::new(
                Sort,
                vec![Production::new(vec![
                    Element::terminal(
                        Pattern::new("VERB Impr").with_lemmas(["отсортировать", "упорядочить"]),
                    ),
                    Element::rule(PrepPhrase),
                    punctuation(),
                ])],
            ))
            .with_rule(Rule::new(
                Phrase,
                vec![Production::new(vec![Element::rule(Object), punctuation()])],
            ))
            .with_rule(Rule::new(
                Object,
                vec![
                    Production::new(vec![Element::rule(AdjNoun)]),
                    Production::new(vec![Element::rule(NumeralNoun)]),
                    Production::new(vec![Element::rule(NounPhrase)]),
                ],
            ))
            .with_rule(Rule::new(
                AdjNoun,
                vec![
                    Production::new(vec![
                        Element::terminal(Pattern::new("ADJF")),
                        Element::rule(NounHead),
                        complement(),
                    ])
                    .with_head(1)
                    .with_constraint(Constraint::agree(0, 1)),
                ],
            ))
            .with_rule(Rule::new(
                NumeralNoun,
                vec![
                    Production::new(vec![
                        Element::rule(Numeral),
                        Element::rule(NounHead),
                        complement(),
                    ])
                    .with_constraint(Constraint::Quantifies { numeral: 0, noun: 1 }),
                ],
            ))
            .with_rule(Rule::new(Numeral, vec![single("NUMR"), single("NUMBER")]))
            .with_rule(Rule::new(
                NounPhrase,
                vec![Production::new(vec![Element::rule(NounHead), complement()])],
            ))
            .with_rule(Rule::new(NounHead, vec![single("NOUN"), single("IDENT")]))
            .with_rule(Rule::new(
                PrepPhrase,
                vec![
                    Production::new(vec![
                        Element::terminal(Pattern::new("PREP")),
                        Element::rule(NounHead),
                    ])
                    .with_constraint(Constraint::Governs {
                        preposition: 0,
                        noun: 1,
                    }),
                ],
            ))
            .with_template("show", Show)
            .with_template("sort", Sort)
            .with_template("phrase", Phrase)
    }
}
