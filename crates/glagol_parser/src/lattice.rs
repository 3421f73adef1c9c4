//! The reading lattice.
//!
//! A lattice is a sequence of slots, one per significant token, where each
//! slot holds every admissible reading of its token. Two folds then collapse
//! multi-token constructs into single slots:
//!
//! - composite numerals (`двести восемьдесят шесть` becomes one numeral
//!   slot whose readings carry the value 286);
//! - coordinated nouns (`минска и пинска` becomes one noun slot whose
//!   readings are narrowed to the cases every member shares).
//!
//! Folded slots remember their members in a [`Group`] so the tree builder can
//! expand them again.

use glagol_foundation::{
    Case, CaseSet, CoordinationViolation, Error, ErrorContext, FeatureSet, NumeralViolation,
    Result, WordReading,
};
use glagol_morphology::{Lexicon, MorphAnalyzer};
use tracing::{debug, trace};

use crate::enumerator::Candidates;
use crate::tokenizer::{Token, TokenType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Terminal tag of a non-word token.
#[must_use]
pub const fn token_tag(token_type: TokenType) -> &'static str {
    match token_type {
        TokenType::Word => "WORD",
        TokenType::Comma => "COMMA",
        TokenType::Number => "NUMBER",
        TokenType::Date => "DATE",
        TokenType::Identifier => "IDENT",
        TokenType::PunctuationMark => "PUNCT",
        TokenType::WhiteSpace => "SPACE",
        TokenType::LineBreak => "EOL",
    }
}

/// One alternative in a slot: a word reading or a bare token.
///
/// Word tokens the lexicon does not know stay as bare tokens tagged `WORD`,
/// which no grammar terminal accepts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alternative {
    /// A morphological reading of a word token.
    Reading(WordReading),
    /// A token taken as is.
    Token(Token),
}

impl Alternative {
    /// Returns the reading, if this is one.
    #[must_use]
    pub fn reading(&self) -> Option<&WordReading> {
        match self {
            Self::Reading(reading) => Some(reading),
            Self::Token(_) => None,
        }
    }

    /// Returns the signature used as the grammar terminal key.
    #[must_use]
    pub fn signature(&self) -> String {
        match self {
            Self::Reading(reading) => reading.signature.clone(),
            Self::Token(token) => token_tag(token.token_type).to_string(),
        }
    }

    /// Returns the tags terminal patterns are matched against.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        match self {
            Self::Reading(reading) => reading.tags(),
            Self::Token(token) => vec![token_tag(token.token_type)],
        }
    }

    /// Returns the lemma of a reading.
    #[must_use]
    pub fn lemma(&self) -> Option<&str> {
        self.reading().map(|r| r.lemma.as_str())
    }

    /// Returns the text of the alternative.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Reading(reading) => &reading.surface,
            Self::Token(token) => &token.image,
        }
    }

    /// Returns grammatical features. Tokens have none.
    #[must_use]
    pub fn features(&self) -> FeatureSet {
        self.reading().map(|r| r.features).unwrap_or_default()
    }

    /// Returns the numeric value of a numeral reading or a whole number literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Reading(reading) => reading.value,
            Self::Token(token) => token
                .value
                .filter(|v| v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(v))
                .map(|v| v as u32),
        }
    }

    fn is_numeral(&self) -> bool {
        self.reading().is_some_and(WordReading::is_numeral)
    }

    fn is_conjunction(&self) -> bool {
        self.reading().is_some_and(WordReading::is_conjunction)
    }

    fn is_comma(&self) -> bool {
        matches!(self, Self::Token(token) if token.token_type == TokenType::Comma)
    }
}

/// Which fold produced a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupKind {
    /// A composite numeral.
    Composite,
    /// Coordinated nouns.
    Coordination,
}

/// The original words folded into one slot.
///
/// Each member keeps every reading that survived the fold, so the member
/// matching a chosen alternative can be recovered.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    kind: GroupKind,
    members: Vec<Vec<WordReading>>,
}

impl Group {
    /// Returns the group kind.
    #[must_use]
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Returns the surviving readings of each member, in source order.
    #[must_use]
    pub fn members(&self) -> &[Vec<WordReading>] {
        &self.members
    }

    /// Returns one reading per member, agreeing in case with `chosen`.
    ///
    /// Members without a reading in that case fall back to their first one.
    #[must_use]
    pub fn expand(&self, chosen: &Alternative) -> Vec<&WordReading> {
        let case = chosen.features().case;
        self.members
            .iter()
            .filter_map(|readings| {
                readings
                    .iter()
                    .find(|r| r.features.case == case)
                    .or_else(|| readings.first())
            })
            .collect()
    }
}

/// One position in the lattice. Never empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    alternatives: Vec<Alternative>,
    group: Option<Group>,
    text: String,
    start_offset: usize,
}

impl Slot {
    /// Creates a slot. Returns `None` if there are no alternatives.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        start_offset: usize,
        alternatives: Vec<Alternative>,
    ) -> Option<Self> {
        if alternatives.is_empty() {
            return None;
        }
        Some(Self {
            alternatives,
            group: None,
            text: text.into(),
            start_offset,
        })
    }

    /// Creates the base slot of a token: its readings, or the token itself.
    #[must_use]
    pub fn from_token(token: &Token, readings: Vec<WordReading>) -> Self {
        let alternatives = if readings.is_empty() {
            vec![Alternative::Token(token.clone())]
        } else {
            readings.into_iter().map(Alternative::Reading).collect()
        };
        Self {
            alternatives,
            group: None,
            text: token.image.clone(),
            start_offset: token.start_offset,
        }
    }

    /// Returns the alternatives in enumeration order.
    #[must_use]
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Returns the folded group, if any.
    #[must_use]
    pub fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    /// Returns the source text covered by the slot.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the byte offset of the slot's first token.
    #[must_use]
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Returns the number of alternatives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Always false: slots cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    fn is_numeral(&self) -> bool {
        self.group.is_none() && self.alternatives.iter().all(Alternative::is_numeral)
    }

    fn is_comma(&self) -> bool {
        self.alternatives.iter().any(Alternative::is_comma)
    }

    fn is_conjunction(&self) -> bool {
        self.alternatives.iter().any(Alternative::is_conjunction)
    }

    fn readings(&self) -> impl Iterator<Item = &WordReading> {
        self.alternatives.iter().filter_map(Alternative::reading)
    }

    fn nouns(&self) -> impl Iterator<Item = &WordReading> {
        self.readings().filter(|r| r.is_noun())
    }

    fn noun_cases(&self) -> CaseSet {
        cases_of(self.nouns())
    }
}

/// Cases covered by a set of readings. A reading without case covers all of them.
fn cases_of<'a>(readings: impl Iterator<Item = &'a WordReading>) -> CaseSet {
    readings.fold(CaseSet::EMPTY, |set, r| match r.features.case {
        Some(case) => set.with(case),
        None => CaseSet::ALL,
    })
}

fn in_cases(reading: &WordReading, cases: CaseSet) -> bool {
    reading.features.case.is_none_or(|case| cases.contains(case))
}

/// The slot sequence for one sentence.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lattice {
    slots: Vec<Slot>,
}

impl Lattice {
    /// Builds and folds the lattice of a sentence.
    ///
    /// Layout tokens are dropped. Every word token is analyzed once.
    ///
    /// # Errors
    ///
    /// Returns a composite numeral error or a coordination structure error
    /// when a fold finds a malformed run.
    pub fn build<L: Lexicon>(tokens: &[Token], analyzer: &MorphAnalyzer<L>) -> Result<Self> {
        let slots: Vec<Slot> = tokens
            .iter()
            .filter(|t| !t.is_layout())
            .map(|token| {
                let readings = if token.token_type == TokenType::Word {
                    analyzer.analyze(&token.image)
                } else {
                    Vec::new()
                };
                Slot::from_token(token, readings)
            })
            .collect();

        let sentence = slots.iter().map(Slot::text).collect::<Vec<_>>().join(" ");
        let lattice = Self::fold(slots).map_err(|e| {
            e.with_context(
                ErrorContext::new()
                    .with_sentence(sentence)
                    .with_stage("lattice"),
            )
        })?;
        debug!(slots = lattice.len(), "built lattice");
        Ok(lattice)
    }

    /// Applies both folds to base slots: numerals first, then coordination.
    ///
    /// # Errors
    ///
    /// See [`Lattice::build`].
    pub fn fold(slots: Vec<Slot>) -> Result<Self> {
        let slots = fold_composite_numerals(slots)?;
        let slots = fold_coordination(slots)?;
        Ok(Self { slots })
    }

    /// Wraps slots without folding.
    #[must_use]
    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Returns the slots.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the slot count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of concrete sequences, saturating at `usize::MAX`.
    #[must_use]
    pub fn sequence_count(&self) -> usize {
        if self.slots.is_empty() {
            return 0;
        }
        self.slots
            .iter()
            .fold(1usize, |count, slot| count.saturating_mul(slot.len()))
    }

    /// Lazily enumerates every concrete sequence.
    #[must_use]
    pub fn candidates(&self) -> Candidates<'_> {
        Candidates::new(&self.slots)
    }
}

// =============================================================================
// Composite numerals
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Magnitude {
    Ones,
    Teens,
    Tens,
    Hundreds,
}

impl Magnitude {
    fn of(value: u32) -> Option<Self> {
        match value {
            0..=9 => Some(Self::Ones),
            10..=19 => Some(Self::Teens),
            20..=99 => Some(Self::Tens),
            100..=999 => Some(Self::Hundreds),
            _ => None,
        }
    }

    fn rank(self) -> u8 {
        self as u8
    }

    /// Checks that `self` may follow the magnitudes already seen.
    fn follows(self, seen: &[Magnitude]) -> std::result::Result<(), NumeralViolation> {
        let has = |m: Magnitude| seen.contains(&m);
        if has(self) {
            return Err(NumeralViolation::RepeatedMagnitude);
        }
        match self {
            Self::Teens if has(Self::Ones) => return Err(NumeralViolation::OnesWithTeens),
            Self::Ones if has(Self::Teens) => return Err(NumeralViolation::OnesWithTeens),
            // Teens fill the tens digit.
            Self::Teens if has(Self::Tens) => return Err(NumeralViolation::RepeatedMagnitude),
            _ => {}
        }
        if seen.last().is_some_and(|last| last.rank() < self.rank()) {
            return Err(NumeralViolation::OutOfOrder);
        }
        Ok(())
    }
}

fn fold_composite_numerals(slots: Vec<Slot>) -> Result<Vec<Slot>> {
    let mut folded = Vec::with_capacity(slots.len());
    let mut run = Vec::new();

    for slot in slots {
        if slot.is_numeral() {
            run.push(slot);
            continue;
        }
        flush_numeral_run(&mut folded, std::mem::take(&mut run))?;
        folded.push(slot);
    }
    flush_numeral_run(&mut folded, run)?;

    Ok(folded)
}

fn flush_numeral_run(folded: &mut Vec<Slot>, run: Vec<Slot>) -> Result<()> {
    if run.len() < 2 {
        folded.extend(run);
    } else {
        folded.push(compose_numeral(run)?);
    }
    Ok(())
}

fn compose_numeral(run: Vec<Slot>) -> Result<Slot> {
    let words: Vec<String> = run.iter().map(|s| s.text.clone()).collect();
    let fail = |reason| Error::composite_numeral(words.clone(), reason);

    let mut seen = Vec::with_capacity(run.len());
    let mut total = 0u32;
    for slot in &run {
        let value = slot
            .readings()
            .find_map(|r| r.value)
            .ok_or_else(|| fail(NumeralViolation::UnsupportedMagnitude))?;
        let magnitude = Magnitude::of(value).ok_or_else(|| fail(NumeralViolation::UnsupportedMagnitude))?;
        magnitude.follows(&seen).map_err(fail)?;
        seen.push(magnitude);
        total += value;
    }

    let cases = run
        .iter()
        .map(|slot| cases_of(slot.readings()))
        .fold(CaseSet::ALL, CaseSet::intersection);
    if cases.is_empty() {
        return Err(fail(NumeralViolation::CaseMismatch));
    }

    let members: Vec<Vec<WordReading>> = run
        .iter()
        .map(|slot| slot.readings().filter(|r| in_cases(r, cases)).cloned().collect())
        .collect();
    let alternatives: Vec<Alternative> = members
        .last()
        .into_iter()
        .flatten()
        .map(|r| Alternative::Reading(r.clone().with_value(total)))
        .collect();

    trace!(words = ?words, value = total, "folded composite numeral");
    Ok(Slot {
        alternatives,
        group: Some(Group {
            kind: GroupKind::Composite,
            members,
        }),
        text: words.join(" "),
        start_offset: run[0].start_offset,
    })
}

// =============================================================================
// Coordinated nouns
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Separator {
    Comma,
    Conjunction,
}

/// A coordination run: noun slot indices and the cases they share.
struct Run {
    nouns: Vec<usize>,
    cases: CaseSet,
}

fn fold_coordination(slots: Vec<Slot>) -> Result<Vec<Slot>> {
    let mut folded = Vec::with_capacity(slots.len());
    let mut index = 0;

    while index < slots.len() {
        match coordination_run(&slots, index)? {
            Some(run) => {
                let end = run.nouns.last().copied().unwrap_or(index);
                folded.push(coordinate(&slots[index..=end], &run, index));
                index = end + 1;
            }
            None => {
                folded.push(slots[index].clone());
                index += 1;
            }
        }
    }

    Ok(folded)
}

/// Scans forward from an anchor noun.
///
/// Nouns must be separated by a comma or a conjunction (`, и` is allowed).
/// The run stops at the first slot that is neither a separator nor a noun
/// sharing a case with the run so far; trailing separators are left out.
fn coordination_run(slots: &[Slot], anchor: usize) -> Result<Option<Run>> {
    let head = &slots[anchor];
    if head.group.is_some() {
        return Ok(None);
    }
    let mut cases = head.noun_cases();
    if cases.is_empty() {
        return Ok(None);
    }

    let violation = |at: usize, reason| {
        let words = slots[anchor..=at].iter().map(|s| s.text.clone()).collect();
        Error::coordination(words, slots[at].start_offset, reason)
    };

    let mut nouns = vec![anchor];
    let mut separator = None;
    for (index, slot) in slots.iter().enumerate().skip(anchor + 1) {
        if slot.is_comma() {
            match separator {
                Some(Separator::Comma) => {
                    return Err(violation(index, CoordinationViolation::ConsecutiveCommas));
                }
                Some(Separator::Conjunction) => {
                    return Err(violation(index, CoordinationViolation::CommaAfterConjunction));
                }
                None => separator = Some(Separator::Comma),
            }
        } else if slot.is_conjunction() {
            if separator == Some(Separator::Conjunction) {
                return Err(violation(index, CoordinationViolation::ConsecutiveConjunctions));
            }
            separator = Some(Separator::Conjunction);
        } else {
            if separator.is_none() || slot.group.is_some() {
                break;
            }
            let narrowed = cases.intersection(slot.noun_cases());
            if narrowed.is_empty() {
                break;
            }
            cases = narrowed;
            nouns.push(index);
            separator = None;
        }
    }

    Ok((nouns.len() >= 2).then_some(Run { nouns, cases }))
}

fn coordinate(span: &[Slot], run: &Run, offset: usize) -> Slot {
    let members: Vec<Vec<WordReading>> = run
        .nouns
        .iter()
        .map(|&index| {
            span[index - offset]
                .nouns()
                .filter(|r| in_cases(r, run.cases))
                .cloned()
                .collect()
        })
        .collect();
    let alternatives = members
        .first()
        .into_iter()
        .flatten()
        .cloned()
        .map(Alternative::Reading)
        .collect();
    let text = span.iter().map(Slot::text).collect::<Vec<_>>().join(" ");

    trace!(text = %text, members = members.len(), "folded coordination");
    Slot {
        alternatives,
        group: Some(Group {
            kind: GroupKind::Coordination,
            members,
        }),
        text,
        start_offset: span[0].start_offset,
    }
}

/// Cases a slot can take, for diagnostics.
#[must_use]
pub fn slot_cases(slot: &Slot) -> Vec<Case> {
    cases_of(slot.readings()).iter().collect()
}
