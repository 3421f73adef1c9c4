//! CST to phrase tree conversion.
//!
//! Every [`RuleKind`] has exactly one arm here. Folded slots are expanded
//! again: a coordination group becomes [`Phrase::CoordinatedNouns`] and a
//! composite group becomes [`Phrase::CompositeNumeral`], both in source order.

use std::fmt;

use crate::cst::{CstNode, RuleNode};
use crate::enumerator::Terminal;
use crate::grammar::RuleKind;
use crate::lattice::GroupKind;
use crate::phrase::{Phrase, Word};

/// A rule node missing a child its phrase needs.
///
/// Custom grammars may make any element optional, so a parse tree can be
/// valid for the parser and still have no phrase shape. The pipeline treats
/// such a tree like a sequence that did not parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeMismatch {
    /// The rule whose node is incomplete.
    pub kind: RuleKind,
    /// Element index of the missing child.
    pub index: usize,
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} node has no child {}", self.kind, self.index)
    }
}

impl std::error::Error for ShapeMismatch {}

/// Converts a parse tree into a phrase tree.
///
/// # Errors
///
/// Returns a [`ShapeMismatch`] if a rule node lacks a child its phrase
/// requires. Trees from the standard grammar always convert.
pub fn to_ast(node: &CstNode<'_>) -> Result<Phrase, ShapeMismatch> {
    match node {
        CstNode::Terminal(terminal) => Ok(terminal_phrase(*terminal)),
        CstNode::Rule(rule) => rule_phrase(rule),
    }
}

fn rule_phrase(node: &RuleNode<'_>) -> Result<Phrase, ShapeMismatch> {
    Ok(match node.kind {
        RuleKind::Show | RuleKind::Sort => Phrase::VerbPhrase {
            verb: word(node, 0)?,
            object: Box::new(required(node, 1)?),
        },
        RuleKind::Phrase | RuleKind::Object => required(node, 0)?,
        RuleKind::AdjNoun => Phrase::AdjNounPhrase {
            adjective: word(node, 0)?,
            noun: Box::new(required(node, 1)?),
            complement: optional(node, 2)?,
        },
        RuleKind::NumeralNoun => Phrase::NumeralNounPhrase {
            numeral: Box::new(required(node, 0)?),
            noun: Box::new(required(node, 1)?),
            complement: optional(node, 2)?,
        },
        RuleKind::Numeral | RuleKind::NounHead => required(node, 0)?,
        RuleKind::NounPhrase => attach(required(node, 0)?, optional(node, 1)?),
        RuleKind::PrepPhrase => Phrase::PrepPhrase {
            preposition: word(node, 0)?,
            noun: Box::new(required(node, 1)?),
        },
    })
}

/// A terminal on its own: a numeral, a noun, or a folded group.
fn terminal_phrase(terminal: Terminal<'_>) -> Phrase {
    let alternative = terminal.alternative;
    let expand = || {
        terminal
            .group()
            .map(|group| {
                group
                    .expand(alternative)
                    .into_iter()
                    .map(Word::from_reading)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|| vec![Word::from_alternative(alternative)])
    };

    match terminal.group().map(|g| g.kind()) {
        Some(GroupKind::Coordination) => Phrase::CoordinatedNouns {
            nouns: expand(),
            complement: None,
        },
        Some(GroupKind::Composite) => Phrase::CompositeNumeral {
            parts: expand(),
            value: alternative.value(),
        },
        None if alternative.tags().iter().any(|t| *t == "NUMR" || *t == "NUMBER") => {
            Phrase::CompositeNumeral {
                parts: expand(),
                value: alternative.value(),
            }
        }
        None => Phrase::NounPhrase {
            noun: Word::from_alternative(alternative),
            complement: None,
        },
    }
}

/// Puts a complement on a noun phrase or coordinated list.
fn attach(head: Phrase, complement: Option<Box<Phrase>>) -> Phrase {
    match head {
        Phrase::NounPhrase { noun, .. } => Phrase::NounPhrase { noun, complement },
        Phrase::CoordinatedNouns { nouns, .. } => Phrase::CoordinatedNouns { nouns, complement },
        other => other,
    }
}

fn child<'n, 'a>(node: &'n RuleNode<'a>, index: usize) -> Result<&'n CstNode<'a>, ShapeMismatch> {
    node.child(index).ok_or(ShapeMismatch {
        kind: node.kind,
        index,
    })
}

fn required(node: &RuleNode<'_>, index: usize) -> Result<Phrase, ShapeMismatch> {
    to_ast(child(node, index)?)
}

fn optional(node: &RuleNode<'_>, index: usize) -> Result<Option<Box<Phrase>>, ShapeMismatch> {
    node.child(index).map(|c| to_ast(c).map(Box::new)).transpose()
}

fn word(node: &RuleNode<'_>, index: usize) -> Result<Word, ShapeMismatch> {
    child(node, index)?
        .head_terminal()
        .map(|terminal| Word::from_alternative(terminal.alternative))
        .ok_or(ShapeMismatch {
            kind: node.kind,
            index,
        })
}
