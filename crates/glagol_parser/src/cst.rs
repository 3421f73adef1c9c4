//! Concrete syntax trees and the parser that builds them.
//!
//! The parser is a recursive descent over one concrete sequence. At each rule
//! it picks the first production that can start with the next terminal and
//! commits to it: there is no backtracking inside a sequence. A parse only
//! succeeds if the template's top rule consumes every terminal.

use std::fmt;

use crate::enumerator::{Sequence, Terminal};
use crate::grammar::{Grammar, Head, RuleKind, Symbol};

/// A node in a concrete syntax tree.
#[derive(Clone, Debug)]
pub enum CstNode<'a> {
    /// A consumed terminal.
    Terminal(Terminal<'a>),
    /// A rule application.
    Rule(RuleNode<'a>),
}

impl<'a> CstNode<'a> {
    /// Returns the grammatical summary of the node.
    #[must_use]
    pub fn head(&self) -> Head {
        match self {
            Self::Terminal(terminal) => Head {
                features: terminal.alternative.features(),
                value: terminal.alternative.value(),
            },
            Self::Rule(rule) => rule.head,
        }
    }

    /// Follows head children down to the head terminal.
    #[must_use]
    pub fn head_terminal(&self) -> Option<Terminal<'a>> {
        match self {
            Self::Terminal(terminal) => Some(*terminal),
            Self::Rule(rule) => rule.child(rule.head_index)?.head_terminal(),
        }
    }

    /// Returns the consumed terminals in order.
    #[must_use]
    pub fn terminals(&self) -> Vec<Terminal<'a>> {
        let mut out = Vec::new();
        self.collect_terminals(&mut out);
        out
    }

    fn collect_terminals(&self, out: &mut Vec<Terminal<'a>>) {
        match self {
            Self::Terminal(terminal) => out.push(*terminal),
            Self::Rule(rule) => {
                for child in rule.children.iter().flatten() {
                    child.collect_terminals(out);
                }
            }
        }
    }
}

/// A rule application: one child slot per production element.
#[derive(Clone, Debug)]
pub struct RuleNode<'a> {
    /// The rule that produced this node.
    pub kind: RuleKind,
    /// Index of the chosen production within the rule.
    pub production: usize,
    /// Children in element order; `None` for an absent optional element.
    pub children: Vec<Option<CstNode<'a>>>,
    /// Index of the head child.
    pub head_index: usize,
    /// Grammatical summary of the node.
    pub head: Head,
}

impl<'a> RuleNode<'a> {
    /// Returns the child at `index`, if present.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&CstNode<'a>> {
        self.children.get(index).and_then(Option::as_ref)
    }
}

/// Why a sequence did not parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The grammar has no rule of this kind.
    UndefinedRule(RuleKind),
    /// No production of the rule can start at this position.
    NoProduction(RuleKind),
    /// A required terminal did not match.
    Expected(String),
    /// A production parsed but its constraints failed.
    Constraint(RuleKind),
    /// The top rule finished before the end of the sequence.
    Leftover,
}

/// A failed parse of one sequence. Not an error: the next sequence is tried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFailure {
    /// Terminal position where parsing stopped.
    pub position: usize,
    /// Why it stopped.
    pub reason: FailureReason,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            FailureReason::UndefinedRule(kind) => write!(f, "rule {kind} is not defined"),
            FailureReason::NoProduction(kind) => {
                write!(f, "no {kind} production starts at {}", self.position)
            }
            FailureReason::Expected(pattern) => {
                write!(f, "expected {pattern} at {}", self.position)
            }
            FailureReason::Constraint(kind) => {
                write!(f, "{kind} ending at {} violates agreement", self.position)
            }
            FailureReason::Leftover => write!(f, "unconsumed input at {}", self.position),
        }
    }
}

/// Parses concrete sequences with a grammar.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
}

impl<'g> Parser<'g> {
    /// Creates a parser over a grammar.
    #[must_use]
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Parses a whole sequence with `top` as the start rule.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseFailure`] if the sequence does not parse or leaves
    /// terminals unconsumed.
    pub fn parse<'a>(
        &self,
        top: RuleKind,
        sequence: &Sequence<'a>,
    ) -> Result<CstNode<'a>, ParseFailure> {
        let terminals = sequence.terminals();
        let mut position = 0;
        let node = self.rule(top, terminals, &mut position)?;
        if position < terminals.len() {
            return Err(ParseFailure {
                position,
                reason: FailureReason::Leftover,
            });
        }
        Ok(CstNode::Rule(node))
    }

    fn rule<'a>(
        &self,
        kind: RuleKind,
        terminals: &[Terminal<'a>],
        position: &mut usize,
    ) -> Result<RuleNode<'a>, ParseFailure> {
        let fail = |position, reason| ParseFailure { position, reason };
        let rule = self
            .grammar
            .rule(kind)
            .ok_or_else(|| fail(*position, FailureReason::UndefinedRule(kind)))?;

        let next = terminals.get(*position);
        let chosen = rule
            .productions
            .iter()
            .position(|p| {
                next.is_some_and(|t| self.grammar.production_starts(p, t.alternative))
            })
            .or_else(|| rule.productions.iter().position(|p| p.is_nullable()))
            .ok_or_else(|| fail(*position, FailureReason::NoProduction(kind)))?;
        let production = &rule.productions[chosen];

        let mut children = Vec::with_capacity(production.elements.len());
        for element in &production.elements {
            let present = terminals
                .get(*position)
                .is_some_and(|t| self.grammar.starts(&element.symbol, t.alternative));
            if element.optional && !present {
                children.push(None);
                continue;
            }
            let child = match &element.symbol {
                Symbol::Terminal(pattern) => {
                    let terminal = terminals
                        .get(*position)
                        .filter(|t| pattern.matches(t.alternative))
                        .ok_or_else(|| fail(*position, FailureReason::Expected(pattern.to_string())))?;
                    *position += 1;
                    CstNode::Terminal(*terminal)
                }
                Symbol::Rule(inner) => CstNode::Rule(self.rule(*inner, terminals, position)?),
            };
            children.push(Some(child));
        }

        let heads: Vec<_> = children
            .iter()
            .map(|c| c.as_ref().map(CstNode::head))
            .collect();
        if !production.accepts(&heads) {
            return Err(fail(*position, FailureReason::Constraint(kind)));
        }

        Ok(RuleNode {
            kind,
            production: chosen,
            head_index: production.head,
            head: production.head_of(&heads),
            children,
        })
    }
}
