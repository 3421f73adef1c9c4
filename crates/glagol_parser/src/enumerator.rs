//! Candidate enumeration.
//!
//! Walks the Cartesian product of a lattice's slots in odometer order: the
//! last slot varies fastest, so consecutive sequences share the longest
//! possible prefix. Enumeration is lazy; callers stop pulling as soon as a
//! sequence parses.

use std::iter::FusedIterator;

use crate::lattice::{Alternative, Group, Slot};

/// One chosen alternative, with the slot it came from.
#[derive(Clone, Copy, Debug)]
pub struct Terminal<'a> {
    /// The chosen alternative.
    pub alternative: &'a Alternative,
    /// The slot, for its group and source text.
    pub slot: &'a Slot,
}

impl<'a> Terminal<'a> {
    /// Returns the group folded into the slot, if any.
    #[must_use]
    pub fn group(&self) -> Option<&'a Group> {
        self.slot.group()
    }
}

/// A concrete sequence: exactly one alternative per slot.
#[derive(Clone, Debug)]
pub struct Sequence<'a> {
    terminals: Vec<Terminal<'a>>,
}

impl<'a> Sequence<'a> {
    /// Returns the terminals in slot order.
    #[must_use]
    pub fn terminals(&self) -> &[Terminal<'a>] {
        &self.terminals
    }

    /// Returns the terminal at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Terminal<'a>> {
        self.terminals.get(index).copied()
    }

    /// Returns the sequence length, which is always the slot count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    /// Returns true for the sequence of an empty lattice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    /// Returns the signature of every terminal.
    #[must_use]
    pub fn signatures(&self) -> Vec<String> {
        self.terminals
            .iter()
            .map(|t| t.alternative.signature())
            .collect()
    }
}

/// Lazy iterator over the concrete sequences of a lattice.
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    slots: &'a [Slot],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> Candidates<'a> {
    /// Starts enumeration at the first alternative of every slot.
    #[must_use]
    pub fn new(slots: &'a [Slot]) -> Self {
        Self {
            slots,
            indices: vec![0; slots.len()],
            exhausted: slots.is_empty() || slots.iter().any(Slot::is_empty),
        }
    }

    fn current(&self) -> Sequence<'a> {
        let terminals = self
            .slots
            .iter()
            .zip(&self.indices)
            .map(|(slot, &index)| Terminal {
                alternative: &slot.alternatives()[index],
                slot,
            })
            .collect();
        Sequence { terminals }
    }

    /// Advances the odometer. Returns false once every position has wrapped.
    fn advance(&mut self) -> bool {
        for (position, slot) in self.slots.iter().enumerate().rev() {
            self.indices[position] += 1;
            if self.indices[position] < slot.len() {
                return true;
            }
            self.indices[position] = 0;
        }
        false
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = Sequence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let sequence = self.current();
        self.exhausted = !self.advance();
        Some(sequence)
    }
}

impl FusedIterator for Candidates<'_> {}
