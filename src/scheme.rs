//! Positional character schemes.
//!
//! A scheme maps a zero-based character index to the character found there.
//! Reference domains carry a dense scheme (every index present); censored
//! patterns carry a sparse one that leaves out the censored positions.

use std::collections::BTreeMap;

use crate::censor::CensorSet;

/// Mapping from character position to character.
///
/// Positions are `char` indices, not byte offsets, so multi-byte input keeps
/// one entry per character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheme {
    positions: BTreeMap<usize, char>,
}

impl Scheme {
    /// Build a scheme over `text`, skipping every character in `ignored`.
    pub fn build(text: &str, ignored: &CensorSet) -> Self {
        let positions = text
            .chars()
            .enumerate()
            .filter(|(_, c)| !ignored.contains(*c))
            .collect();
        Self { positions }
    }

    /// Build a dense scheme: every position of `text` is present.
    pub fn dense(text: &str) -> Self {
        Self {
            positions: text.chars().enumerate().collect(),
        }
    }

    /// Character at `position`, if the position is known.
    pub fn get(&self, position: usize) -> Option<char> {
        self.positions.get(&position).copied()
    }

    /// Number of known positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate `(position, char)` pairs in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.positions.iter().map(|(p, c)| (*p, *c))
    }

    /// Check that every known position of `self` holds the same character in `other`.
    ///
    /// Stops at the first disagreement. A position missing from `other` counts
    /// as a disagreement.
    pub fn agrees_with(&self, other: &Scheme) -> bool {
        self.iter().all(|(pos, c)| other.get(pos) == Some(c))
    }
}
