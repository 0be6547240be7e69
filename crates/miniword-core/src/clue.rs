//! Clue numbers and clue text.

use std::{
    fmt::{self, Display},
    num::NonZero,
};

use crate::Direction;

/// A positive clue label printed in a word-start cell.
///
/// Across and down words starting at the same cell share the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClueNumber(NonZero<u8>);

impl ClueNumber {
    /// Creates a clue number; `0` means "no label" and yields `None`.
    ///
    /// ```
    /// use miniword_core::ClueNumber;
    ///
    /// assert_eq!(ClueNumber::new(4).map(ClueNumber::get), Some(4));
    /// assert_eq!(ClueNumber::new(0), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match NonZero::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl Display for ClueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Identity of a single clue: its number together with its direction.
///
/// Hints are tracked per `ClueId`, so "1 across" and "1 down" are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{number} {direction}")]
pub struct ClueId {
    /// The printed clue number.
    pub number: ClueNumber,
    /// The word's direction.
    pub direction: Direction,
}

impl ClueId {
    /// Creates a clue identity.
    #[must_use]
    pub const fn new(number: ClueNumber, direction: Direction) -> Self {
        Self { number, direction }
    }
}

/// A clue entry of a validated puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    /// The clue number.
    pub number: ClueNumber,
    /// The clue shown when the word is active.
    pub text: String,
    /// The extra hint revealed on request.
    pub hint: String,
}
