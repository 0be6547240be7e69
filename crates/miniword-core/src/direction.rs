//! Word orientation.

use serde::{Deserialize, Serialize};

/// The orientation of a word: left-to-right or top-to-bottom.
///
/// Across is the default orientation.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right along a row.
    #[default]
    #[display("across")]
    Across,
    /// Top to bottom along a column.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    ///
    /// ```
    /// use miniword_core::Direction;
    ///
    /// assert_eq!(Direction::Across.toggled(), Direction::Down);
    /// assert_eq!(Direction::Down.toggled(), Direction::Across);
    /// ```
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Heading shown above the active clue.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Across => "Horizontal",
            Self::Down => "Vertical",
        }
    }
}
