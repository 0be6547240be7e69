//! Selection and orientation state machine.
//!
//! The session is either [`Selection::Unselected`] (right after a puzzle
//! load) or has one active clue. Arriving at a cell changes the active clue:
//!
//! - **Navigation arrival** (typing, arrow keys): if the cell has a word in the
//!   currently active direction, that direction is kept and only the clue
//!   number is re-resolved. Otherwise the arrival is treated like a click.
//! - **Click arrival**: a cell in one word activates that word. A cross cell
//!   activates its across word, unless it is the same cell as the previous
//!   arrival with the same across word, in which case the orientation toggles.
//!   A cell in no word leaves the selection unchanged.
//!
//! Every arrival is remembered for the next toggle check. There is no way back
//! to `Unselected` short of starting a new session.

use miniword_core::{ClueId, Direction, Position, Puzzle, WordMembership};

/// The active clue, if any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection {
    /// No cell has been focused yet.
    #[default]
    Unselected,
    /// A clue is active.
    Active(ClueId),
}

impl Selection {
    /// Returns the active clue.
    #[must_use]
    pub const fn active(self) -> Option<ClueId> {
        match self {
            Self::Unselected => None,
            Self::Active(id) => Some(id),
        }
    }

    /// Returns the active orientation.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Unselected => None,
            Self::Active(id) => Some(id.direction),
        }
    }
}

/// How focus reached a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Arrival {
    /// Moved there by typing or a navigation key.
    Navigation,
    /// The player clicked the cell.
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Visit {
    pos: Position,
    words: WordMembership,
}

/// Selection plus the memory needed to detect repeated clicks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selection: Selection,
    last_visit: Option<Visit>,
}

impl SelectionState {
    /// Creates an unselected state with no arrival history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Applies an arrival at `pos` and returns the resulting selection.
    pub fn arrive(&mut self, puzzle: &Puzzle, pos: Position, arrival: Arrival) -> Selection {
        let words = puzzle.words_at(pos);
        let previous = self.last_visit.replace(Visit { pos, words });

        if arrival.is_navigation()
            && let Some(direction) = self.selection.direction()
            && let Some(number) = words.get(direction)
        {
            self.selection = Selection::Active(ClueId::new(number, direction));
            return self.selection;
        }

        let id = match (words.across, words.down) {
            (Some(across), Some(down)) => {
                let repeated =
                    previous.is_some_and(|visit| visit.pos == pos && visit.words.across == Some(across));
                let direction = if repeated {
                    self.selection
                        .direction()
                        .map_or(Direction::Across, Direction::toggled)
                } else {
                    Direction::Across
                };
                match direction {
                    Direction::Across => ClueId::new(across, Direction::Across),
                    Direction::Down => ClueId::new(down, Direction::Down),
                }
            }
            (Some(across), None) => ClueId::new(across, Direction::Across),
            (None, Some(down)) => ClueId::new(down, Direction::Down),
            (None, None) => {
                log::debug!("{pos} belongs to no word; selection unchanged");
                return self.selection;
            }
        };
        self.selection = Selection::Active(id);
        self.selection
    }
}
