//! Navigation engine.
//!
//! A move first tries the neighbouring cell. When that cell is blocked or
//! off-grid, it jumps to the next (or previous) clue of the same direction,
//! in ascending clue-number order. Forward jumps land on the first cell of
//! the next word; backward jumps land on the last cell of the previous word.
//! There is no wraparound: at either end of a sequence the move fails.

use miniword_core::{ClueIndex, ClueNumber, Direction, Position, Puzzle};

/// A single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Movement {
    /// One cell right, or on to the next across word.
    Forward,
    /// One cell left, or back to the end of the previous across word.
    Backward,
    /// One cell down, or on to the next down word.
    Down,
    /// One cell up, or back to the end of the previous down word.
    Up,
}

impl Movement {
    /// Returns the orientation this movement travels along.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Forward | Self::Backward => Direction::Across,
            Self::Down | Self::Up => Direction::Down,
        }
    }

    /// Returns whether this movement travels against reading order.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::Backward | Self::Up)
    }

    /// Returns the movement that advances along `direction`.
    #[must_use]
    pub const fn advance(direction: Direction) -> Self {
        match direction {
            Direction::Across => Self::Forward,
            Direction::Down => Self::Down,
        }
    }

    /// Returns the movement that retreats along `direction`.
    #[must_use]
    pub const fn retreat(direction: Direction) -> Self {
        match direction {
            Direction::Across => Self::Backward,
            Direction::Down => Self::Up,
        }
    }
}

/// Computes focus targets for a puzzle.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    puzzle: &'a Puzzle,
    index: &'a ClueIndex,
}

impl<'a> Navigator<'a> {
    /// Creates a navigator over a puzzle and its index.
    #[must_use]
    pub const fn new(puzzle: &'a Puzzle, index: &'a ClueIndex) -> Self {
        Self { puzzle, index }
    }

    /// Computes where `movement` from `from` lands.
    ///
    /// `active` is the currently active clue number; it is looked up in the
    /// movement's direction sequence when the neighbouring cell is not open.
    /// Returns `None` when focus must stay put.
    #[must_use]
    pub fn step(
        &self,
        from: Position,
        movement: Movement,
        active: Option<ClueNumber>,
    ) -> Option<Position> {
        let direction = movement.direction();
        let neighbour = if movement.is_reverse() {
            from.backward(direction)
        } else {
            from.forward(direction)
        };
        if let Some(next) = neighbour
            && self.puzzle.is_open(next)
        {
            return Some(next);
        }

        let number = active?;
        let target = if movement.is_reverse() {
            self.index.previous(number, direction)?
        } else {
            self.index.next(number, direction)?
        };
        let start = self.index.start(target, direction)?;
        let landing = if movement.is_reverse() {
            self.puzzle.word_end(start, direction)
        } else {
            start
        };
        log::debug!("{movement:?} from {from} crosses into {target} {direction} at {landing}");
        Some(landing)
    }

    /// Moves right within the row, or to the start of the next across word.
    #[must_use]
    pub fn move_forward(&self, from: Position, active: Option<ClueNumber>) -> Option<Position> {
        self.step(from, Movement::Forward, active)
    }

    /// Moves left within the row, or to the end of the previous across word.
    #[must_use]
    pub fn move_backward(&self, from: Position, active: Option<ClueNumber>) -> Option<Position> {
        self.step(from, Movement::Backward, active)
    }

    /// Moves down within the column, or to the start of the next down word.
    #[must_use]
    pub fn move_down(&self, from: Position, active: Option<ClueNumber>) -> Option<Position> {
        self.step(from, Movement::Down, active)
    }

    /// Moves up within the column, or to the end of the previous down word.
    #[must_use]
    pub fn move_up(&self, from: Position, active: Option<ClueNumber>) -> Option<Position> {
        self.step(from, Movement::Up, active)
    }
}
