//! Core data structures for 5×5 mini crosswords.
//!
//! This crate holds everything that depends only on the static puzzle
//! definition, not on a player's progress.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`position`]: grid coordinates and neighbour stepping
//!    - [`direction`]: across/down orientation
//!    - [`cell`]: open and blocked cells
//!    - [`clue`]: clue numbers, clue identities, and clue text
//!    - [`containers`]: [`Array25`], per-cell storage indexed by [`Position`]
//!
//! 2. **Puzzle model**
//!    - [`puzzle`]: raw [`PuzzleData`] and its validated form [`Puzzle`];
//!      malformed data is rejected with a [`PuzzleError`]
//!    - [`catalog`]: the built-in puzzle definitions
//!
//! 3. **Derived lookups**
//!    - [`word`]: the word locator, mapping a cell to the words it belongs to
//!    - [`index`]: [`ClueIndex`], start cells and per-direction clue order
//!
//! [`Array25`]: containers::Array25
//!
//! # Examples
//!
//! ```
//! use miniword_core::{ClueIndex, Direction, Position, Puzzle, catalog};
//!
//! let puzzle = Puzzle::new(catalog::builtin().remove(0))?;
//! let index = ClueIndex::build(&puzzle);
//!
//! // (2, 2) is the cross of 4 across and 2 down.
//! let words = puzzle.words_at(Position::new(2, 2));
//! let down = words.down.unwrap();
//! assert_eq!(index.start(down, Direction::Down), Some(Position::new(1, 2)));
//! # Ok::<(), miniword_core::PuzzleError>(())
//! ```

pub mod catalog;
pub mod cell;
pub mod clue;
pub mod containers;
pub mod direction;
mod error;
pub mod index;
pub mod position;
pub mod puzzle;
pub mod word;

pub use self::{
    cell::CellKind,
    clue::{Clue, ClueId, ClueNumber},
    direction::Direction,
    error::PuzzleError,
    index::{ClueIndex, WordStarts},
    position::{CELL_COUNT, GRID_SIZE, Position},
    puzzle::{BLOCKED_ANSWER, ClueData, Puzzle, PuzzleData},
    word::WordMembership,
};
