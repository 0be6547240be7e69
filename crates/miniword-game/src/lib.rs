//! Game session management for mini crosswords.
//!
//! # Overview
//!
//! This crate tracks a player's progress through a puzzle from
//! [`miniword_core`]:
//!
//! - [`Session`]: letters, focus, the active clue, and revealed hints for one
//!   puzzle. Its handlers take raw input events (edits, clicks, navigation
//!   keys) and return structured outcomes for a renderer to draw.
//! - [`Crossword`]: a [`Catalog`] of puzzles plus the active [`Session`];
//!   loading a puzzle replaces the session wholesale.
//! - [`Navigator`]: where focus goes when it leaves a word.
//! - [`SelectionState`]: which clue is active and how clicks toggle it.
//! - [`verify`] and [`check_completion`]: answer checking.
//!
//! # Examples
//!
//! ```
//! use miniword_core::Position;
//! use miniword_game::{CompletionStatus, Crossword};
//!
//! let mut game = Crossword::builtin()?;
//! let mut focus = Some(Position::new(1, 1));
//! for letter in ["s", "o", "l", "m"] {
//!     let pos = focus.unwrap();
//!     focus = game.on_cell_edited(pos, letter)?.next_focus;
//! }
//! assert_eq!(focus, Some(Position::new(2, 1)));
//! assert_eq!(game.session().completion(), CompletionStatus::Incomplete);
//! # Ok::<(), miniword_game::GameError>(())
//! ```

mod catalog;
mod crossword;
mod entries;
mod error;
mod navigation;
mod selection;
mod session;
mod verify;

pub use self::{
    catalog::Catalog,
    crossword::Crossword,
    entries::{Entries, normalize_input},
    error::GameError,
    navigation::{Movement, Navigator},
    selection::{Arrival, Selection, SelectionState},
    session::{ActiveClue, ClickOutcome, EditOutcome, Hint, KeyOutcome, NavigationKey, Session},
    verify::{
        CellVerdict, CompletionStatus, Verification, check_completion, is_complete, verify,
    },
};
