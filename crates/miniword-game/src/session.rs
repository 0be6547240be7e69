use std::collections::BTreeSet;

use miniword_core::{ClueId, ClueIndex, Position, Puzzle};

use crate::{
    Arrival, CompletionStatus, Entries, GameError, Movement, Navigator, Selection, SelectionState,
    Verification, check_completion, normalize_input, verify,
};

/// The clue currently guiding navigation, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveClue {
    /// Number and direction of the clue.
    pub id: ClueId,
    /// The clue text.
    pub text: String,
}

impl ActiveClue {
    /// Returns the label shown next to the clue (`Horizontal` or `Vertical`).
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.id.direction.label()
    }
}

/// A revealed hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// The clue the hint belongs to.
    pub clue: ClueId,
    /// The hint text.
    pub text: String,
}

/// Keys that move focus or erase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum NavigationKey {
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Erase the focused letter, or step back from an empty cell.
    Backspace,
}

/// Result of [`Session::on_cell_edited`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Where focus moved after the edit; `None` if it stays on the edited cell.
    pub next_focus: Option<Position>,
    /// Completion check run after the edit.
    pub completion: CompletionStatus,
}

impl EditOutcome {
    /// Returns whether every open cell now holds a letter.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completion.is_complete()
    }
}

/// Result of [`Session::on_cell_clicked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    /// The clue active after the click.
    pub active_clue: Option<ActiveClue>,
    /// Cells of the active word, first to last.
    pub highlighted: Vec<Position>,
}

/// Result of [`Session::on_directional_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Where focus moved; `None` if it stays put.
    pub next_focus: Option<Position>,
    /// The cell whose letter was erased by Backspace.
    pub cleared: Option<Position>,
}

/// Progress on a single puzzle.
///
/// A session owns the validated puzzle, its clue index, the player's letters,
/// the focused cell, the selection state, and the set of clues whose hints
/// have been shown. Loading another puzzle means creating a new session.
///
/// # Examples
///
/// ```
/// use miniword_core::{Position, Puzzle, catalog};
/// use miniword_game::Session;
///
/// let puzzle = Puzzle::new(catalog::builtin().remove(0))?;
/// let mut session = Session::new(puzzle);
///
/// let outcome = session.on_cell_edited(Position::new(2, 0), "m").unwrap();
/// assert_eq!(outcome.next_focus, Some(Position::new(2, 1)));
/// assert_eq!(session.entries().get(Position::new(2, 0)), Some('M'));
/// assert!(!outcome.is_complete());
/// # Ok::<(), miniword_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    puzzle: Puzzle,
    index: ClueIndex,
    entries: Entries,
    focus: Option<Position>,
    selection: SelectionState,
    revealed_hints: BTreeSet<ClueId>,
}

impl Session {
    /// Starts a fresh session: empty grid, nothing focused, nothing selected.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let index = ClueIndex::build(&puzzle);
        Self {
            puzzle,
            index,
            entries: Entries::new(),
            focus: None,
            selection: SelectionState::new(),
            revealed_hints: BTreeSet::new(),
        }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the clue index built for the puzzle.
    #[must_use]
    pub fn index(&self) -> &ClueIndex {
        &self.index
    }

    /// Returns the player's letters.
    #[must_use]
    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    /// Returns the focused cell.
    #[must_use]
    pub fn focus(&self) -> Option<Position> {
        self.focus
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection.selection()
    }

    /// Returns whether the hint for `clue` has already been shown.
    #[must_use]
    pub fn is_hint_revealed(&self, clue: ClueId) -> bool {
        self.revealed_hints.contains(&clue)
    }

    /// Returns the clues whose hints have been shown, in clue order.
    pub fn revealed_hints(&self) -> impl Iterator<Item = ClueId> + '_ {
        self.revealed_hints.iter().copied()
    }

    /// Returns the active clue with its text.
    #[must_use]
    pub fn active_clue(&self) -> Option<ActiveClue> {
        let id = self.selection().active()?;
        let clue = self.puzzle.clue(id)?;
        Some(ActiveClue {
            id,
            text: clue.text.clone(),
        })
    }

    /// Returns the cells of the active word, first to last.
    #[must_use]
    pub fn highlighted_cells(&self) -> Vec<Position> {
        let Some(id) = self.selection().active() else {
            return Vec::new();
        };
        self.index
            .start(id.number, id.direction)
            .map(|start| self.puzzle.word_cells(start, id.direction))
            .unwrap_or_default()
    }

    /// Moves focus to `pos` if it is not already there.
    fn focus_on(&mut self, pos: Position) {
        if self.focus != Some(pos) {
            self.focus = Some(pos);
            self.selection.arrive(&self.puzzle, pos, Arrival::Navigation);
        }
    }

    fn navigate(&mut self, from: Position, movement: Movement) -> Option<Position> {
        let active = self.selection().active().map(|id| id.number);
        let next = Navigator::new(&self.puzzle, &self.index).step(from, movement, active)?;
        self.focus = Some(next);
        self.selection.arrive(&self.puzzle, next, Arrival::Navigation);
        Some(next)
    }

    /// Stores the letter typed into `pos` and advances focus.
    ///
    /// The first non-blank character of `text` is uppercased and stored.
    /// Focus then advances along the active direction (across when nothing is
    /// active). Blank text clears the cell and focus stays put.
    ///
    /// An unfocused `pos` is focused first. When nothing follows it,
    /// `next_focus` is `None` but [`Session::focus`] is now `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BlockedCell`] if `pos` is blocked.
    pub fn on_cell_edited(&mut self, pos: Position, text: &str) -> Result<EditOutcome, GameError> {
        if !self.puzzle.is_open(pos) {
            log::warn!("rejected edit {text:?} at blocked cell {pos}");
            return Err(GameError::BlockedCell { pos });
        }
        self.focus_on(pos);

        let letter = normalize_input(text);
        self.entries.set(pos, letter);
        let next_focus = letter.and_then(|_| {
            let direction = self.selection().direction().unwrap_or_default();
            self.navigate(pos, Movement::advance(direction))
        });

        let completion = self.completion();
        if completion.is_solved() {
            log::info!("puzzle {:?} solved", self.puzzle.title());
        }
        Ok(EditOutcome {
            next_focus,
            completion,
        })
    }

    /// Focuses `pos` and updates the active clue.
    ///
    /// Clicking a blocked cell changes nothing.
    pub fn on_cell_clicked(&mut self, pos: Position) -> ClickOutcome {
        if self.puzzle.is_open(pos) {
            self.focus = Some(pos);
            self.selection.arrive(&self.puzzle, pos, Arrival::Click);
        }
        ClickOutcome {
            active_clue: self.active_clue(),
            highlighted: self.highlighted_cells(),
        }
    }

    /// Handles an arrow key or Backspace pressed while `pos` is focused.
    ///
    /// Backspace on a filled cell erases it without moving. On an empty cell
    /// it steps back along the active direction. Keys on blocked cells are
    /// ignored.
    ///
    /// An unfocused `pos` is focused first. A `None` in `next_focus` means no
    /// move past `pos`, which may still differ from the previous focus.
    pub fn on_directional_key(&mut self, pos: Position, key: NavigationKey) -> KeyOutcome {
        let mut outcome = KeyOutcome {
            next_focus: None,
            cleared: None,
        };
        if !self.puzzle.is_open(pos) {
            return outcome;
        }
        self.focus_on(pos);

        let movement = match key {
            NavigationKey::Left => Movement::Backward,
            NavigationKey::Right => Movement::Forward,
            NavigationKey::Up => Movement::Up,
            NavigationKey::Down => Movement::Down,
            NavigationKey::Backspace => {
                if self.entries.set(pos, None).is_some() {
                    outcome.cleared = Some(pos);
                    return outcome;
                }
                Movement::retreat(self.selection().direction().unwrap_or_default())
            }
        };
        outcome.next_focus = self.navigate(pos, movement);
        outcome
    }

    /// Reveals the hint of the active clue.
    ///
    /// Returns `None` when no clue is active, when the hint was already shown,
    /// or when the clue has no hint text.
    pub fn request_hint(&mut self) -> Option<Hint> {
        let id = self.selection().active()?;
        if self.revealed_hints.contains(&id) {
            return None;
        }
        let text = self.puzzle.clue(id)?.hint.clone();
        if text.is_empty() {
            return None;
        }
        self.revealed_hints.insert(id);
        log::debug!("revealed hint for {id}");
        Some(Hint { clue: id, text })
    }

    /// Checks every open cell against the answers.
    #[must_use]
    pub fn verify_now(&self) -> Verification {
        verify(&self.puzzle, &self.entries)
    }

    /// Runs the completion check on the current letters.
    #[must_use]
    pub fn completion(&self) -> CompletionStatus {
        check_completion(&self.puzzle, &self.entries)
    }
}
