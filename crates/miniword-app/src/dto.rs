//! Serializable views of game state for the browser page.
//!
//! Field names are camelCase so the page script can read them directly.

use miniword_core::{Direction, GRID_SIZE, Position};
use miniword_game::{
    ActiveClue, ClickOutcome, CompletionStatus, Crossword, EditOutcome, Hint,
    KeyOutcome, Session, Verification,
};
use serde::Serialize;

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionDto {
    pub row: u8,
    pub col: u8,
}

impl From<Position> for PositionDto {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row(),
            col: pos.col(),
        }
    }
}

fn positions<I>(iter: I) -> Vec<PositionDto>
where
    I: IntoIterator<Item = Position>,
{
    iter.into_iter().map(PositionDto::from).collect()
}

/// The active clue as shown above the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveClueDto {
    pub number: u8,
    pub direction: Direction,
    pub label: &'static str,
    pub text: String,
}

impl From<ActiveClue> for ActiveClueDto {
    fn from(clue: ActiveClue) -> Self {
        Self {
            number: clue.id.number.get(),
            direction: clue.id.direction,
            label: clue.label(),
            text: clue.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueEntryDto {
    pub number: u8,
    pub text: String,
    pub start: Option<PositionDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDto {
    pub open: bool,
    pub number: Option<u8>,
    pub letter: Option<char>,
}

/// Everything needed to draw a freshly loaded puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDto {
    pub index: usize,
    pub puzzle_count: usize,
    pub title: String,
    /// Rows of cells, top to bottom.
    pub cells: Vec<Vec<CellDto>>,
    pub across: Vec<ClueEntryDto>,
    pub down: Vec<ClueEntryDto>,
}

impl PuzzleDto {
    #[must_use]
    pub fn from_game(game: &Crossword) -> Self {
        let session = game.session();
        let puzzle = session.puzzle();
        let cells: Vec<Vec<CellDto>> = Position::ALL
            .chunks(usize::from(GRID_SIZE))
            .map(|row| {
                row.iter()
                    .map(|&pos| CellDto {
                        open: puzzle.is_open(pos),
                        number: puzzle.number(pos).map(|n| n.get()),
                        letter: session.entries().get(pos),
                    })
                    .collect()
            })
            .collect();
        let clues = |direction: Direction| -> Vec<ClueEntryDto> {
            puzzle
                .clues(direction)
                .iter()
                .map(|clue| ClueEntryDto {
                    number: clue.number.get(),
                    text: clue.text.clone(),
                    start: session
                        .index()
                        .start(clue.number, direction)
                        .map(PositionDto::from),
                })
                .collect()
        };
        Self {
            index: game.active_index(),
            puzzle_count: game.catalog().len(),
            title: puzzle.title().to_owned(),
            cells,
            across: clues(Direction::Across),
            down: clues(Direction::Down),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDto {
    pub next_focus: Option<PositionDto>,
    pub is_complete: bool,
    pub is_solved: bool,
    /// Cells to mark wrong once the grid is full.
    pub mismatches: Vec<PositionDto>,
    #[serde(flatten)]
    pub selection: SelectionDto,
}

impl EditDto {
    #[must_use]
    pub fn new(outcome: EditOutcome, session: &Session) -> Self {
        let is_complete = outcome.is_complete();
        let (is_solved, mismatches) = match outcome.completion {
            CompletionStatus::Incomplete => (false, Vec::new()),
            CompletionStatus::Solved => (true, Vec::new()),
            CompletionStatus::Unsolved { mismatches } => (false, positions(mismatches)),
        };
        Self {
            next_focus: outcome.next_focus.map(PositionDto::from),
            is_complete,
            is_solved,
            mismatches,
            selection: SelectionDto::from_session(session),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDto {
    pub active_clue: Option<ActiveClueDto>,
    pub highlighted: Vec<PositionDto>,
}

impl SelectionDto {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            active_clue: session.active_clue().map(ActiveClueDto::from),
            highlighted: positions(session.highlighted_cells()),
        }
    }
}

impl From<ClickOutcome> for SelectionDto {
    fn from(outcome: ClickOutcome) -> Self {
        Self {
            active_clue: outcome.active_clue.map(ActiveClueDto::from),
            highlighted: positions(outcome.highlighted),
        }
    }
}

/// Result of a navigation key, plus the selection it left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDto {
    pub next_focus: Option<PositionDto>,
    pub cleared: Option<PositionDto>,
    #[serde(flatten)]
    pub selection: SelectionDto,
}

impl KeyDto {
    #[must_use]
    pub fn new(outcome: KeyOutcome, session: &Session) -> Self {
        Self {
            next_focus: outcome.next_focus.map(PositionDto::from),
            cleared: outcome.cleared.map(PositionDto::from),
            selection: SelectionDto::from_session(session),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintDto {
    pub number: u8,
    pub direction: Direction,
    pub text: String,
}

impl From<Hint> for HintDto {
    fn from(hint: Hint) -> Self {
        Self {
            number: hint.clue.number.get(),
            direction: hint.clue.direction,
            text: hint.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictDto {
    pub row: u8,
    pub col: u8,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDto {
    pub cells: Vec<VerdictDto>,
    pub all_correct: bool,
}

impl From<&Verification> for VerificationDto {
    fn from(verification: &Verification) -> Self {
        let cells = verification
            .iter()
            .map(|(pos, verdict)| VerdictDto {
                row: pos.row(),
                col: pos.col(),
                correct: verdict.is_correct(),
            })
            .collect();
        Self {
            cells,
            all_correct: verification.is_all_correct(),
        }
    }
}

#[cfg(test)]
mod tests {
    use miniword_game::NavigationKey;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_puzzle_dto_shape() {
        let game = Crossword::builtin().unwrap();
        let dto = PuzzleDto::from_game(&game);
        assert_eq!(dto.cells.len(), 5);
        assert!(dto.cells.iter().all(|row| row.len() == 5));
        assert_eq!(dto.cells[2][0].number, Some(4));
        assert!(!dto.cells[0][0].open);
        assert_eq!(dto.across.len(), 3);
        assert_eq!(dto.down[1].start, Some(PositionDto { row: 1, col: 2 }));

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["puzzleCount"], json!(game.catalog().len()));
        assert_eq!(value["cells"][1][1], json!({"open": true, "number": 1, "letter": null}));
    }

    #[test]
    fn test_selection_dto_serializes_camel_case() {
        let mut game = Crossword::builtin().unwrap();
        let dto = SelectionDto::from(game.on_cell_clicked(Position::new(3, 1)));
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["activeClue"]["number"], json!(6));
        assert_eq!(value["activeClue"]["direction"], json!("across"));
        assert_eq!(value["activeClue"]["label"], json!("Horizontal"));
        assert_eq!(value["highlighted"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_edit_and_key_dtos() {
        let mut game = Crossword::builtin().unwrap();
        let outcome = game.on_cell_edited(Position::new(2, 0), "m").unwrap();
        let edit = EditDto::new(outcome, game.session());
        assert_eq!(edit.next_focus, Some(PositionDto { row: 2, col: 1 }));
        assert!(!edit.is_complete);
        let value = serde_json::to_value(&edit).unwrap();
        assert_eq!(value["activeClue"]["number"], json!(4));
        assert_eq!(value["nextFocus"], json!({"row": 2, "col": 1}));

        let outcome = game.on_directional_key(Position::new(2, 1), NavigationKey::Left);
        let key = KeyDto::new(outcome, game.session());
        assert_eq!(key.next_focus, Some(PositionDto { row: 2, col: 0 }));
        assert_eq!(key.cleared, None);
        assert_eq!(key.selection.highlighted.len(), 5);

        let puzzle = serde_json::to_value(PuzzleDto::from_game(&game)).unwrap();
        assert_eq!(puzzle["cells"][2][0]["letter"], json!("M"));
    }

    #[test]
    fn test_verification_dto() {
        let mut game = Crossword::builtin().unwrap();
        game.on_cell_edited(Position::new(1, 1), "S").unwrap();
        let dto = VerificationDto::from(&game.verify_now());
        assert!(!dto.all_correct);
        assert_eq!(dto.cells.len(), 11);
        assert!(dto.cells[0].correct);
        assert!(dto.cells[1..].iter().all(|cell| !cell.correct));
    }
}
