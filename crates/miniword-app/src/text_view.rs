//! Plain-text rendering of the board for the terminal player.
//!
//! Each cell is three characters wide:
//!
//! - `###` blocked
//! - `[A]` focused
//! - `(A)` part of the active word
//! - ` A ` anything else; `.` stands for an empty cell
//!
//! After a verification, wrong or empty cells end in `!` instead.

use std::fmt::{self, Display};

use miniword_core::{ClueId, Direction, GRID_SIZE, Position};
use miniword_game::{CompletionStatus, Crossword, Verification};

#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    game: &'a Crossword,
    verification: Option<&'a Verification>,
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn new(game: &'a Crossword) -> Self {
        Self {
            game,
            verification: None,
        }
    }

    #[must_use]
    pub fn with_verification(self, verification: &'a Verification) -> Self {
        Self {
            verification: Some(verification),
            ..self
        }
    }

    fn fmt_cell(
        &self,
        f: &mut fmt::Formatter<'_>,
        pos: Position,
        highlighted: &[Position],
    ) -> fmt::Result {
        let session = self.game.session();
        if !session.puzzle().is_open(pos) {
            return f.write_str("###");
        }
        let (left, mut right) = if session.focus() == Some(pos) {
            ('[', ']')
        } else if highlighted.contains(&pos) {
            ('(', ')')
        } else {
            (' ', ' ')
        };
        if self
            .verification
            .and_then(|v| v.get(pos))
            .is_some_and(|verdict| verdict.is_incorrect())
        {
            right = '!';
        }
        let letter = session.entries().get(pos).unwrap_or('.');
        write!(f, "{left}{letter}{right}")
    }

    fn fmt_clues(&self, f: &mut fmt::Formatter<'_>, direction: Direction) -> fmt::Result {
        let session = self.game.session();
        let active = session.selection().active();
        writeln!(f, "{}", direction.label())?;
        for clue in session.puzzle().clues(direction) {
            let id = ClueId::new(clue.number, direction);
            let marker = if active == Some(id) { '>' } else { ' ' };
            writeln!(f, "{marker} {:>2}  {}", clue.number, clue.text)?;
            if session.is_hint_revealed(id) {
                writeln!(f, "      hint: {}", clue.hint)?;
            }
        }
        Ok(())
    }
}

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.game.session();
        let puzzle = session.puzzle();
        writeln!(
            f,
            "{} ({}/{})",
            puzzle.title(),
            self.game.active_index() + 1,
            self.game.catalog().len()
        )?;
        writeln!(f)?;

        write!(f, "  ")?;
        for col in 0..GRID_SIZE {
            write!(f, "  {col} ")?;
        }
        writeln!(f)?;
        let highlighted = session.highlighted_cells();
        for row in 0..GRID_SIZE {
            write!(f, "{row} ")?;
            for col in 0..GRID_SIZE {
                f.write_str(" ")?;
                self.fmt_cell(f, Position::new(row, col), &highlighted)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        if let Some(clue) = session.active_clue() {
            writeln!(f, "{} {}: {}", clue.id.number, clue.label(), clue.text)?;
            writeln!(f)?;
        }
        self.fmt_clues(f, Direction::Across)?;
        self.fmt_clues(f, Direction::Down)?;
        writeln!(f)?;

        let open = puzzle.open_positions().count();
        let filled = session.entries().filled_count();
        match session.completion() {
            CompletionStatus::Incomplete => write!(f, "filled {filled}/{open}"),
            CompletionStatus::Solved => write!(f, "solved!"),
            CompletionStatus::Unsolved { mismatches } => {
                write!(f, "all cells filled, {} wrong", mismatches.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(view: BoardView<'_>) -> Vec<String> {
        view.to_string().lines().map(str::to_owned).collect()
    }

    #[test]
    fn test_fresh_board() {
        let game = Crossword::builtin().unwrap();
        let lines = lines(BoardView::new(&game));
        assert_eq!(lines[0], "Mini 1: Mares (1/2)");
        assert_eq!(lines[3], "0  ### ### ### ### ###");
        assert_eq!(lines[4], "1  ###  .   .   .  ###");
        assert_eq!(lines.last().map(String::as_str), Some("filled 0/11"));
        assert!(lines.iter().any(|line| line == "Horizontal"));
        assert!(lines.iter().any(|line| line == "Vertical"));
    }

    #[test]
    fn test_focus_highlight_and_hint() {
        let mut game = Crossword::builtin().unwrap();
        game.on_cell_clicked(Position::new(2, 2));
        game.on_cell_edited(Position::new(2, 2), "r").unwrap();
        game.request_hint();
        let lines = lines(BoardView::new(&game));
        assert_eq!(lines[5], "2  (.) (.) (R) [.] (.)");
        assert!(lines.iter().any(|line| line == "4 Horizontal: Océano de agua salada"));
        assert!(lines.iter().any(|line| line == ">  4  Océano de agua salada"));
        assert!(lines.iter().any(|line| line == "      hint: Cubre 71% del planeta"));
    }

    #[test]
    fn test_verification_marks() {
        let mut game = Crossword::builtin().unwrap();
        game.on_cell_edited(Position::new(1, 1), "S").unwrap();
        game.on_cell_edited(Position::new(1, 2), "X").unwrap();
        let verification = game.verify_now();
        let lines = lines(BoardView::new(&game).with_verification(&verification));
        assert_eq!(lines[4], "1  ### (S) (X! [.! ###");
    }
}
