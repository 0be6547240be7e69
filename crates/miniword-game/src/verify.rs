//! Answer verification and completion checks.
//!
//! Both checks depend only on the puzzle and the player's letters, never on
//! focus or selection.

use miniword_core::{Position, Puzzle, containers::Array25};

use crate::Entries;

/// Result of checking a single open cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellVerdict {
    /// The letter matches the answer, ignoring case.
    Correct,
    /// The letter differs from the answer, or the cell is empty.
    Incorrect,
}

/// Per-cell verdicts for every open cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    verdicts: Array25<Option<CellVerdict>>,
}

impl Verification {
    /// Returns the verdict for a cell; `None` for blocked cells.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<CellVerdict> {
        self.verdicts[pos]
    }

    /// Returns `(position, verdict)` pairs for open cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellVerdict)> + '_ {
        self.verdicts
            .iter()
            .filter_map(|(pos, verdict)| verdict.map(|v| (pos, v)))
    }

    /// Returns the positions marked incorrect.
    pub fn incorrect(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(|(_, verdict)| verdict.is_incorrect())
            .map(|(pos, _)| pos)
    }

    /// Returns whether every open cell is correct.
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.iter().all(|(_, verdict)| verdict.is_correct())
    }
}

/// Marks every open cell correct or incorrect.
///
/// Letters are compared after uppercasing, so a lowercase entry of the right
/// letter counts as correct.
#[must_use]
pub fn verify(puzzle: &Puzzle, entries: &Entries) -> Verification {
    let verdicts = Array25::from_fn(|pos| {
        let answer = puzzle.answer(pos)?;
        let matches = entries
            .get(pos)
            .is_some_and(|letter| letter.to_uppercase().eq(answer.to_uppercase()));
        Some(if matches {
            CellVerdict::Correct
        } else {
            CellVerdict::Incorrect
        })
    });
    Verification { verdicts }
}

/// Returns whether every open cell holds a letter.
#[must_use]
pub fn is_complete(puzzle: &Puzzle, entries: &Entries) -> bool {
    puzzle
        .open_positions()
        .all(|pos| entries.get(pos).is_some())
}

/// Outcome of the automatic check run after every edit.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum CompletionStatus {
    /// Some open cell is still empty.
    Incomplete,
    /// Every open cell holds exactly its answer letter.
    Solved,
    /// Every open cell is filled but some letters differ from the answers.
    Unsolved {
        /// Cells whose letter differs, in row-major order.
        mismatches: Vec<Position>,
    },
}

impl CompletionStatus {
    /// Returns whether every open cell is filled, solved or not.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.is_incomplete()
    }
}

/// Runs the completion check: exact comparison once the grid is full.
#[must_use]
pub fn check_completion(puzzle: &Puzzle, entries: &Entries) -> CompletionStatus {
    if !is_complete(puzzle, entries) {
        return CompletionStatus::Incomplete;
    }
    let mismatches: Vec<_> = puzzle
        .open_positions()
        .filter(|&pos| entries.get(pos) != puzzle.answer(pos))
        .collect();
    if mismatches.is_empty() {
        CompletionStatus::Solved
    } else {
        CompletionStatus::Unsolved { mismatches }
    }
}

#[cfg(test)]
mod tests {
    use miniword_core::catalog;

    use super::*;

    fn mini() -> Puzzle {
        Puzzle::new(catalog::builtin().remove(0)).unwrap()
    }

    fn solved_entries(puzzle: &Puzzle) -> Entries {
        let mut entries = Entries::new();
        for pos in puzzle.open_positions() {
            entries.set(pos, puzzle.answer(pos));
        }
        entries
    }

    #[test]
    fn test_empty_grid_is_all_incorrect() {
        let puzzle = mini();
        let verification = verify(&puzzle, &Entries::new());
        assert_eq!(verification.iter().count(), puzzle.open_positions().count());
        assert_eq!(
            verification.incorrect().count(),
            puzzle.open_positions().count()
        );
        assert_eq!(verification.get(Position::new(0, 0)), None);
        assert_eq!(
            check_completion(&puzzle, &Entries::new()),
            CompletionStatus::Incomplete
        );
    }

    #[test]
    fn test_verify_ignores_case() {
        let puzzle = mini();
        let mut entries = solved_entries(&puzzle);
        entries.set(Position::new(2, 0), Some('m'));
        let verification = verify(&puzzle, &entries);
        assert!(verification.is_all_correct());
        // The completion check is exact.
        assert_eq!(
            check_completion(&puzzle, &entries),
            CompletionStatus::Unsolved {
                mismatches: vec![Position::new(2, 0)]
            }
        );
    }

    #[test]
    fn test_one_wrong_letter() {
        let puzzle = mini();
        let mut entries = solved_entries(&puzzle);
        assert!(check_completion(&puzzle, &entries).is_solved());

        entries.set(Position::new(2, 1), Some('X'));
        let status = check_completion(&puzzle, &entries);
        assert!(status.is_complete());
        assert!(!status.is_solved());

        let verification = verify(&puzzle, &entries);
        assert_eq!(
            verification.incorrect().collect::<Vec<_>>(),
            [Position::new(2, 1)]
        );
        for (pos, verdict) in verification.iter() {
            if pos != Position::new(2, 1) {
                assert!(verdict.is_correct(), "{pos}");
            }
        }
    }
}
