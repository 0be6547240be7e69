//! End-to-end play through the public `Crossword` API.

use miniword_core::{ClueId, ClueNumber, Direction, Position};
use miniword_game::{CellVerdict, CompletionStatus, Crossword, NavigationKey};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn clue(number: u8, direction: Direction) -> ClueId {
    ClueId::new(ClueNumber::new(number).unwrap(), direction)
}

/// Fills every open cell with its answer, replacing the letter at `typo`.
fn fill(game: &mut Crossword, typo: Option<(Position, &str)>) -> CompletionStatus {
    let cells: Vec<_> = game.session().puzzle().open_positions().collect();
    let mut status = CompletionStatus::Incomplete;
    for cell in cells {
        let letter = match typo {
            Some((at, letter)) if at == cell => letter.to_owned(),
            _ => game
                .session()
                .puzzle()
                .answer(cell)
                .unwrap()
                .to_string(),
        };
        status = game.on_cell_edited(cell, &letter).unwrap().completion;
    }
    status
}

#[test]
fn typing_a_word_moves_on_to_the_next_clue() {
    let mut game = Crossword::builtin().unwrap();
    let mut focus = pos(1, 1);
    for letter in ["S", "O", "L"] {
        let outcome = game.on_cell_edited(focus, letter).unwrap();
        assert!(!outcome.is_complete());
        focus = outcome.next_focus.unwrap();
    }
    assert_eq!(focus, pos(2, 0));

    let outcome = game.on_cell_edited(pos(2, 0), "M").unwrap();
    assert_eq!(outcome.next_focus, Some(pos(2, 1)));
    assert_eq!(
        game.session().active_clue().map(|c| c.id),
        Some(clue(4, Direction::Across))
    );
}

#[test]
fn exact_answers_solve_the_puzzle() {
    let mut game = Crossword::builtin().unwrap();
    assert_eq!(fill(&mut game, None), CompletionStatus::Solved);
    assert!(game.verify_now().is_all_correct());
}

#[test]
fn one_wrong_letter_is_complete_but_unsolved() {
    let mut game = Crossword::builtin().unwrap();
    let status = fill(&mut game, Some((pos(2, 1), "X")));
    assert_eq!(
        status,
        CompletionStatus::Unsolved {
            mismatches: vec![pos(2, 1)]
        }
    );

    let verification = game.verify_now();
    for cell in game.session().puzzle().open_positions() {
        let expected = if cell == pos(2, 1) {
            CellVerdict::Incorrect
        } else {
            CellVerdict::Correct
        };
        assert_eq!(verification.get(cell), Some(expected), "{cell}");
    }
}

#[test]
fn verify_is_available_before_completion() {
    let mut game = Crossword::builtin().unwrap();
    game.on_cell_edited(pos(2, 2), "r").unwrap();
    let verification = game.verify_now();
    assert_eq!(verification.get(pos(2, 2)), Some(CellVerdict::Correct));
    assert_eq!(verification.get(pos(2, 3)), Some(CellVerdict::Incorrect));
    assert_eq!(verification.get(pos(0, 0)), None);
}

#[test]
fn double_click_on_cross_cell_toggles_orientation() {
    let mut game = Crossword::builtin().unwrap();
    let first = game.on_cell_clicked(pos(2, 2));
    let active = first.active_clue.unwrap();
    assert_eq!(active.id, clue(4, Direction::Across));
    assert_eq!(active.label(), "Horizontal");
    assert_eq!(first.highlighted.len(), 5);

    let second = game.on_cell_clicked(pos(2, 2));
    let active = second.active_clue.unwrap();
    assert_eq!(active.id, clue(2, Direction::Down));
    assert_eq!(active.label(), "Vertical");
    assert_eq!(second.highlighted, [pos(1, 2), pos(2, 2), pos(3, 2)]);
}

#[test]
fn backward_from_first_across_cell_stays_put() {
    let mut game = Crossword::builtin().unwrap();
    game.on_cell_clicked(pos(1, 1));
    assert_eq!(
        game.session().active_clue().map(|c| c.id),
        Some(clue(1, Direction::Across))
    );
    let outcome = game.on_directional_key(pos(1, 1), NavigationKey::Left);
    assert_eq!(outcome.next_focus, None);
    assert_eq!(game.session().focus(), Some(pos(1, 1)));
}

#[test]
fn hint_is_revealed_once() {
    let mut game = Crossword::builtin().unwrap();
    assert_eq!(game.request_hint(), None);

    game.on_cell_clicked(pos(2, 0));
    let hint = game.request_hint().unwrap();
    assert_eq!(hint.clue, clue(4, Direction::Across));
    assert_eq!(game.request_hint(), None);
}

#[test]
fn loading_a_puzzle_resets_the_session() {
    let mut game = Crossword::builtin().unwrap();
    game.on_cell_clicked(pos(2, 0));
    game.on_cell_edited(pos(2, 0), "M").unwrap();
    game.request_hint();

    let entries = game.load_puzzle(0).unwrap();
    assert_eq!(entries.filled_count(), 0);
    let session = game.session();
    assert!(session.selection().is_unselected());
    assert_eq!(session.focus(), None);
    assert_eq!(session.revealed_hints().count(), 0);

    game.on_cell_clicked(pos(2, 0));
    assert!(game.request_hint().is_some());
}

#[test]
fn second_puzzle_plays_both_words() {
    let mut game = Crossword::builtin().unwrap();
    game.next_puzzle().unwrap();
    assert_eq!(game.session().puzzle().title(), "Mini 2: Gatos");

    // Typing down the single column ends at the bottom edge.
    game.on_cell_clicked(pos(0, 2));
    let mut focus = pos(0, 2);
    for letter in ["P", "A", "T", "O"] {
        focus = game.on_cell_edited(focus, letter).unwrap().next_focus.unwrap();
    }
    assert_eq!(focus, pos(4, 2));
    let outcome = game.on_cell_edited(focus, "S").unwrap();
    assert_eq!(outcome.next_focus, None);

    // The across word shares the centre cell.
    game.on_cell_clicked(pos(2, 0));
    for (col, letter) in [(0, "G"), (1, "A"), (3, "O")] {
        game.on_cell_edited(pos(2, col), letter).unwrap();
    }
    let outcome = game.on_cell_edited(pos(2, 4), "S").unwrap();
    assert_eq!(outcome.completion, CompletionStatus::Solved);
}
