//! Built-in puzzle definitions.

use crate::{ClueData, PuzzleData};

fn rows<const N: usize>(rows: [[u8; 5]; N]) -> Vec<Vec<u8>> {
    rows.into_iter().map(Vec::from).collect()
}

fn clues(entries: &[(u8, &str, &str)]) -> Vec<ClueData> {
    entries
        .iter()
        .map(|&(number, clue, hint)| ClueData {
            number,
            clue: clue.to_owned(),
            hint: hint.to_owned(),
        })
        .collect()
}

/// Returns the puzzles shipped with the game, in play order.
///
/// The definitions are unvalidated; pass each through
/// [`Puzzle::new`](crate::Puzzle::new).
#[must_use]
pub fn builtin() -> Vec<PuzzleData> {
    vec![
        PuzzleData {
            title: "Mini 1: Mares".to_owned(),
            grid: rows([
                [0, 0, 0, 0, 0],
                [0, 1, 1, 1, 0],
                [1, 1, 1, 1, 1],
                [0, 1, 1, 1, 0],
                [0, 0, 0, 0, 0],
            ]),
            numbers: rows([
                [0, 0, 0, 0, 0],
                [0, 1, 2, 3, 0],
                [4, 0, 0, 0, 0],
                [0, 6, 0, 0, 0],
                [0, 0, 0, 0, 0],
            ]),
            answers: Vec::from([".....", ".SOL.", "MARES", ".ALO.", "....."].map(str::to_owned)),
            across: clues(&[
                (1, "Estrella brillante en el cielo", "Centro del Sistema Solar"),
                (4, "Océano de agua salada", "Cubre 71% del planeta"),
                (6, "Ala de un pájaro", "Los pájaros vuelan con éstas"),
            ]),
            down: clues(&[
                (1, "Hermanos y hermanas", "Familiares consanguíneos"),
                (2, "Depósito de agua con peces", "Acuario en casa"),
                (3, "Olor agradable", "Perfume o aroma dulce"),
            ]),
        },
        PuzzleData {
            title: "Mini 2: Gatos".to_owned(),
            grid: rows([
                [0, 0, 1, 0, 0],
                [0, 0, 1, 0, 0],
                [1, 1, 1, 1, 1],
                [0, 0, 1, 0, 0],
                [0, 0, 1, 0, 0],
            ]),
            numbers: rows([
                [0, 0, 1, 0, 0],
                [0, 0, 0, 0, 0],
                [2, 0, 0, 0, 0],
                [0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0],
            ]),
            answers: Vec::from(["..P..", "..A..", "GATOS", "..O..", "..S.."].map(str::to_owned)),
            across: clues(&[(
                2,
                "Animales felinos domésticos (plural)",
                "Mascotas que ronronean",
            )]),
            down: clues(&[(
                1,
                "Aves que nadan y hacen «cua, cua»",
                "Viven en lagos y estanques",
            )]),
        },
    ]
}
