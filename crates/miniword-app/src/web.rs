//! Browser binding.
//!
//! The page owns the DOM; it forwards input events to [`WebCrossword`] and
//! redraws from the returned objects.

use miniword_core::Position;
use miniword_game::{Catalog, Crossword};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    command::{parse_key, parse_position},
    dto::{EditDto, HintDto, KeyDto, PuzzleDto, SelectionDto, VerificationDto},
};

#[wasm_bindgen(start)]
pub fn start() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        previous(panic_info);
        web_sys::console::error_1(&JsValue::from_str(&panic_info.to_string()));
    }));

    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "failed to initialize logging: {err}"
        )));
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsError::new(&err.to_string()).into()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

fn position(row: usize, col: usize) -> Result<Position, JsValue> {
    parse_position(row, col).map_err(js_error)
}

#[wasm_bindgen]
pub struct WebCrossword {
    game: Crossword,
}

#[wasm_bindgen]
impl WebCrossword {
    #[wasm_bindgen(constructor)]
    pub fn new(index: usize) -> Result<WebCrossword, JsValue> {
        let catalog = Catalog::builtin().map_err(js_error)?;
        let game = Crossword::new(catalog, index).map_err(js_error)?;
        Ok(Self { game })
    }

    /// Describes the active puzzle: grid, numbers, clues and letters.
    pub fn puzzle(&self) -> Result<JsValue, JsValue> {
        to_js(&PuzzleDto::from_game(&self.game))
    }

    #[wasm_bindgen(js_name = loadPuzzle)]
    pub fn load_puzzle(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.game.load_puzzle(index).map_err(js_error)?;
        self.puzzle()
    }

    #[wasm_bindgen(js_name = nextPuzzle)]
    pub fn next_puzzle(&mut self) -> Result<JsValue, JsValue> {
        self.game.next_puzzle().map_err(js_error)?;
        self.puzzle()
    }

    #[wasm_bindgen(js_name = onCellEdited)]
    pub fn on_cell_edited(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<JsValue, JsValue> {
        let outcome = self
            .game
            .on_cell_edited(position(row, col)?, text)
            .map_err(js_error)?;
        to_js(&EditDto::new(outcome, self.game.session()))
    }

    #[wasm_bindgen(js_name = onCellClicked)]
    pub fn on_cell_clicked(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let outcome = self.game.on_cell_clicked(position(row, col)?);
        to_js(&SelectionDto::from(outcome))
    }

    /// `key` is a `KeyboardEvent.key` value such as `ArrowLeft` or `Backspace`.
    #[wasm_bindgen(js_name = onDirectionalKey)]
    pub fn on_directional_key(
        &mut self,
        row: usize,
        col: usize,
        key: &str,
    ) -> Result<JsValue, JsValue> {
        let key = parse_key(key).map_err(js_error)?;
        let outcome = self.game.on_directional_key(position(row, col)?, key);
        to_js(&KeyDto::new(outcome, self.game.session()))
    }

    /// Returns `undefined` when there is no active clue or its hint was shown.
    #[wasm_bindgen(js_name = requestHint)]
    pub fn request_hint(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.game.request_hint().map(HintDto::from))
    }

    #[wasm_bindgen(js_name = verifyNow)]
    pub fn verify_now(&self) -> Result<JsValue, JsValue> {
        to_js(&VerificationDto::from(&self.game.verify_now()))
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test]
    fn test_start_installs_console_logger() {
        start();
        start();
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
        assert!(log::log_enabled!(log::Level::Debug));
        log::debug!("console logger ready");
    }

    #[wasm_bindgen_test]
    fn test_load_then_edit() {
        let mut game = WebCrossword::new(0).unwrap();
        assert!(game.load_puzzle(1).is_ok());
        assert!(game.on_cell_edited(9, 0, "a").is_err());
        assert!(game.on_cell_clicked(2, 0).is_ok());
    }
}
