//! Browser-facing wrapper around [`GameSession`].

use wasm_bindgen::prelude::*;

use crate::game::GameSession;
use crate::types::Position;

#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Plays at a 0-based row/column. Returns `false` when the cell is not legal.
    pub fn click(&mut self, row: u8, col: u8) -> bool {
        self.session.click_at(Position::new(row, col))
    }

    pub fn pass(&mut self) -> bool {
        self.session.pass()
    }

    /// Current [`GameState`](crate::types::GameState) as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.session.snapshot())
            .map_err(|err| JsError::new(&err.to_string()))
    }

    #[wasm_bindgen(js_name = toToml)]
    pub fn to_toml(&self) -> String {
        self.session.to_toml()
    }

    /// Loads a saved position; the game is unchanged when the text is rejected.
    #[wasm_bindgen(js_name = fromToml)]
    pub fn from_toml(&mut self, text: &str) -> Result<(), JsError> {
        self.session
            .from_toml(text)
            .map_err(|err| JsError::new(&err.to_string()))
    }

    pub fn glyph(&self, row: u8, col: u8) -> String {
        Position::new(row, col)
            .index()
            .and_then(|index| self.session.cell(index))
            .map(|cell| cell.glyph().to_string())
            .unwrap_or_default()
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
