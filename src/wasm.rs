//! JavaScript bindings for a browser front-end.

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::game::Game;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[wasm_bindgen]
pub fn is_valid_position(row: i32, col: i32) -> bool {
    Board::is_valid_position(row, col)
}

/// One game session owned by the front-end.
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// `false` means the square is not a legal move.
    pub fn play(&mut self, row: i32, col: i32) -> Result<bool, JsError> {
        Ok(self.game.play(row, col)?)
    }

    pub fn pass(&mut self) -> Result<(), JsError> {
        Ok(self.game.pass()?)
    }

    pub fn can_pass(&self) -> bool {
        self.game.can_pass()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Serialized [`crate::types::GameState`].
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    /// Serialized [`crate::types::GameResult`].
    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_result())?)
    }
}
