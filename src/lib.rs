use wasm_bindgen::prelude::*;

pub mod api;
pub mod board;
pub mod error;
pub mod game;
pub mod persist;
pub mod types;

pub use error::{Result, ReversiError};
pub use game::GameSession;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
