//! Game rules module
//!
//! All gameplay logic lives here. This module is pure:
//! - No file system or console access
//! - No randomness (the secret word is chosen by the caller)
//! - Every mutation goes through `GameState::apply_guess`

pub mod state;
pub mod turn;

pub use state::{Board, GamePhase, GameState, GuessResult, Outcome};
pub use turn::{Command, parse_input};
