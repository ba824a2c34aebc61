//! Player input parsing
//!
//! Turns a raw console line into a command for the session.

use crate::consts::SAVE_KEYWORD;
use crate::error::GuessError;

/// A parsed turn input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Save the game and quit
    Save,
    /// Guess a single uppercase letter
    Guess(char),
}

/// Normalize (trim + uppercase) and classify one line of input.
///
/// Duplicate detection needs the game state, so it happens in
/// `GameState::apply_guess`, not here.
pub fn parse_input(raw: &str) -> Result<Command, GuessError> {
    let input = raw.trim().to_uppercase();

    if input == SAVE_KEYWORD {
        return Ok(Command::Save);
    }

    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => Ok(Command::Guess(letter)),
        _ => Err(GuessError::InvalidInput(input)),
    }
}
