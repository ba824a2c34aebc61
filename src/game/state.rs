//! Game state and core rules
//!
//! Everything needed to resume a game lives here; `SaveRecord` is its
//! on-disk form.

use std::fmt;

use crate::consts::*;
use crate::error::GuessError;

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for guesses
    #[default]
    Playing,
    /// Every letter of the word was found
    Won,
    /// Ran out of lives
    Lost,
    /// Saved and quit before a result
    Suspended,
}

/// Result of evaluating the board after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// What a single accepted guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Hit,
    Miss,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Uppercase secret word
    secret_word: String,
    /// Guessed letters in the order they were tried
    guesses: Vec<char>,
    /// Remaining wrong guesses before a loss
    lives: u8,
    /// Current phase
    phase: GamePhase,
}

impl GameState {
    /// Start a fresh game around `secret_word`
    pub fn new(secret_word: &str) -> Self {
        Self::restore(secret_word, Vec::new(), STARTING_LIVES)
    }

    /// Rebuild an in-progress game from saved fields.
    ///
    /// A restored game is always `Playing`, whatever it was when saved.
    pub fn restore(secret_word: &str, guesses: Vec<char>, lives: u8) -> Self {
        Self {
            secret_word: secret_word.to_uppercase(),
            guesses,
            lives,
            phase: GamePhase::Playing,
        }
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The game-over flag: true once won, lost or suspended
    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guesses.contains(&letter)
    }

    /// Mark the game as saved-and-quit. No-op if already over.
    pub fn suspend(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Suspended;
        }
    }

    /// Record a new letter. Rejects duplicates without touching state.
    ///
    /// `letter` must already be a normalized uppercase A-Z letter.
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessResult, GuessError> {
        if !letter.is_ascii_uppercase() {
            return Err(GuessError::InvalidInput(letter.to_string()));
        }
        if self.has_guessed(letter) {
            return Err(GuessError::DuplicateGuess(letter));
        }

        self.guesses.push(letter);

        if self.secret_word.contains(letter) {
            Ok(GuessResult::Hit)
        } else {
            self.lives = self.lives.saturating_sub(1);
            Ok(GuessResult::Miss)
        }
    }

    /// True when every distinct letter of the word has been guessed
    pub fn is_solved(&self) -> bool {
        self.secret_word.chars().all(|c| self.has_guessed(c))
    }

    /// Check for a win, then a loss, and move to the terminal phase.
    ///
    /// Once over, the recorded phase is reported again without re-evaluation.
    pub fn evaluate_outcome(&mut self) -> Outcome {
        match self.phase {
            GamePhase::Won => return Outcome::Won,
            GamePhase::Lost => return Outcome::Lost,
            GamePhase::Suspended => return Outcome::InProgress,
            GamePhase::Playing => {}
        }

        if self.is_solved() {
            self.phase = GamePhase::Won;
            Outcome::Won
        } else if self.lives == 0 {
            self.phase = GamePhase::Lost;
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// Displayable view of the current board
    pub fn board(&self) -> Board<'_> {
        Board { state: self }
    }

    /// Masked word, e.g. `_ R O _ R A M`
    pub fn masked_word(&self) -> String {
        self.secret_word
            .chars()
            .map(|c| if self.has_guessed(c) { c } else { HIDDEN_LETTER })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Text rendering of a `GameState`
pub struct Board<'a> {
    state: &'a GameState,
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(20);
        let used = self
            .state
            .guesses
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "{rule}")?;
        writeln!(f, "Word:  {}", self.state.masked_word())?;
        writeln!(f, "Lives: {}", self.state.lives)?;
        writeln!(f, "Used:  {used}")?;
        write!(f, "{rule}")
    }
}
