//! Hangman - a console word-guessing game
//!
//! Core modules:
//! - `game`: Game state, input parsing and win/loss evaluation
//! - `dictionary`: Word list loading and secret word selection
//! - `persistence`: Save/load with atomic writes and validation
//! - `session`: A single game session tying state and storage together
//! - `settings`: Runtime configuration
//! - `console`: Line-based menu and turn loop

pub mod console;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod persistence;
pub mod session;
pub mod settings;

pub use console::{Console, SessionEnd};
pub use dictionary::Dictionary;
pub use error::{Error, GuessError, Result};
pub use game::{GamePhase, GameState, Outcome};
pub use persistence::{SaveRecord, SaveStore};
pub use session::{Session, TurnReport};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Lives at the start of every new game
    pub const STARTING_LIVES: u8 = 7;

    /// Secret word length bounds (inclusive, in characters)
    pub const MIN_WORD_LEN: usize = 5;
    pub const MAX_WORD_LEN: usize = 12;

    /// Turn input that saves and quits (compared after uppercasing)
    pub const SAVE_KEYWORD: &str = "SAVE";

    /// Placeholder for letters not yet guessed
    pub const HIDDEN_LETTER: char = '_';

    /// Default file locations, relative to the working directory
    pub const DEFAULT_DICTIONARY_PATH: &str = "google-10000-english-no-swears.txt";
    pub const DEFAULT_SAVE_PATH: &str = "saved_game.json";
    pub const DEFAULT_SETTINGS_PATH: &str = "hangman.json";

    /// Environment variable overriding the settings file location
    pub const SETTINGS_PATH_ENV: &str = "HANGMAN_CONFIG";
}
