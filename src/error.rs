//! Error types for the game

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A rejected guess. The turn is not consumed and the player is asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Invalid input! Please type a single letter.")]
    InvalidInput(String),

    #[error("You already guessed '{0}'!")]
    DuplicateGuess(char),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{what} not found at {}", .path.display())]
    MissingResource { what: &'static str, path: PathBuf },

    #[error("No words of playable length in {}", .path.display())]
    NoCandidateWords { path: PathBuf },

    #[error("Saved game at {} is corrupt: {reason}", .path.display())]
    CorruptSave { path: PathBuf, reason: String },

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error("The game is already over")]
    GameOver,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid settings file {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the player can simply be asked again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Guess(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
