//! Runtime settings
//!
//! Read from `hangman.json` in the working directory (or the file named by
//! `HANGMAN_CONFIG`). Every field is optional.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::persistence::SaveStore;

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Newline-delimited word list
    pub dictionary_path: PathBuf,
    /// Save slot location
    pub save_path: PathBuf,
    /// Fixed RNG seed for reproducible word choice
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            seed: None,
        }
    }
}

impl Settings {
    /// Settings file location, honoring `HANGMAN_CONFIG`
    pub fn default_path() -> PathBuf {
        env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::from_path(&path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Read a settings file. `Ok(None)` if it does not exist.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io(path, e)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| Error::Settings {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn save_store(&self) -> SaveStore {
        SaveStore::new(&self.save_path)
    }

    /// RNG for word selection: seeded from settings, or from the OS otherwise
    pub fn rng(&self) -> Pcg32 {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::debug!("Word selection seed: {seed}");
        Pcg32::seed_from_u64(seed)
    }
}
