//! Word list loading and secret word selection

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::consts::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::error::{Error, Result};

/// A newline-delimited word list
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Where the words came from (for error messages)
    source: PathBuf,
    words: Vec<String>,
}

impl Dictionary {
    /// Read a word list from disk, one word per line
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MissingResource {
                what: "Dictionary file",
                path: path.to_path_buf(),
            },
            _ => Error::io(path, e),
        })?;

        let dictionary = Self {
            source: path.to_path_buf(),
            words: content.lines().map(|line| line.trim().to_string()).collect(),
        };
        log::info!(
            "Loaded {} words from {} ({} playable)",
            dictionary.words.len(),
            path.display(),
            dictionary.candidates().count()
        );
        Ok(dictionary)
    }

    /// Build a dictionary from in-memory words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: PathBuf::from("<memory>"),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words whose length is within the playable bounds
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|w| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&w.chars().count()))
    }

    /// Pick a playable word uniformly at random, uppercased
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let candidates: Vec<&str> = self.candidates().collect();
        candidates
            .choose(rng)
            .map(|w| w.to_uppercase())
            .ok_or_else(|| Error::NoCandidateWords {
                path: self.source.clone(),
            })
    }
}
