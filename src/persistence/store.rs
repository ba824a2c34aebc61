//! File-backed save slot

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::record::SaveRecord;
use crate::error::{Error, Result};

/// The single save slot at a fixed path
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the record is staged in before the rename
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("save"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write the record, replacing any previous save atomically
    pub fn save(&self, record: &SaveRecord) -> Result<()> {
        let tmp = self.tmp_path();
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| Error::io(&self.path, io::Error::other(e)))?;

        let write = || -> io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()
        };
        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp);
            return Err(Error::io(&tmp, e));
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            Error::io(&self.path, e)
        })?;

        log::info!("Game saved to {}", self.path.display());
        Ok(())
    }

    /// Read and validate the saved record
    pub fn load(&self) -> Result<SaveRecord> {
        let content = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MissingResource {
                what: "Saved game",
                path: self.path.clone(),
            },
            _ => Error::io(&self.path, e),
        })?;

        let corrupt = |reason: String| Error::CorruptSave {
            path: self.path.clone(),
            reason,
        };
        let value: Value = serde_json::from_slice(&content).map_err(|e| corrupt(e.to_string()))?;
        let record = SaveRecord::from_value(&value).map_err(corrupt)?;

        log::info!(
            "Loaded save from {} ({} guesses, {} lives)",
            self.path.display(),
            record.guesses.len(),
            record.lives
        );
        Ok(record)
    }

    /// Remove the save (and any leftover staging file). Absent is fine.
    pub fn delete(&self) -> Result<()> {
        for path in [self.tmp_path(), self.path.clone()] {
            match fs::remove_file(&path) {
                Ok(()) => log::info!("Deleted {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(Error::io(path, e)),
            }
        }
        Ok(())
    }
}
