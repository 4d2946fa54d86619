//! JSON-file history store for the terminal client.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use advice::model::{decode_history, encode_history};
use advice::{HistoryItem, HistoryStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Vec<HistoryItem> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_history(&raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "history file unreadable");
                Vec::new()
            }
        }
    }

    /// Write through a sibling temp file so a crash never leaves a torn file.
    fn save(&self, items: &[HistoryItem]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = encode_history(items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "history saved");
        Ok(())
    }
}

/// `<data dir>/mechanic/history.json`, when the platform has a data dir.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("mechanic").join("history.json"))
}
