//! Browser `localStorage` backing for conversation history.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`LocalStorageStore`] is the widget's implementation of the history
//! persistence port. Reads are best-effort: a missing window, a missing key,
//! or an unreadable value all load as empty history. Outside the browser
//! every read is empty and every write reports the storage as unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use advice::model::{decode_history, encode_history};
use advice::{HistoryItem, HistoryStore, StoreError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl HistoryStore for LocalStorageStore {
    fn load(&self) -> Vec<HistoryItem> {
        read_raw(&self.key).map(|raw| decode_history(&raw)).unwrap_or_default()
    }

    fn save(&self, items: &[HistoryItem]) -> Result<(), StoreError> {
        let raw = encode_history(items)?;
        write_raw(&self.key, &raw)
    }
}

fn read_raw(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

fn write_raw(key: &str, raw: &str) -> Result<(), StoreError> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StoreError::Unavailable("localStorage not available".to_owned()))?;
        storage
            .set_item(key, raw)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, raw);
        Err(StoreError::Unavailable(unavailable_message()))
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable_message() -> String {
    "localStorage is only reachable in the browser".to_owned()
}
