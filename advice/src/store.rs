//! Persistence port for conversation history.

use std::sync::Mutex;

use crate::error::StoreError;
use crate::model::HistoryItem;

/// Durable home of the history list.
///
/// `load` never fails: missing or unreadable data is an empty history.
pub trait HistoryStore {
    /// Read the persisted history, newest first.
    fn load(&self) -> Vec<HistoryItem>;

    /// Replace the persisted history.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the write could not be completed.
    fn save(&self, items: &[HistoryItem]) -> Result<(), StoreError>;
}

/// In-process store for tests; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<Vec<HistoryItem>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(items: Vec<HistoryItem>) -> Self {
        Self { items: Mutex::new(items) }
    }

    /// Copy of what was last saved.
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistoryItem> {
        self.items.lock().map(|items| items.clone()).unwrap_or_default()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Vec<HistoryItem> {
        self.snapshot()
    }

    fn save(&self, items: &[HistoryItem]) -> Result<(), StoreError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_owned()))?;
        *guard = items.to_vec();
        Ok(())
    }
}

impl<S: HistoryStore + ?Sized> HistoryStore for &S {
    fn load(&self) -> Vec<HistoryItem> {
        (**self).load()
    }

    fn save(&self, items: &[HistoryItem]) -> Result<(), StoreError> {
        (**self).save(items)
    }
}
