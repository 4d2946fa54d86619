#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use advice::{ChatController, ChatView, WidgetConfig};

use crate::util::clock::now_timestamp;
use crate::util::storage::LocalStorageStore;

/// Everything the widget keeps between renders.
///
/// Held in a single `RwSignal` provided via context. Components never mutate
/// history directly; they go through the controller's `begin`, `complete`,
/// and `view_item`.
pub struct WidgetState {
    pub controller: ChatController<LocalStorageStore>,
    pub config: WidgetConfig,
}

impl WidgetState {
    /// Hydrate history from `localStorage` under the configured key.
    pub fn new(config: WidgetConfig) -> Self {
        let store = LocalStorageStore::new(config.storage_key.clone());
        Self { controller: ChatController::new(store, now_timestamp), config }
    }

    /// Render model for the current state.
    pub fn view(&self) -> ChatView {
        ChatView::render(&self.controller, &self.config)
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}
