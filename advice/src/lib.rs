//! Shared domain model for the mechanic advice chat.
//!
//! This crate owns everything both front ends (`client` and `cli`) agree on:
//! the history model, the `/api/chat` wire types, the submit state machine,
//! and the render model derived from it. It performs no I/O of its own;
//! persistence and transport are injected through [`HistoryStore`] and
//! [`AdviceApi`].
//!
//! DESIGN
//! ======
//! The controller is a plain state object. Front ends either await
//! [`ChatController::submit`] directly or drive the `begin` / `complete`
//! halves themselves when the state lives inside a UI signal.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod store;
pub mod view;
pub mod wire;

pub use api::AdviceApi;
pub use config::{ResponseFormat, WidgetConfig};
pub use controller::{ChatController, Clock, Phase, Rejection, ResponsePanel, SubmitOutcome};
pub use error::{ApiError, StoreError};
pub use model::{Category, ChatReply, ChatRequest, HISTORY_LIMIT, HistoryItem, SimilarCase};
pub use store::{HistoryStore, MemoryStore};
pub use view::ChatView;
