//! Submit state machine and history ownership.
//!
//! SYSTEM CONTEXT
//! ==============
//! One submission moves `Idle -> Submitting -> Idle`. [`ChatController::begin`]
//! validates input and enters `Submitting`; [`ChatController::complete`]
//! always returns to `Idle` before looking at the result, so the submit
//! control is re-enabled whatever the outcome. History is only touched on a
//! successful reply.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::api::AdviceApi;
use crate::error::ApiError;
use crate::model::{Category, ChatReply, ChatRequest, HISTORY_LIMIT, HistoryItem, SimilarCase};
use crate::store::HistoryStore;

/// Produces the display timestamp for a new history item.
pub type Clock = fn() -> String;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// What the response area currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResponsePanel {
    /// Nothing asked or replayed yet.
    #[default]
    Placeholder,
    /// Fresh advice from the last successful submission.
    Advice { text: String, similar_cases: Vec<SimilarCase> },
    /// A history item re-displayed in full; similar cases are hidden.
    Replay { index: usize, item: HistoryItem },
}

/// Why a submission never left the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    EmptyMessage,
    Busy,
}

/// Result of one submission, as the front end needs to react to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No request was sent.
    Rejected(Rejection),
    /// Advice rendered and history updated; the input should be cleared.
    Success,
    /// The server answered with an error; carries the user notice.
    ServerError(String),
    /// The request did not complete; carries the user notice.
    NetworkError(String),
}

impl SubmitOutcome {
    /// Text for the blocking notification, if this outcome needs one.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::ServerError(msg) | Self::NetworkError(msg) => Some(msg),
            Self::Rejected(_) | Self::Success => None,
        }
    }
}

pub struct ChatController<S> {
    store: S,
    clock: Clock,
    history: Vec<HistoryItem>,
    phase: Phase,
    panel: ResponsePanel,
}

impl<S: HistoryStore> ChatController<S> {
    /// Build a controller, hydrating history from `store` once.
    pub fn new(store: S, clock: Clock) -> Self {
        let history = store.load();
        log::debug!("loaded {} history item(s)", history.len());
        Self { store, clock, history, phase: Phase::Idle, panel: ResponsePanel::Placeholder }
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn panel(&self) -> &ResponsePanel {
        &self.panel
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-display a stored response in full. No request is made.
    ///
    /// Out-of-range indexes leave the panel untouched and return `None`.
    pub fn view_item(&mut self, index: usize) -> Option<&HistoryItem> {
        let item = self.history.get(index)?.clone();
        self.panel = ResponsePanel::Replay { index, item };
        self.history.get(index)
    }

    /// Validate input and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Rejects blank messages and submissions made while another is in flight.
    pub fn begin(&mut self, message: &str, category: Category) -> Result<ChatRequest, Rejection> {
        if self.phase == Phase::Submitting {
            return Err(Rejection::Busy);
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(Rejection::EmptyMessage);
        }
        self.phase = Phase::Submitting;
        Ok(ChatRequest { message: message.to_owned(), category })
    }

    /// Apply the result of the request started by [`Self::begin`].
    pub fn complete(&mut self, request: ChatRequest, result: Result<ChatReply, ApiError>) -> SubmitOutcome {
        self.phase = Phase::Idle;

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("advice request failed: {e}");
                return if e.is_network() {
                    SubmitOutcome::NetworkError(e.to_string())
                } else {
                    SubmitOutcome::ServerError(e.to_string())
                };
            }
        };

        let item = HistoryItem {
            message: request.message,
            response: reply.text.clone(),
            category: request.category.as_str().to_owned(),
            timestamp: (self.clock)(),
        };
        self.history.insert(0, item);
        self.history.truncate(HISTORY_LIMIT);
        if let Err(e) = self.store.save(&self.history) {
            log::warn!("history not persisted: {e}");
        }

        log::info!("advice received with {} similar case(s)", reply.similar_cases.len());
        self.panel = ResponsePanel::Advice { text: reply.text, similar_cases: reply.similar_cases };
        SubmitOutcome::Success
    }

    /// Run a full submission against `api`.
    pub async fn submit<A>(&mut self, api: &A, message: &str, category: Category) -> SubmitOutcome
    where
        A: AdviceApi + ?Sized,
    {
        let request = match self.begin(message, category) {
            Ok(request) => request,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };
        log::debug!("asking for {} advice", request.category.as_str());
        let result = api.ask(&request).await;
        self.complete(request, result)
    }
}
