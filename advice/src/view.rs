//! Render model: a pure function of controller state.
//!
//! Front ends turn a [`ChatView`] into DOM nodes or terminal lines; none of
//! the preview, truncation, or labelling rules live in them.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::config::WidgetConfig;
use crate::controller::{ChatController, Phase, ResponsePanel};
use crate::model::{HistoryItem, SimilarCase};
use crate::store::HistoryStore;

pub const EMPTY_HISTORY_TEXT: &str = "No diagnostic history found.";
pub const PLACEHOLDER_TEXT: &str = "Describe the problem to get advice.";
pub const SUBMIT_LABEL: &str = "Get Advice";
pub const SUBMIT_BUSY_LABEL: &str = "Getting Advice...";
pub const NO_SCORE_LABEL: &str = "N/A";

pub const CASE_PREVIEW_CHARS: usize = 150;
pub const MESSAGE_PREVIEW_CHARS: usize = 50;
pub const RESPONSE_PREVIEW_CHARS: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatView {
    pub busy: bool,
    pub submit_label: &'static str,
    pub response: ResponseView,
    pub history: HistoryView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseView {
    Placeholder(&'static str),
    /// Advice text (unformatted) plus the similar-case cards to show. An
    /// empty `cases` list means the cases panel is hidden.
    Advice { text: String, cases: Vec<CaseView> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseView {
    /// 1-based position shown as "Case N".
    pub number: usize,
    pub problem: String,
    pub solution_preview: String,
    pub match_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryView {
    Empty(&'static str),
    Entries(Vec<HistoryEntryView>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntryView {
    /// Index to pass back to `view_item`.
    pub index: usize,
    pub category_label: String,
    pub timestamp: String,
    pub message_preview: String,
    pub response_preview: String,
    /// Whether this entry is the one currently replayed.
    pub active: bool,
}

impl ChatView {
    #[must_use]
    pub fn render<S: HistoryStore>(controller: &ChatController<S>, config: &WidgetConfig) -> Self {
        let busy = controller.phase() == Phase::Submitting;
        let active = match controller.panel() {
            ResponsePanel::Replay { index, .. } => Some(*index),
            _ => None,
        };

        Self {
            busy,
            submit_label: if busy { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL },
            response: render_response(controller.panel(), config.max_similar_cases),
            history: render_history(controller.history(), active),
        }
    }
}

fn render_response(panel: &ResponsePanel, max_cases: usize) -> ResponseView {
    match panel {
        ResponsePanel::Placeholder => ResponseView::Placeholder(PLACEHOLDER_TEXT),
        ResponsePanel::Advice { text, similar_cases } => ResponseView::Advice {
            text: text.clone(),
            cases: similar_cases
                .iter()
                .take(max_cases)
                .enumerate()
                .map(|(i, case)| render_case(i + 1, case))
                .collect(),
        },
        ResponsePanel::Replay { item, .. } => {
            ResponseView::Advice { text: item.response.clone(), cases: Vec::new() }
        }
    }
}

fn render_case(number: usize, case: &SimilarCase) -> CaseView {
    CaseView {
        number,
        problem: case.prompt.clone(),
        solution_preview: preview(&case.response, CASE_PREVIEW_CHARS),
        match_label: match_label(case),
    }
}

/// "87% Match", or "N/A" when the server sent no score.
#[must_use]
pub fn match_label(case: &SimilarCase) -> String {
    match case.match_percent() {
        Some(pct) => format!("{pct}% Match"),
        None => format!("{NO_SCORE_LABEL} Match"),
    }
}

fn render_history(items: &[HistoryItem], active: Option<usize>) -> HistoryView {
    if items.is_empty() {
        return HistoryView::Empty(EMPTY_HISTORY_TEXT);
    }
    HistoryView::Entries(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| HistoryEntryView {
                index,
                category_label: item.category_label(),
                timestamp: item.timestamp.clone(),
                message_preview: preview(&item.message, MESSAGE_PREVIEW_CHARS),
                response_preview: preview(&item.response, RESPONSE_PREVIEW_CHARS),
                active: active == Some(index),
            })
            .collect(),
    )
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_owned(),
    }
}
