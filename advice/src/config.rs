//! Presentation settings shared by the widget and the terminal client.

use crate::model::HISTORY_STORAGE_KEY;
use crate::wire::CHAT_ENDPOINT;

pub const DEFAULT_MAX_SIMILAR_CASES: usize = 3;

/// How advice text is turned into markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Escaped text, nothing translated.
    Plain,
    /// `**bold**` spans and line-leading `- ` bullets translated.
    #[default]
    Light,
    /// Full Markdown rendering.
    Markdown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub storage_key: String,
    pub max_similar_cases: usize,
    pub format: ResponseFormat,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: CHAT_ENDPOINT.to_owned(),
            storage_key: HISTORY_STORAGE_KEY.to_owned(),
            max_similar_cases: DEFAULT_MAX_SIMILAR_CASES,
            format: ResponseFormat::default(),
        }
    }
}
