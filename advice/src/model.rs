//! History items, similar cases, and the `/api/chat` request/reply shapes.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Maximum number of history items kept after any mutation.
pub const HISTORY_LIMIT: usize = 10;

/// Storage key the browser widget persists history under.
pub const HISTORY_STORAGE_KEY: &str = "mechanicHistory";

/// One completed exchange, stored newest-first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub message: String,
    pub response: String,
    /// Kept as a free string so stored values outside [`Category`] still render.
    pub category: String,
    pub timestamp: String,
}

impl HistoryItem {
    /// Uppercase label shown next to the entry.
    #[must_use]
    pub fn category_label(&self) -> String {
        self.category.to_uppercase()
    }
}

/// A past case returned alongside the advice. Never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarCase {
    pub prompt: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl SimilarCase {
    /// Similarity scaled to a whole percentage in `0..=100`.
    ///
    /// Returns `None` when the server sent no score.
    #[must_use]
    pub fn match_percent(&self) -> Option<u8> {
        let score = self.similarity?;
        if !score.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (score * 100.0).round().clamp(0.0, 100.0) as u8;
        Some(pct)
    }
}

/// Vehicle system the question is about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Engine,
    Transmission,
    Brakes,
    Electrical,
    Suspension,
    Cooling,
}

impl Category {
    /// Every selectable category, in selector order.
    pub const ALL: [Self; 7] = [
        Self::General,
        Self::Engine,
        Self::Transmission,
        Self::Brakes,
        Self::Electrical,
        Self::Suspension,
        Self::Cooling,
    ];

    /// Wire value sent to the server.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Engine => "engine",
            Self::Transmission => "transmission",
            Self::Brakes => "brakes",
            Self::Electrical => "electrical",
            Self::Suspension => "suspension",
            Self::Cooling => "cooling",
        }
    }

    /// Human-readable selector label.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Engine => "Engine",
            Self::Transmission => "Transmission",
            Self::Brakes => "Brakes",
            Self::Electrical => "Electrical",
            Self::Suspension => "Suspension",
            Self::Cooling => "Cooling System",
        }
    }

    /// Parse a wire value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub category: Category,
}

/// Successful `/api/chat` reply.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatReply {
    pub text: String,
    /// `null`, a missing field, and individual unreadable entries all
    /// degrade to fewer cases; they never cost the advice text.
    #[serde(default, deserialize_with = "lenient_cases")]
    pub similar_cases: Vec<SimilarCase>,
}

fn lenient_cases<'de, D>(deserializer: D) -> Result<Vec<SimilarCase>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<SimilarCase>(value) {
            Ok(case) => Some(case),
            Err(e) => {
                log::warn!("skipping unreadable similar case: {e}");
                None
            }
        })
        .collect())
}

/// Decode persisted history. Anything unreadable is treated as empty.
#[must_use]
pub fn decode_history(raw: &str) -> Vec<HistoryItem> {
    // A stored `null` decodes to `None` and falls through to empty as well.
    match serde_json::from_str::<Option<Vec<HistoryItem>>>(raw) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            log::warn!("discarding unreadable stored history: {e}");
            Vec::new()
        }
    }
}

/// Encode history for persistence.
///
/// # Errors
///
/// Returns the serializer error; plain string fields never fail in practice.
pub fn encode_history(items: &[HistoryItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}
