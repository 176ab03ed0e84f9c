//! Explanation record and request payload exchanged with the backend
//!
//! The backend accepts `{ "error": ..., "model"?: ... }` and answers with an
//! object whose four fields are each optional. Absent fields stay `None` so
//! the view can tell "not sent" apart from "sent but empty".

use serde::{Deserialize, Serialize};

/// `error_type` of the record shown when the backend call fails.
pub const FALLBACK_ERROR_TYPE: &str = "RequestError";

/// Explanation shown when the backend call fails.
pub const FALLBACK_EXPLANATION: &str = "An error occurred while contacting the server.";

/// Suggested fix shown when the backend call fails.
pub const FALLBACK_SUGGESTED_FIX: &str =
    "Make sure the backend server is running and reachable at the configured URL.";

/// Structured explanation of one error message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationRecord {
    /// Short classification, e.g. `TypeError`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// Plain-language explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// What to change to fix it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,

    /// Documentation links, in the order the backend sent them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_links: Option<Vec<String>>,
}

impl ExplanationRecord {
    /// The fixed record substituted for any failed backend exchange.
    pub fn fallback() -> Self {
        Self {
            error_type: Some(FALLBACK_ERROR_TYPE.to_string()),
            explanation: Some(FALLBACK_EXPLANATION.to_string()),
            suggested_fix: Some(FALLBACK_SUGGESTED_FIX.to_string()),
            relevant_links: Some(Vec::new()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    /// Number of links, zero when the list is absent.
    pub fn link_count(&self) -> usize {
        self.relevant_links.as_ref().map_or(0, Vec::len)
    }

    /// Link at `index`, if the list is present and long enough.
    pub fn link(&self, index: usize) -> Option<&str> {
        self.relevant_links
            .as_ref()
            .and_then(|links| links.get(index))
            .map(String::as_str)
    }
}

/// Body of `POST /explain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    /// Raw error text, sent unvalidated (may be empty)
    pub error: String,

    /// Full model identifier; omitted from the JSON when `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ExplainRequest {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}
