//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused control

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::{Message, RequestId};
use stackexplain_core::ExplainRequest;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// POST the payload to the backend; the settlement comes back as
    /// `ExplanationReceived` / `ExplanationFailed` tagged with `request_id`
    SendExplainRequest {
        request_id: RequestId,
        request: ExplainRequest,
    },

    /// Open a URL with the configured browser (empty = platform default).
    ///
    /// Fire-and-forget OS call.
    OpenUrl { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
