//! Backend abstraction for the explanation exchange
//!
//! Both the TUI and headless mode talk to the backend through this trait so
//! tests can swap the HTTP client for a canned one.

use stackexplain_core::prelude::*;
use stackexplain_core::{ExplainRequest, ExplanationRecord};

/// One request/response exchange with the explanation service
#[trait_variant::make(ExplainBackend: Send)]
pub trait LocalExplainBackend {
    /// Submit the payload and decode the explanation record.
    ///
    /// Any transport failure, non-success status, or undecodable body is an
    /// error; callers decide how to present it.
    async fn explain(&self, request: &ExplainRequest) -> Result<ExplanationRecord>;
}

/// Collapse an exchange outcome into the record the user sees.
///
/// Failures are not subdivided for display: every one becomes
/// [`ExplanationRecord::fallback`]. The cause only reaches the log.
pub fn record_or_fallback(outcome: Result<ExplanationRecord>) -> ExplanationRecord {
    match outcome {
        Ok(record) => record,
        Err(e) => {
            warn!("Explanation request failed, showing fallback: {}", e);
            ExplanationRecord::fallback()
        }
    }
}
