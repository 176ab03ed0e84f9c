//! Test utilities for backend consumers
//!
//! Provides [`FakeBackend`], an [`ExplainBackend`] that answers with a canned
//! outcome and records every request it receives.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use stackexplain_core::prelude::*;
use stackexplain_core::{ExplainRequest, ExplanationRecord};

use crate::backend::ExplainBackend;

/// Canned answer for [`FakeBackend`]
#[derive(Debug, Clone)]
pub enum CannedOutcome {
    Record(ExplanationRecord),
    /// Fails with [`Error::Request`] carrying this message
    Fail(String),
}

/// In-memory backend for tests
#[derive(Debug, Clone)]
pub struct FakeBackend {
    outcome: CannedOutcome,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<ExplainRequest>>>,
}

impl FakeBackend {
    /// Backend that always succeeds with `record`
    pub fn answering(record: ExplanationRecord) -> Self {
        Self {
            outcome: CannedOutcome::Record(record),
            delay: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Backend that always fails
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: CannedOutcome::Fail(message.to_string()),
            delay: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Wait `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<ExplainRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl ExplainBackend for FakeBackend {
    async fn explain(&self, request: &ExplainRequest) -> Result<ExplanationRecord> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(request.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.outcome {
            CannedOutcome::Record(record) => Ok(record.clone()),
            CannedOutcome::Fail(message) => Err(Error::request(message.clone())),
        }
    }
}

/// The record from the TypeError walkthrough used across test suites
pub fn type_error_record() -> ExplanationRecord {
    ExplanationRecord {
        error_type: Some("TypeError".to_string()),
        explanation: Some("x is undefined".to_string()),
        suggested_fix: Some("check initialization".to_string()),
        relevant_links: Some(Vec::new()),
    }
}
