//! # stackexplain-client - Backend Client
//!
//! Talks to the explanation service: encodes the `POST /explain` payload,
//! decodes the explanation record, and classifies failures.
//!
//! ## Public API
//! - [`ExplainBackend`] - Send-able async trait for one exchange
//! - [`HttpExplainClient`] - reqwest implementation
//! - [`record_or_fallback`] - Turn any outcome into the record to display
//! - [`parse_endpoint`], [`DEFAULT_BACKEND_URL`] - Endpoint handling

pub mod backend;
pub mod http;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{record_or_fallback, ExplainBackend, LocalExplainBackend};
pub use http::{decode_record, parse_endpoint, HttpExplainClient, DEFAULT_BACKEND_URL};
