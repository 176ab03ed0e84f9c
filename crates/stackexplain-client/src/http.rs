//! reqwest implementation of [`ExplainBackend`]

use std::time::Duration;

use url::Url;

use stackexplain_core::prelude::*;
use stackexplain_core::{ExplainRequest, ExplanationRecord};

use crate::backend::ExplainBackend;

/// Endpoint used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/explain";

/// Parse and check a backend endpoint.
///
/// Only absolute `http`/`https` URLs are accepted.
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::invalid_backend_url(raw, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid_backend_url(
            raw,
            format!("unsupported scheme '{}'", other),
        )),
    }
}

/// Decode a response body into an explanation record.
///
/// The body must be a JSON object; every field in it is optional.
pub fn decode_record(body: &[u8]) -> Result<ExplanationRecord> {
    serde_json::from_slice(body).map_err(|e| Error::decode(e.to_string()))
}

/// HTTP client for `POST /explain`
#[derive(Debug, Clone)]
pub struct HttpExplainClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpExplainClient {
    /// Build a client for `endpoint`.
    ///
    /// `timeout` of `None` leaves requests unbounded, matching the backend's
    /// own latency (model calls can take a long time).
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, endpoint })
    }

    /// Convenience constructor from an unparsed URL
    pub fn from_url_str(raw: &str, timeout: Option<Duration>) -> Result<Self> {
        Self::new(parse_endpoint(raw)?, timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ExplainBackend for HttpExplainClient {
    async fn explain(&self, request: &ExplainRequest) -> Result<ExplanationRecord> {
        debug!(
            "POST {} (model: {})",
            self.endpoint,
            request.model.as_deref().unwrap_or("<none>")
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| Error::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::request(e.to_string()))?;

        let record = decode_record(&body)?;
        info!(
            "Explanation received (error_type: {})",
            record.error_type.as_deref().unwrap_or("<none>")
        );
        Ok(record)
    }
}
