//! HTTP client for the review service.
//!
//! One operation: `POST {base}/ai/get-review` with a JSON body
//! `{"code": <string>}`. The timeout is enforced client-side by reqwest and
//! surfaced as [`ReviewError::Timeout`]; non-success statuses become
//! [`ReviewError::Server`]; everything else transport-related becomes
//! [`ReviewError::Network`]. A successful body is passed exactly once through
//! the tolerant unwrapping in [`crate::extract`], so an odd response shape is
//! a (possibly empty) success, never an error.

use std::time::Duration;

use serde::Serialize;

use crate::error::ReviewError;
use crate::extract;

/// Default client-side timeout for a review request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(20_000);

/// Default base URL of the review service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3000";

/// Wire format of the submission body.
#[derive(Debug, Serialize)]
struct SubmitBody<'a> {
    code: &'a str,
}

/// Client for the remote review service.
///
/// Cheap to clone is not needed — the UI wraps it in an `Arc` and shares it
/// across request tasks. The underlying `reqwest::Client` pools connections.
#[derive(Debug)]
pub struct ReviewClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReviewClient {
    /// Builds a client for the service at `base_url` with the given timeout.
    ///
    /// A trailing slash on `base_url` is tolerated. Fails only if the
    /// underlying HTTP client cannot be constructed (TLS backend missing).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ReviewError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReviewError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Submits a code snapshot and returns the unwrapped review text.
    ///
    /// This is the only suspension point of the submission lifecycle. The
    /// caller is expected to run it on a background task and feed the result
    /// back to the session through an event, keeping all state mutation on
    /// the UI thread.
    pub async fn request_review(&self, code: &str) -> Result<String, ReviewError> {
        let url = format!("{}/ai/get-review", self.base_url);
        tracing::debug!(url = %url, bytes = code.len(), "submitting review request");

        let response = self
            .http
            .post(&url)
            .json(&SubmitBody { code })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Server { status: status.as_u16() });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        Ok(extract::extract_review_text(&body))
    }
}

/// Maps a reqwest transport error onto the failure taxonomy.
///
/// Timeouts are distinguished first because reqwest reports them as a kind of
/// request error; everything else is a generic network failure with the
/// display string kept for the diagnostic log.
fn map_transport_error(err: reqwest::Error) -> ReviewError {
    if err.is_timeout() {
        ReviewError::Timeout
    } else {
        ReviewError::Network(err.to_string())
    }
}
