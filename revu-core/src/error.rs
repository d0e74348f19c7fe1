//! Failure taxonomy for the review submission lifecycle.
//!
//! Every transport-level failure collapses into one of these variants at the
//! client boundary; callers only ever observe a `ReviewError`, never a raw
//! `reqwest::Error`. An unrecognized response *shape* is deliberately not an
//! error — the tolerant unwrapping in [`crate::extract`] resolves it to text.

use thiserror::Error;

/// A failed review request, as recorded in [`crate::ReviewSession`].
///
/// `Clone + PartialEq` so the session can own a copy and tests can assert on
/// exact outcomes. The display strings are written for the diagnostic log,
/// not for the review panel — failure detail is never shown there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// The request could not be sent or the connection broke mid-exchange.
    #[error("network error: {0}")]
    Network(String),
    /// The request exceeded the configured client-side timeout.
    #[error("request timed out")]
    Timeout,
    /// The service answered with a non-success HTTP status.
    #[error("server returned status {status}")]
    Server {
        /// The HTTP status code from the response.
        status: u16,
    },
}
