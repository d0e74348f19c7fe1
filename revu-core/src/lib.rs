//! revu-core — the submission lifecycle behind the revu TUI.
//!
//! This crate holds everything about requesting a code review that does not
//! touch a terminal: the session state machine ([`session`]), the tolerant
//! response unwrapping ([`extract`]), the HTTP client for the review service
//! ([`client`]), and the failure taxonomy ([`error`]). The split keeps the
//! lifecycle fully testable without a UI — the state machine is synchronous
//! and pure, and the client is exercised against a mock HTTP server in the
//! integration tests.

pub mod client;
pub mod error;
pub mod extract;
pub mod session;

pub use client::{ReviewClient, DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT};
pub use error::ReviewError;
pub use session::{RequestId, ReviewRequest, ReviewSession, ReviewStatus};
