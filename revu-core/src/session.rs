//! The review session state machine.
//!
//! A [`ReviewSession`] is the single piece of mutable submission state in the
//! client: current status, the latest review text, and the failure record for
//! the last request. It is owned by the UI event loop and mutated only there —
//! background request tasks report back through events, never by touching the
//! session directly.
//!
//! Two guards keep the machine honest under rapid repeated submissions:
//!
//! - **In-flight guard** — [`ReviewSession::begin_submit`] refuses to start a
//!   second request while one is outstanding (`InFlight` status check).
//! - **Stale guard** — every accepted submission bumps a generation counter
//!   carried by [`RequestId`]; [`ReviewSession::complete`] discards results
//!   whose id does not match the current generation, so a response that
//!   arrives after the session has moved on can never overwrite newer state.

use crate::error::ReviewError;

/// Lifecycle status of the review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewStatus {
    /// No request has been made since startup (or since the last reset).
    #[default]
    Idle,
    /// A request is outstanding; the submit trigger is disabled.
    InFlight,
    /// The last request completed at the transport level; `review_text` holds
    /// the unwrapped result (possibly empty).
    Succeeded,
    /// The last request failed; `error_info` holds the reason and the visible
    /// review text is empty.
    Failed,
}

/// Identity token for one accepted submission.
///
/// Compared by [`ReviewSession::complete`] against the session's current
/// generation to discard stale results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// An immutable snapshot of the source buffer taken at submission time.
///
/// The snapshot insulates the outstanding request from later edits: the user
/// may keep typing while the request is in flight without affecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    /// Identity of this submission, for the stale guard.
    pub id: RequestId,
    /// The code exactly as it read when the submission was accepted.
    pub code: String,
}

/// Mutable state for the single review session of a client instance.
///
/// Created `Idle` at startup, never persisted. Exactly one exists per client.
#[derive(Debug, Default)]
pub struct ReviewSession {
    status: ReviewStatus,
    review_text: String,
    error_info: Option<ReviewError>,
    generation: u64,
}

impl ReviewSession {
    /// Creates a fresh session in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle status.
    pub fn status(&self) -> ReviewStatus {
        self.status
    }

    /// The unwrapped review text of the last successful request.
    ///
    /// Empty unless `status() == Succeeded` (and possibly empty even then,
    /// when the response carried no recognizable content).
    pub fn review_text(&self) -> &str {
        &self.review_text
    }

    /// The failure record of the last request, present iff `Failed`.
    pub fn error_info(&self) -> Option<&ReviewError> {
        self.error_info.as_ref()
    }

    /// Accepts a submission, or refuses it while a request is outstanding.
    ///
    /// On acceptance: clears the previous result and failure record, bumps
    /// the generation counter, transitions to `InFlight` *synchronously*
    /// (before any network activity), and returns the snapshot to dispatch.
    /// Returns `None` while `InFlight` — the caller must not start a request.
    pub fn begin_submit(&mut self, code: &str) -> Option<ReviewRequest> {
        if self.status == ReviewStatus::InFlight {
            return None;
        }
        self.review_text.clear();
        self.error_info = None;
        self.generation += 1;
        self.status = ReviewStatus::InFlight;
        Some(ReviewRequest {
            id: RequestId(self.generation),
            code: code.to_owned(),
        })
    }

    /// Applies the outcome of a dispatched request.
    ///
    /// Returns `true` when the session transitioned, `false` when the result
    /// was discarded by the stale guard (wrong generation, or the session is
    /// not waiting on anything). A discarded result causes no mutation at all.
    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<String, ReviewError>,
    ) -> bool {
        if self.status != ReviewStatus::InFlight || id.0 != self.generation {
            return false;
        }
        match outcome {
            Ok(text) => {
                self.review_text = text;
                self.error_info = None;
                self.status = ReviewStatus::Succeeded;
            }
            Err(err) => {
                // The visible review stays empty on failure; the error is
                // recorded for the diagnostic channel only.
                self.review_text.clear();
                self.error_info = Some(err);
                self.status = ReviewStatus::Failed;
            }
        }
        true
    }
}
