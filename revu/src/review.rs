//! Background dispatch of review requests.
//!
//! The session state machine lives on the UI thread; the HTTP request runs on
//! a tokio task. [`ReviewDispatcher`] bridges the two: it asks the session to
//! accept a submission (the in-flight guard lives there), spawns the request
//! task with the accepted snapshot, and the task reports back through the
//! unified event channel as an [`crate::event::AppEvent::ReviewResult`]. The
//! task never touches the session — all mutation stays on the UI thread.

use std::sync::Arc;

use tokio::sync::mpsc;

use revu_core::{RequestId, ReviewClient, ReviewError, ReviewSession};

use crate::event::AppEvent;

/// Completion record of one dispatched request, delivered over the event
/// channel. Carries the request id so the session's stale guard can match it
/// against the current generation.
#[derive(Debug)]
pub struct ReviewOutcome {
    pub id: RequestId,
    pub outcome: Result<String, ReviewError>,
}

/// Spawns review request tasks and routes their results into the event loop.
pub struct ReviewDispatcher {
    client: Arc<ReviewClient>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl ReviewDispatcher {
    pub fn new(client: Arc<ReviewClient>, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, tx }
    }

    /// Submits `code` for review, unless a request is already outstanding.
    ///
    /// Returns `true` when a request was dispatched (the session is now
    /// `InFlight`), `false` when the in-flight guard refused the submission.
    /// The snapshot handed to the task is taken here, so edits made while the
    /// request runs do not affect it.
    pub fn submit(&self, session: &mut ReviewSession, code: &str) -> bool {
        let Some(request) = session.begin_submit(code) else {
            tracing::debug!("submit ignored: request already in flight");
            return false;
        };

        tracing::info!(bytes = request.code.len(), "dispatching review request");
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = client.request_review(&request.code).await;
            if let Err(err) = &outcome {
                tracing::warn!(error = %err, "review request failed");
            }
            // Receiver gone means the app is shutting down.
            let _ = tx.send(AppEvent::ReviewResult(Box::new(ReviewOutcome {
                id: request.id,
                outcome,
            })));
        });
        true
    }
}
