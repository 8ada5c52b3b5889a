//! Test submitter for exercising the signup flow without a network.
//!
//! `TestSubmitter` records every payload it is handed and returns a
//! pre-configured [`Outcome`], so tests can simulate acceptance, server
//! rejection, and transport failure and assert on exactly what was sent.

use std::cell::RefCell;

use crate::{Outcome, Payload, SubmitWaitlist};

/// A submitter that returns a canned outcome and records sent payloads.
#[derive(Debug)]
pub struct TestSubmitter {
    outcome: Outcome,
    sent: RefCell<Vec<Payload>>,
}

impl Default for TestSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSubmitter {
    /// Create a submitter that accepts every signup.
    pub fn new() -> Self {
        Self {
            outcome: Outcome::Accepted,
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Set the outcome returned for every submission.
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Shorthand for a rejection with a server-supplied detail.
    pub fn rejecting(detail: impl Into<String>) -> Self {
        Self::new().with_outcome(Outcome::Rejected {
            detail: Some(detail.into()),
        })
    }

    /// Shorthand for a transport failure.
    pub fn unreachable() -> Self {
        Self::new().with_outcome(Outcome::Unreachable {
            reason: "connection refused".to_string(),
        })
    }

    /// All payloads submitted so far, oldest first.
    pub fn sent(&self) -> Vec<Payload> {
        self.sent.borrow().clone()
    }

    /// The most recently submitted payload, if any.
    pub fn last_sent(&self) -> Option<Payload> {
        self.sent.borrow().last().cloned()
    }
}

impl SubmitWaitlist for TestSubmitter {
    fn submit(&self, payload: &Payload) -> Outcome {
        self.sent.borrow_mut().push(payload.clone());
        self.outcome.clone()
    }
}
