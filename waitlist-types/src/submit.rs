use std::fmt;

use serde::Serialize;

use crate::Draft;

/// The outbound submission body.
///
/// Exactly the seven form values, serialized with the wire key names the
/// endpoint expects (`meetupPlaces` and friends). No client-side IDs or
/// timestamps are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub name: String,
    pub email: String,
    pub profession: String,
    pub meetup_places: Vec<String>,
    pub frequency: String,
    pub interests: String,
    pub reason: String,
}

impl From<&Draft> for Payload {
    fn from(draft: &Draft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            profession: draft.profession.clone(),
            meetup_places: draft.meetup_places.clone(),
            frequency: draft.frequency.clone(),
            interests: draft.interests.clone(),
            reason: draft.reason.clone(),
        }
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The endpoint acknowledged the signup.
    Accepted,
    /// The endpoint responded but rejected the signup; `detail` is the
    /// server-supplied explanation when the body carried one.
    Rejected { detail: Option<String> },
    /// The request never completed (connectivity/transport failure).
    Unreachable { reason: String },
}

/// User-facing notification for a failed submission.
///
/// Returned to the presentation layer instead of raising a blocking dialog,
/// so rendering is the caller's choice and tests can assert on the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The endpoint rejected the signup.
    Rejected { detail: Option<String> },
    /// The endpoint could not be reached.
    Network,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Rejected { detail } => write!(
                f,
                "Failed to join waitlist: {}",
                detail.as_deref().unwrap_or("Unknown error")
            ),
            Notice::Network => write!(f, "Network error. Please try again."),
        }
    }
}

/// A transport that can deliver one waitlist signup.
///
/// Implementations report all three outcomes through [`Outcome`]; transport
/// errors are data, not `Err`. There is no retry, timeout, or cancellation
/// beyond what the underlying transport defaults to.
pub trait SubmitWaitlist {
    /// Deliver the payload, blocking until the attempt resolves.
    fn submit(&self, payload: &Payload) -> Outcome;
}
