use crate::{
    Draft, Field, FieldErrors, FlagStore, InputKind, Notice, Outcome, Payload, SubmitWaitlist,
    apply, validate,
};

/// The currently shown screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Form,
    Success,
}

/// Error type for session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The injected flag store failed to read or write.
    #[error("flag store error: {0}")]
    Store(#[source] anyhow::Error),
}

/// The signup flow state machine.
///
/// Owns the draft, the per-field errors, the current [`View`], and the
/// injected [`FlagStore`]. All transitions of the flow go through here, so
/// the whole flow is testable without a rendering environment:
///
/// - `Landing -> Form` via [`Session::join_waitlist`]
/// - `Form -> Success` via an accepted submission
/// - `Success -> Landing` via [`Session::back_to_home`] (flag untouched)
///
/// Submission is split into [`Session::begin_submit`] and
/// [`Session::finish_submit`] so a caller may run the request on a worker
/// thread; [`Session::submit`] chains both for synchronous callers.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    view: View,
    draft: Draft,
    errors: FieldErrors,
    submitting: bool,
    notice: Option<Notice>,
}

impl<S: FlagStore> Session<S> {
    /// Create a session, reading the persisted flag once.
    ///
    /// If the flag is already set the session starts at [`View::Success`],
    /// bypassing landing and form entirely.
    pub fn new(store: S) -> Result<Self, SessionError> {
        let submitted = store.is_set().map_err(|e| SessionError::Store(e.into()))?;
        Ok(Self {
            store,
            view: if submitted { View::Success } else { View::Landing },
            draft: Draft::new(),
            errors: FieldErrors::new(),
            submitting: false,
            notice: None,
        })
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether a submission request is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The notice from the last failed submission, if not yet cleared.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Reveal the form from the landing screen.
    pub fn join_waitlist(&mut self) {
        if self.view == View::Landing {
            self.view = View::Form;
        }
    }

    /// Return from the success screen to the landing screen.
    ///
    /// Does not clear the persisted flag; a fresh session would still start
    /// at [`View::Success`].
    pub fn back_to_home(&mut self) {
        if self.view == View::Success {
            self.view = View::Landing;
        }
    }

    /// Apply one input event to the draft and clear that field's error.
    pub fn update(&mut self, field: Field, value: &str, kind: InputKind) {
        self.draft = apply(std::mem::take(&mut self.draft), field, value, kind);
        self.errors.clear(field);
    }

    /// Validate and, if the draft is clean, enter the submitting state.
    ///
    /// Returns the payload to deliver, or `None` when validation failed (the
    /// error map is populated and no request must be made) or when a request
    /// is already in flight.
    pub fn begin_submit(&mut self) -> Option<Payload> {
        if self.submitting {
            return None;
        }
        self.notice = None;
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(Payload::from(&self.draft))
    }

    /// Leave the submitting state and apply the outcome.
    ///
    /// `Accepted` persists the flag and moves to [`View::Success`]; the
    /// other outcomes record a [`Notice`] and leave the draft untouched on
    /// the form.
    pub fn finish_submit(&mut self, outcome: Outcome) -> Result<(), SessionError> {
        self.submitting = false;
        match outcome {
            Outcome::Accepted => {
                self.store
                    .set()
                    .map_err(|e| SessionError::Store(e.into()))?;
                log::info!("waitlist signup accepted");
                self.view = View::Success;
            }
            Outcome::Rejected { detail } => {
                log::error!(
                    "waitlist signup rejected: {}",
                    detail.as_deref().unwrap_or("Unknown error")
                );
                self.notice = Some(Notice::Rejected { detail });
            }
            Outcome::Unreachable { reason } => {
                log::error!("waitlist endpoint unreachable: {reason}");
                self.notice = Some(Notice::Network);
            }
        }
        Ok(())
    }

    /// Validate and submit in one step, blocking on the submitter.
    ///
    /// Returns `Ok(true)` when the signup was accepted.
    pub fn submit(&mut self, submitter: &impl SubmitWaitlist) -> Result<bool, SessionError> {
        let Some(payload) = self.begin_submit() else {
            return Ok(false);
        };
        let outcome = submitter.submit(&payload);
        let accepted = outcome == Outcome::Accepted;
        self.finish_submit(outcome)?;
        Ok(accepted)
    }
}
