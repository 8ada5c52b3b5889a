//! Core types for the WHERE waitlist client.
//!
//! This crate provides the presentation-agnostic pieces of the signup flow:
//! - `Draft` and `apply` - The form data and its pure reducer
//! - `Field` and `FieldErrors` - Field identifiers and per-field validation errors
//! - `validate` - The synchronous draft validator
//! - `Payload`, `Outcome`, `Notice` and the `SubmitWaitlist` trait - Submission
//! - `FlagStore` - The injected "already submitted" persistence capability
//! - `Session` - The view state machine tying everything together

mod field;
pub use field::{Field, InputKind};

mod draft;
pub use draft::{Draft, FREQUENCIES, MEETUP_PLACES, apply};

mod errors;
pub use errors::FieldErrors;

mod validate;
pub use validate::validate;

mod submit;
pub use submit::{Notice, Outcome, Payload, SubmitWaitlist};

mod store;
pub use store::{FlagStore, InMemoryFlag};

mod session;
pub use session::{Session, SessionError, View};

// Test submitter for exercising the session without a network.
mod test_submit;
pub use test_submit::TestSubmitter;
