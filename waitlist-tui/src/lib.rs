//! Terminal front end for the WHERE waitlist client.
//!
//! Renders the three screens of the signup flow (landing, form, success)
//! with ratatui and drives a [`waitlist_types::Session`]. The submission
//! request runs on a worker thread so the event loop stays responsive while
//! the "Submitting..." state is shown.

mod theme;
pub use theme::Theme;

mod form;
pub use form::FormScreen;

mod app;
pub use app::{TuiError, WaitlistTui};
