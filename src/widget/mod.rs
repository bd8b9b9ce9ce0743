//! The landing page's waitlist form, driven against the `/api/waitlist`
//! endpoint.
mod api;
mod form;

pub use api::{JoinError, WaitlistApi};
pub use form::{FormView, SubmitOutcome, WaitlistForm};
