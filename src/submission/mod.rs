//! Casualty registration: form validation, the simulated submit and the
//! completion step.

pub mod form;
pub mod registration;
pub mod task;

pub use form::{CasualtyForm, ValidatedCasualty, ValidationError};
pub use registration::{alert_for, register};
pub use task::{submit, SubmissionHandle, SubmissionOutcome, DEFAULT_SUBMISSION_DELAY};
