//! Submission handling
//!
//! Validates submitted form data against the schema document and, when it
//! passes, extracts typed values for display.

pub mod extract;
pub mod submission;
pub mod validator;

pub use extract::{FormData, SECRET_FIELDS, extract_form_data};
pub use submission::Submission;
pub use validator::{SubmissionValidator, ValidationErrors};

use serde_json::{Value, json};

/// Result of processing one submission
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SubmitOutcome {
    Accepted(FormData),
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    /// JSON view of the outcome; accepted data omits secret fields
    #[must_use]
    #[inline]
    pub fn to_display_json(&self) -> Value {
        match *self {
            Self::Accepted(ref data) => json!({
                "status": "accepted",
                "data": data.for_display(),
            }),
            Self::Rejected(ref errors) => json!({
                "status": "rejected",
                "errors": errors,
            }),
        }
    }
}

/// Validate a submission and extract its typed data when it passes
#[must_use]
#[inline]
pub fn submit(validator: &SubmissionValidator<'_>, submission: &Submission) -> SubmitOutcome {
    match validator.validate(submission) {
        Ok(()) => SubmitOutcome::Accepted(extract_form_data(
            validator.documents().schema(),
            submission,
        )),
        Err(errors) => SubmitOutcome::Rejected(errors),
    }
}
