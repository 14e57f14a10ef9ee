//! Search form parameters

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Parameters collected by the search screen and forwarded through the flow.
///
/// This is a short-lived context object: created on submit, owned by the flow
/// transition that carries it, dropped when the session leaves the flow. The
/// dates are free-form strings and `check_out` is deliberately not checked to
/// fall after `check_in`; `guests` is a numeric string the form hints at 1-10
/// but nothing enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(min = 1))]
    pub destination: String,
    #[validate(length(min = 1))]
    pub check_in: String,
    #[validate(length(min = 1))]
    pub check_out: String,
    #[serde(default = "default_guests")]
    pub guests: String,
}

fn default_guests() -> String {
    "2".to_string()
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            destination: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: default_guests(),
        }
    }
}

impl SearchParams {
    pub fn new(
        destination: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
        guests: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            check_in: check_in.into(),
            check_out: check_out.into(),
            guests: guests.into(),
        }
    }

    /// Submission guard: destination and both dates must be non-empty.
    ///
    /// A failed guard is a silent refusal to transition, never a user-visible
    /// message.
    pub fn ensure_submittable(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))
    }
}
