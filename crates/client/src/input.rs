//! The single-field "add a duty" form.

use duties_core::duty::{validate_name, DutyName, NameError};

/// Why a form or inline edit refused to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A previous submission is still in flight; the control is disabled.
    #[error("a submission is already in progress")]
    Busy,

    /// There is no row in edit mode.
    #[error("no duty is being edited")]
    NotEditing,

    /// The value failed the name rule.
    #[error("{}", .0.client_message())]
    Invalid(#[from] NameError),
}

/// State of the new-duty input.
///
/// Submission is two-phase: [`begin_submit`](Self::begin_submit) validates
/// and disables the control, [`finish_submit`](Self::finish_submit)
/// re-enables it once the request has resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DutyInputForm {
    value: String,
    submitting: bool,
    error: Option<&'static str>,
}

impl DutyInputForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Validation message to show under the field, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Whether the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replace the field content as the user types. Clears any stale
    /// validation message.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = None;
    }

    /// Focus left the field: whitespace-only content is discarded.
    pub fn blur(&mut self) {
        if self.value.trim().is_empty() {
            self.value.clear();
            self.error = None;
        }
    }

    /// Validate the current value and lock the form for submission.
    ///
    /// Returns the trimmed name to send. The field keeps its content until
    /// [`finish_submit`](Self::finish_submit) reports success.
    pub fn begin_submit(&mut self) -> Result<DutyName, InputError> {
        if self.submitting {
            return Err(InputError::Busy);
        }
        let name = validate_name(&self.value).map_err(|e| {
            self.error = Some(e.client_message());
            InputError::from(e)
        })?;
        self.error = None;
        self.submitting = true;
        Ok(name)
    }

    /// The create request resolved. The field is cleared only on success.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.value.clear();
        }
    }
}
