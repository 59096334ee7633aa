use crate::form::form_fields::{FieldName, FormFields};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        };
        f.write_str(status)
    }
}

/// Field values, submission status and the message shown to the user.
///
/// The status and message are only written by [`FormState::update_field`], [`FormState::reset`]
/// and the submission controller, so they can't drift apart through direct field access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: FormFields,
    status: SubmissionStatus,
    error_message: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Empty when there is nothing to show.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Records the edit and starts over from a clean `Idle`, unless a submission is in flight.
    /// Edits are not rejected while `Submitting`: disabling inputs is left to the presenter.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.error_message.clear();
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.status = SubmissionStatus::Idle;
        self.error_message.clear();
    }

    pub(crate) fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }

    pub(crate) fn set_error_message(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
    }

    pub(crate) fn clear_error_message(&mut self) {
        self.error_message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{FormState, SubmissionStatus};
    use crate::form::FieldName;

    #[test]
    fn new_state_is_idle_and_empty() {
        let state = FormState::new();
        assert_eq!(SubmissionStatus::Idle, state.status());
        assert!(state.fields().is_empty());
        assert!(state.error_message().is_empty());
    }

    #[test]
    fn update_field_sets_value_and_clears_error() {
        let mut state = FormState::new();
        state.set_error_message("Please enter a valid email address.");
        state.update_field(FieldName::Email, "jo@x.com");
        assert_eq!("jo@x.com", state.fields().email);
        assert!(state.error_message().is_empty());
    }

    #[test]
    fn update_field_returns_to_idle_after_error_or_success() {
        for status in [SubmissionStatus::Error, SubmissionStatus::Success] {
            let mut state = FormState::new();
            state.set_status(status);
            state.update_field(FieldName::Name, "New Name");
            assert_eq!(SubmissionStatus::Idle, state.status());
        }
    }

    #[test]
    fn update_field_while_submitting_is_recorded_without_status_change() {
        let mut state = FormState::new();
        state.set_status(SubmissionStatus::Submitting);
        state.update_field(FieldName::Phone, "123");
        assert_eq!("123", state.fields().phone);
        assert_eq!(SubmissionStatus::Submitting, state.status());
    }

    #[test]
    fn repeated_update_field_is_idempotent() {
        let mut state = FormState::new();
        state.update_field(FieldName::Message, "hi");
        let once = state.clone();
        for _ in 0..3 {
            state.set_error_message("All fields must be filled out to submit the form.");
            state.update_field(FieldName::Message, "hi");
            assert_eq!(once, state);
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = FormState::new();
        for field in FieldName::ALL {
            state.update_field(field, "x");
        }
        state.set_status(SubmissionStatus::Error);
        state.set_error_message("Submission failed. Server returned an error.");
        state.reset();
        assert_eq!(FormState::new(), state);
    }
}
