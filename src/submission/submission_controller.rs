use crate::censoredstring::CensoredString;
use crate::form::{
    validate, FieldName, FormFields, FormState, SubmissionStatus, ValidationError,
    ValidationResult,
};
use crate::submission::contact_endpoint::{ContactEndpoint, EndpointResponse};
use crate::submission::submission_error::{SubmissionError, TransportError};
use tracing::Instrument;
use uuid::Uuid;

/// Result of trying to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionAttempt {
    /// A submission is already in flight.
    Ignored,
    /// Local validation failed, nothing is sent.
    Rejected(ValidationError),
    /// Status is now `Submitting`; the payload must be posted exactly once.
    Send(FormFields),
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Ignored,
    Rejected(ValidationError),
    Succeeded,
    Failed(SubmissionError),
}

/// Drives one form session: validation, the single outbound call and the resulting status.
pub struct SubmissionController<E> {
    state: FormState,
    endpoint: E,
}

impl<E: ContactEndpoint> SubmissionController<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            state: FormState::new(),
            endpoint,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.state.update_field(field, value);
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// First half of [`SubmissionController::submit`], for callers that drive the request
    /// themselves and keep processing events while it is in flight.
    pub fn begin_submission(&mut self) -> SubmissionAttempt {
        if self.state.status() == SubmissionStatus::Submitting {
            tracing::debug!("Submission already in flight, ignoring submit.");
            return SubmissionAttempt::Ignored;
        }
        match validate(self.state.fields()) {
            ValidationResult::Invalid(error) => {
                // Status is left untouched, even if it was `Error` or `Success`
                tracing::info!(
                    reason = %error,
                    status = %self.state.status(),
                    "Contact form failed validation."
                );
                self.state.set_error_message(error.to_string());
                SubmissionAttempt::Rejected(error)
            }
            ValidationResult::Valid => {
                self.state.clear_error_message();
                self.state.set_status(SubmissionStatus::Submitting);
                SubmissionAttempt::Send(self.state.fields().clone())
            }
        }
    }

    /// Second half of [`SubmissionController::submit`]. A result arriving when no submission is
    /// in flight is discarded.
    pub fn complete_submission(
        &mut self,
        result: Result<EndpointResponse, TransportError>,
    ) -> SubmitOutcome {
        if self.state.status() != SubmissionStatus::Submitting {
            tracing::warn!(
                status = %self.state.status(),
                "Discarding submission result, no submission in flight."
            );
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(response) if response.is_success() => {
                tracing::info!(status = response.status, "Contact form submitted.");
                self.state.reset();
                self.state.set_status(SubmissionStatus::Success);
                SubmitOutcome::Succeeded
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status,
                    "Contact endpoint rejected the submission."
                );
                self.fail(SubmissionError::ServerRejection {
                    status: response.status,
                })
            }
            Err(error) => {
                tracing::error!(
                    error.cause_chain = ?error,
                    error.message = %error,
                    "Failed to reach contact endpoint."
                );
                self.fail(SubmissionError::Transport(error))
            }
        }
    }

    fn fail(&mut self, error: SubmissionError) -> SubmitOutcome {
        self.state.set_status(SubmissionStatus::Error);
        self.state.set_error_message(error.to_string());
        SubmitOutcome::Failed(error)
    }

    /// Validates, posts the current fields once and records the outcome.
    /// No retry, no cancellation.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let span = tracing::info_span!(
            "Submitting contact form",
            submission_id = %Uuid::now_v7(),
            contact_email = %CensoredString::email(&self.state.fields().email),
        );
        async {
            let payload = match self.begin_submission() {
                SubmissionAttempt::Ignored => return SubmitOutcome::Ignored,
                SubmissionAttempt::Rejected(error) => return SubmitOutcome::Rejected(error),
                SubmissionAttempt::Send(payload) => payload,
            };
            let result = self.endpoint.post(&payload).await;
            self.complete_submission(result)
        }
        .instrument(span)
        .await
    }
}
