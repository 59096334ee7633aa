/// The request never produced an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to send contact form request")]
    Request(#[from] reqwest::Error),
    #[error("contact endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Failures after validation passed. `Display` is the text shown to the user;
/// details stay in `source()` and in the logs.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission failed. Server returned an error.")]
    ServerRejection { status: u16 },
    #[error("Network error: Could not connect to the server.")]
    Transport(#[source] TransportError),
}

#[cfg(test)]
mod tests {
    use super::{SubmissionError, TransportError};
    use std::error::Error;

    #[test]
    fn server_rejection_hides_status_from_message() {
        let error = SubmissionError::ServerRejection { status: 503 };
        assert_eq!("Submission failed. Server returned an error.", error.to_string());
    }

    #[test]
    fn transport_detail_is_only_in_source() {
        let error = SubmissionError::Transport(TransportError::Unreachable(
            "connection refused".to_owned(),
        ));
        assert_eq!("Network error: Could not connect to the server.", error.to_string());
        let source = error.source().unwrap().to_string();
        assert!(source.contains("connection refused"));
    }
}
