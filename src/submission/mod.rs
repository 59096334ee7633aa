mod contact_endpoint;
mod submission_controller;
mod submission_error;

pub use contact_endpoint::ContactEndpoint;
pub use contact_endpoint::EndpointResponse;
pub use contact_endpoint::HttpEndpoint;
pub use submission_controller::SubmissionAttempt;
pub use submission_controller::SubmissionController;
pub use submission_controller::SubmitOutcome;
pub use submission_error::SubmissionError;
pub use submission_error::TransportError;
