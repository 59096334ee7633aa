pub mod censoredstring;
pub mod configuration;
pub mod form;
pub mod presenter;
pub mod submission;
pub mod telemetry;
