//! Wire and outcome types shared by every entity screen

pub mod envelope;
pub mod outcome;

pub use envelope::{ApiEnvelope, error_message, error_result};
pub use outcome::{GENERIC_FAILURE_MESSAGE, Outcome};
