//! Error types for the assistant core.

use roost_core::error::RoostError;

/// Errors from the intent classification step.
///
/// Both variants degrade to the same canned fallback reply at the
/// assistant facade; neither ever surfaces as an HTTP error.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Classifier output unparsable: {0}")]
    UnparsableOutput(String),
    #[error("Classifier upstream failure: {0}")]
    Upstream(String),
}

/// Errors from intent dispatch.
///
/// Only listing-store failures escape the dispatcher: there is no
/// conversational channel that can absorb them. Reminder-sink failures
/// are converted to an apology envelope inside the handler.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Listing store failure: {0}")]
    ListingStore(String),
}

impl From<DispatchError> for AssistError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::ListingStore(msg) => AssistError::ListingStore(msg),
        }
    }
}

/// Errors surfaced by the assistant facade.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("Listing store failure: {0}")]
    ListingStore(String),
}

impl From<RoostError> for DispatchError {
    fn from(err: RoostError) -> Self {
        DispatchError::ListingStore(err.to_string())
    }
}
