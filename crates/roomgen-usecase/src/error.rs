//! Run error taxonomy
//!
//! Every way a run can end early. `UserCancelled` is the only one that is
//! not a failure.

use roomgen_domain::{HostError, Outcome, TransitionError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Prompt dismissed, empty path, or the chosen file was refused
    #[error("{}", cancelled_message(.detail))]
    UserCancelled { detail: Option<String> },

    /// Import succeeded but the family still is not in the model
    #[error("Family \"{family_name}\" was not found in the imported file")]
    ResourceUnresolvable { family_name: String },

    /// Tag type found but could not be activated
    #[error("Could not activate tag type \"{tag_type}\": {message}")]
    ActivationFailure { tag_type: String, message: String },

    /// Room creation failed; the whole batch was rolled back
    #[error("Room creation failed, no rooms were created: {message}")]
    MaterializationFailure { message: String },

    /// Any other collaborator error
    #[error("{message}")]
    UnexpectedHostError { message: String },
}

fn cancelled_message(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!("{}: {}", crate::messages::IMPORT_CANCELLED, d),
        None => crate::messages::IMPORT_CANCELLED.to_string(),
    }
}

impl RunError {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, RunError::UserCancelled { .. })
    }

    /// Terminal outcome for this error
    pub fn to_outcome(&self) -> Outcome {
        if self.is_cancellation() {
            Outcome::Cancelled
        } else {
            Outcome::Failed {
                reason: self.to_string(),
            }
        }
    }
}

impl From<HostError> for RunError {
    fn from(err: HostError) -> Self {
        RunError::UnexpectedHostError {
            message: err.to_string(),
        }
    }
}

impl From<TransitionError> for RunError {
    fn from(err: TransitionError) -> Self {
        RunError::UnexpectedHostError {
            message: err.to_string(),
        }
    }
}
