//! Errors surfaced by host collaborators

/// Errors that can occur while talking to the host model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A mutation was attempted with no open transaction
    NoOpenTransaction { operation: String },
    /// `begin` while another transaction is still open
    TransactionAlreadyOpen { open: String, requested: String },
    /// Referenced element does not exist in the model
    ElementNotFound { id: String },
    /// Circuit already holds a room
    CircuitOccupied { level: String, circuit: String },
    /// Activation ran but the tag type is still inactive
    ActivationNotApplied { id: String },
    /// The host rejected or failed an operation
    Rejected { operation: String, message: String },
}

impl core::fmt::Display for HostError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HostError::NoOpenTransaction { operation } => {
                write!(f, "Cannot {} outside of a transaction", operation)
            }
            HostError::TransactionAlreadyOpen { open, requested } => {
                write!(
                    f,
                    "Cannot start transaction '{}' while '{}' is open",
                    requested, open
                )
            }
            HostError::ElementNotFound { id } => write!(f, "Element not found: {}", id),
            HostError::CircuitOccupied { level, circuit } => {
                write!(
                    f,
                    "Circuit {} on level {} already contains a room",
                    circuit, level
                )
            }
            HostError::ActivationNotApplied { id } => {
                write!(f, "Tag type {} is still inactive after activation", id)
            }
            HostError::Rejected { operation, message } => {
                write!(f, "{} failed: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for HostError {}
