//! Outcome - How a run ended, as reported to the host

/// Terminal result of one orchestration run
///
/// `Cancelled` is neutral: the user walked away from the import prompt.
/// It is never reported as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Tag type ready and every unoccupied circuit now has a room
    Succeeded { rooms_created: usize },
    /// User dismissed the import prompt or picked an invalid file
    Cancelled,
    /// Terminal failure with a user-facing reason
    Failed { reason: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    /// Rooms created by the run (zero unless it succeeded)
    pub fn rooms_created(&self) -> usize {
        match self {
            Outcome::Succeeded { rooms_created } => *rooms_created,
            _ => 0,
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Succeeded { rooms_created } => {
                write!(f, "Succeeded ({} rooms created)", rooms_created)
            }
            Outcome::Cancelled => write!(f, "Cancelled"),
            Outcome::Failed { reason } => write!(f, "Failed: {}", reason),
        }
    }
}
