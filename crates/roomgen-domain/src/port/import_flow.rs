//! ImportFlow - Interactive selection of a family file

use std::path::PathBuf;

use crate::port::error::HostError;

/// What the user chose in the file prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportChoice {
    Path(PathBuf),
    Cancelled,
}

impl ImportChoice {
    /// An empty path counts as a cancellation
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str().is_empty() {
            ImportChoice::Cancelled
        } else {
            ImportChoice::Path(path)
        }
    }
}

/// Import Flow Trait
///
/// Capability port: blocks until the user picks a file or cancels.
/// There is no timeout.
pub trait ImportFlow {
    fn prompt(&mut self) -> Result<ImportChoice, HostError>;
}
