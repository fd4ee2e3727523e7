//! TopologyProbe - The host's boundary-detection engine, seen from outside
//!
//! How circuits are derived from walls and separation lines is owned by
//! the host. We only consume the resulting snapshot.

use crate::model::circuit::BoundaryCircuit;
use crate::model::level::LevelId;
use crate::port::error::HostError;

/// Topology Probe Trait
///
/// This is a PORT in hexagonal architecture.
pub trait TopologyProbe {
    /// Closed circuits on `level`, each flagged with whether a room
    /// already occupies it.
    ///
    /// `Ok(None)` means the host has no plan topology for the level
    /// (e.g. no closed boundaries at all). That is expected, not an error.
    fn circuits_for(&self, level: &LevelId) -> Result<Option<Vec<BoundaryCircuit>>, HostError>;
}
