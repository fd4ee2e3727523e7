//! BoundaryCircuit - A closed loop of boundary geometry on a level
//!
//! Circuits come out of the host's topology snapshot and are recomputed on
//! every invocation. This crate never derives them, it only reads the
//! `occupied` flag the host computed.

use super::level::LevelId;

/// Identifier of a circuit within one level's topology snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CircuitId(String);

impl CircuitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CircuitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate enclosed region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryCircuit {
    id: CircuitId,
    level_id: LevelId,
    /// A room already exists for this circuit
    occupied: bool,
}

impl BoundaryCircuit {
    /// Create an unoccupied circuit
    pub fn new(id: CircuitId, level_id: LevelId) -> Self {
        Self {
            id,
            level_id,
            occupied: false,
        }
    }

    /// Builder: mark the circuit as already holding a room
    pub fn occupied(mut self) -> Self {
        self.occupied = true;
        self
    }

    pub fn id(&self) -> &CircuitId {
        &self.id
    }

    pub fn level_id(&self) -> &LevelId {
        &self.level_id
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}
