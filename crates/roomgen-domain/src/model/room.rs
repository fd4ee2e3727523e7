//! Room - A persisted enclosed space
//!
//! Bound to exactly one level and one circuit at creation. After that this
//! crate never touches it again.

use super::circuit::CircuitId;
use super::level::LevelId;

/// Host-assigned identifier of a Room
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RoomId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    level_id: LevelId,
    circuit_id: CircuitId,
    /// Host-assigned room number
    number: String,
}

impl Room {
    pub fn new(
        id: RoomId,
        level_id: LevelId,
        circuit_id: CircuitId,
        number: impl Into<String>,
    ) -> Self {
        Self {
            id,
            level_id,
            circuit_id,
            number: number.into(),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn level_id(&self) -> &LevelId {
        &self.level_id
    }

    pub fn circuit_id(&self) -> &CircuitId {
        &self.circuit_id
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}
