//! RoomStore - Creation of Room entities

use crate::model::circuit::BoundaryCircuit;
use crate::model::level::Level;
use crate::model::room::Room;
use crate::port::error::HostError;

/// Room Store Trait
///
/// This is a PORT in hexagonal architecture.
pub trait RoomStore {
    /// Create a room bound to `level` and `circuit`.
    ///
    /// Mutation: requires an open transaction. The host must refuse a
    /// second room in an occupied circuit with [`HostError::CircuitOccupied`].
    fn create_room(&mut self, level: &Level, circuit: &BoundaryCircuit) -> Result<Room, HostError>;

    /// Rooms currently placed on a level
    fn rooms_on(&self, level: &Level) -> Result<Vec<Room>, HostError>;
}
