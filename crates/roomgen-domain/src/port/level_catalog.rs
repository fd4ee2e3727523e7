//! LevelCatalog - Enumerates the levels of the model

use crate::model::level::Level;
use crate::port::error::HostError;

/// Level Catalog Trait
///
/// This is a PORT in hexagonal architecture.
/// Read-only: listing levels never mutates the model.
pub trait LevelCatalog {
    /// All levels currently in the model, in host-defined order.
    /// An empty list is valid.
    fn list_levels(&self) -> Result<Vec<Level>, HostError>;
}
