//! Document - The explicitly passed model context
//!
//! One host document exposes every model port. Components take
//! `&mut impl Document` (or the narrower port they need) instead of
//! reaching for a global.

use crate::port::level_catalog::LevelCatalog;
use crate::port::resource_store::ResourceStore;
use crate::port::room_store::RoomStore;
use crate::port::topology_probe::TopologyProbe;
use crate::port::transaction_host::TransactionHost;

/// Everything the orchestrator needs from a host model
pub trait Document:
    LevelCatalog + TopologyProbe + ResourceStore + RoomStore + TransactionHost
{
}

impl<T> Document for T where
    T: LevelCatalog + TopologyProbe + ResourceStore + RoomStore + TransactionHost
{
}
