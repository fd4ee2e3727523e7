//! # Roomgen Domain Layer
//!
//! Pure room/tag orchestration logic over an abstract building model.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/   - Level, BoundaryCircuit, Room, TagResourceType   ││
//! │  │  port/    - Traits the host must provide (not impls)        ││
//! │  │  service/ - Tag resolution, activation, RoomMaterializer    ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host owns geometry (boundary detection), persistence and the
//! transaction primitive. This crate only decides *what* to mutate and
//! *when*; it never knows how a circuit was derived from walls.

pub mod model;
pub mod port;
pub mod service;

// Re-export commonly used types
pub use model::{
    circuit::{BoundaryCircuit, CircuitId},
    level::{Level, LevelId},
    outcome::Outcome,
    room::{Room, RoomId},
    tag_type::{ActiveTagType, ResourceCategory, TagResourceType, TagTypeId},
};

pub use port::{
    document::Document,
    error::HostError,
    import_flow::{ImportChoice, ImportFlow},
    level_catalog::LevelCatalog,
    notifier::Notifier,
    resource_store::{ImportResult, ResourceStore},
    room_store::RoomStore,
    topology_probe::TopologyProbe,
    transaction_host::TransactionHost,
};

pub use service::{
    activation::activate_tag_type,
    materializer::{LevelReport, LevelStatus, MaterializationReport, RoomMaterializer},
    tag_resolution::{
        ResolutionEvent, ResolutionFailure, ResolutionState, TagResourceResolver, TagTypeQuery,
        TransitionError,
    },
    transaction::{in_transaction, TransactionError},
};
