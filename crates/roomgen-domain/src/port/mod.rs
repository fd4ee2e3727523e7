//! Port Traits - What the domain needs from the host
//!
//! These traits describe the host's building model, transaction primitive
//! and user-facing capabilities. Implementations live in adapters.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼──────────────────────────
//! trait TopologyProbe     │  InMemoryDocument
//!   fn circuits_for()     │  (host plugin bridge)
//! trait ImportFlow        │  DialoguerImportFlow
//!   fn prompt()           │  ScriptedImportFlow
//! ```

pub mod document;
pub mod error;
pub mod import_flow;
pub mod level_catalog;
pub mod notifier;
pub mod resource_store;
pub mod room_store;
pub mod topology_probe;
pub mod transaction_host;
