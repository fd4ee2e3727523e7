//! # Roomgen Adapter Layer
//!
//! Implementations of the domain ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `document/` - In-memory host document (model store, topology, transactions)
//! - `format/`   - JSON model and family file formats
//! - `ui/`       - Import prompts and notifiers

pub mod document;
pub mod error;
pub mod format;
pub mod ui;

pub use document::in_memory::{Fault, InMemoryDocument};
pub use error::AdapterError;
pub use format::family_file::FamilyFile;
pub use format::model_file::ModelFile;
pub use ui::import_flow::{DialoguerImportFlow, ScriptedImportFlow};
pub use ui::notifier::{ConsoleNotifier, Notification, RecordingNotifier};
