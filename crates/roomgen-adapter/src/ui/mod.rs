//! User-facing capability adapters

pub mod import_flow;
pub mod notifier;
