//! TransactionHost - The host's transaction primitive
//!
//! Transactions are flat: one open at a time. Every persisted mutation
//! happens between `begin` and `commit`; `rollback` discards all of them.
//! Prefer [`crate::service::transaction::in_transaction`] over calling
//! these directly.

use crate::port::error::HostError;

/// Transaction Host Trait
///
/// This is a PORT in hexagonal architecture.
pub trait TransactionHost {
    fn begin(&mut self, label: &str) -> Result<(), HostError>;

    fn commit(&mut self) -> Result<(), HostError>;

    fn rollback(&mut self) -> Result<(), HostError>;

    /// Label of the open transaction, if any
    fn open_transaction(&self) -> Option<&str>;
}
