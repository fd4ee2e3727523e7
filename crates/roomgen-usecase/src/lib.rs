//! # Roomgen Use Case Layer
//!
//! Application-specific business rules.
//! This layer sequences the domain services under explicit transaction
//! boundaries and turns every failure into exactly one user-facing outcome.

pub use roomgen_domain;

pub mod create_rooms;
pub mod error;
pub mod messages;

pub use create_rooms::{CreateRoomsUseCase, RunSettings};
pub use error::RunError;
