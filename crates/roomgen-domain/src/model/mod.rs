//! Domain Models - The vocabulary of the building model
//!
//! Names follow how the host talks about its model: levels carry
//! boundary circuits, circuits receive rooms, rooms get tagged.

pub mod circuit;
pub mod level;
pub mod outcome;
pub mod room;
pub mod tag_type;
