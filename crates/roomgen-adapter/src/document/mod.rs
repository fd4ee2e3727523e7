//! Host document adapters
//!
//! These implement every model port from roomgen-domain.

pub mod in_memory;
