//! Roomgen CLI library
//!
//! Command handlers for the `create-rooms` binary.

pub mod commands;
