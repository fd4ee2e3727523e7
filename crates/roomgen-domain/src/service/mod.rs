//! Domain Services - Stateless logic over the ports

pub mod activation;
pub mod materializer;
pub mod tag_resolution;
pub mod transaction;
