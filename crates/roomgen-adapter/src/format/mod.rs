//! File formats understood by the in-memory host

pub mod family_file;
pub mod model_file;
