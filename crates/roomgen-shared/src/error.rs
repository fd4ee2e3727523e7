//! Error types for Roomgen configuration

use thiserror::Error;

/// Error thrown when a category key is not known
#[derive(Debug, Error)]
#[error("Unknown resource category '{key}'. Known categories: {}", known.join(", "))]
pub struct UnknownCategoryError {
    pub key: String,
    pub known: Vec<String>,
}

/// General Roomgen error type
#[derive(Debug, Error)]
pub enum RoomgenError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategoryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RoomgenError>;
