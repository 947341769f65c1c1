use thiserror::Error;

/// Error type shared by the invitation crates
#[derive(Error, Debug)]
pub enum InviteError {
    /// Unknown filter name
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Raw filter index outside the known range
    #[error("Invalid filter index: {0}")]
    InvalidFilterIndex(usize),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

/// Shared result type
pub type InviteResult<T> = Result<T, InviteError>;
