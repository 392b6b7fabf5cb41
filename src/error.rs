use thiserror::Error;

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Errors surfaced when loading or saving a configuration package.
///
/// Allocation and geometry have no error type: they never fail on
/// well-shaped input.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("malformed package text: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("package root must be a JSON object")]
    NotAnObject,
    #[error("invalid package: {0}")]
    InvalidPackage(String),
    #[error("package field has unexpected shape: {0}")]
    Schema(#[source] serde_json::Error),
    #[error("failed to serialize package: {0}")]
    Serialize(#[source] serde_json::Error),
}
