//! Error types for Meridian Grid core.

/// A specialized Result type for Meridian Grid core operations.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or already disconnected connection ID")]
    InvalidConnection,
}
