//! Error types for the ring queue
//!
//! Only recoverable conditions live here. Broken preconditions (an invalid
//! capacity handed to `init`/`create`, an out-of-range slot index) panic at
//! the call site, and full/empty occupancy is reported through `bool` and
//! `Option` rather than through this type.

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ring queue
#[derive(Error, Debug)]
pub enum Error {
    /// Capacity is not a power of two greater than one
    #[error("Invalid capacity {capacity}: must be a power of two greater than 1")]
    InvalidCapacity {
        /// Rejected capacity
        capacity: usize,
    },

    /// Backing storage could not be allocated
    #[error("Memory allocation failed for {capacity} slots")]
    AllocationFailed {
        /// Requested number of slots
        capacity: usize,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML decoding errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error reports a value that would have been a fatal
    /// precondition on the asserting construction path
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::InvalidCapacity { .. })
    }

    /// Check if this error came from reading or decoding configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Io(_) | Error::Toml(_))
    }
}
