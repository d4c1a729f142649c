//! # Ring Queue
//!
//! Fixed-capacity circular FIFO over copyable element handles.
//! Capacity is a power of two so indices wrap with a mask, one slot stays
//! free to tell full from empty, and `to_array` gathers a wrapped buffer
//! back into oldest-first order.
#![warn(missing_docs)]

/// Core foundations: configuration and logging
pub mod core;

/// Type definitions shared across the crate
pub mod types;

/// System constants
pub mod constants;

/// Data structures
pub mod structures;

// Re-export commonly used items for convenience
pub use crate::core::{init_tracing, load_config, load_config_or_default, QueueConfig};
pub use structures::{BorrowedRingQueue, OwnedRingQueue, QueueSnapshot, RingQueue};
pub use types::{Error, Result};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
