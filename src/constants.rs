//! Global constants used throughout the ring-queue crate
//!
//! Compile-time constants shared by the queue, its configuration and tests.

/// Capacity used when no configuration is supplied.
///
/// Eight slots, seven of them usable.
pub const DEFAULT_CAPACITY: usize = 8;

/// Smallest capacity a queue can be built with.
///
/// One slot is always left empty to tell full from empty, so a
/// capacity of two holds a single element.
pub const MIN_CAPACITY: usize = 2;

/// Environment variable consulted for the tracing filter
pub const LOG_ENV_VAR: &str = "RUST_LOG";
