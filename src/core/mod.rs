//! Core system foundations
//!
//! Configuration loading and logging shared by the queue.

pub mod config;
pub mod logging;

// Re-export commonly used items
pub use config::{load_config, load_config_or_default, QueueConfig};
pub use logging::init_tracing;
