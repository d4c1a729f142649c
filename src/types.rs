//! Type definitions for the ring-queue crate
//!
//! This module contains the shared error and result types.

/// Crate-wide error types
pub mod error;

pub use error::{Error, Result};
