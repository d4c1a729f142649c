//! Ring queue

/// Queue implementation
pub mod ring_queue;
/// Owned and borrowed backing storage
pub mod storage;
/// Serializable state capture
pub mod snapshot;


// Export the main types
pub use ring_queue::{is_valid_capacity, BorrowedRingQueue, Iter, OwnedRingQueue, RingQueue};
pub use snapshot::QueueSnapshot;
pub use storage::Storage;
