/// Core reusable data structures
pub mod ring_queue;

// Export the main types
pub use ring_queue::{BorrowedRingQueue, OwnedRingQueue, QueueSnapshot, RingQueue};
