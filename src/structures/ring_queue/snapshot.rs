//! Point-in-time view of a queue for display consumers

use serde::Serialize;

use super::ring_queue::RingQueue;
use super::storage::Storage;

/// Everything a renderer polls once per frame, captured in one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot<T> {
    /// Number of physical slots
    pub capacity: usize,
    /// Number of resident elements
    pub count: usize,
    /// Index of the oldest occupied slot
    pub head: usize,
    /// Index of the next slot to be written
    pub tail: usize,
    /// Occupied region does not wrap
    pub linear: bool,
    /// Queue is full
    pub full: bool,
    /// Queue is empty
    pub empty: bool,
    /// Physical slots; `Some` only where the slot is active
    pub slots: Vec<Option<T>>,
    /// Resident elements oldest-first
    pub linearized: Vec<T>,
}

impl<T: Copy, S: Storage<T>> RingQueue<T, S> {
    /// Capture the queue's observable state.
    pub fn snapshot(&self) -> QueueSnapshot<T> {
        QueueSnapshot {
            capacity: self.capacity(),
            count: self.count(),
            head: self.head(),
            tail: self.tail(),
            linear: self.is_linear(),
            full: self.is_full(),
            empty: self.is_empty(),
            slots: (0..self.capacity()).map(|i| self.slot(i)).collect(),
            linearized: self.iter().collect(),
        }
    }
}
