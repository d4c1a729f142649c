//! Fixed-capacity ring queue
//! - Capacity must be a power of two greater than one
//! - Indices wrap by masking with `capacity - 1`
//! - One slot is always left free, so `capacity - 1` elements fit
//! - Single-threaded; mutation needs `&mut self`

use std::fmt;
use std::marker::PhantomData;

use super::storage::{allocate, Storage};
use crate::constants::MIN_CAPACITY;
use crate::core::config::QueueConfig;
use crate::types::{Error, Result};
use crate::{log_debug, log_trace};

/// Returns true if `capacity` can back a ring queue.
#[inline(always)]
pub fn is_valid_capacity(capacity: usize) -> bool {
    capacity >= MIN_CAPACITY && capacity.is_power_of_two()
}

#[inline(always)]
fn assert_valid_capacity(capacity: usize) {
    assert!(
        capacity >= MIN_CAPACITY,
        "ring queue capacity must be greater than 1, got {}",
        capacity
    );
    assert!(
        capacity.is_power_of_two(),
        "ring queue capacity must be a power of two, got {}",
        capacity
    );
}

/// Bounded FIFO over `Copy` element handles.
///
/// The queue copies handles in and out and never looks behind them: whatever
/// an element refers to stays owned by the caller.
pub struct RingQueue<T, S = Box<[T]>> {
    storage: S,
    mask: usize,
    head: usize, // oldest occupied slot
    tail: usize, // next slot to write
    _marker: PhantomData<T>,
}

/// Queue owning a single block it allocated itself
pub type OwnedRingQueue<T> = RingQueue<T, Box<[T]>>;

/// Queue over a caller buffer; dropping it leaves the buffer alone
pub type BorrowedRingQueue<'a, T> = RingQueue<T, &'a mut [T]>;

impl<'a, T: Copy> RingQueue<T, &'a mut [T]> {
    /// Bind a queue to a caller-owned buffer. Capacity is `buffer.len()`.
    ///
    /// # Panics
    ///
    /// If the buffer length is not a power of two greater than one.
    pub fn init(buffer: &'a mut [T]) -> Self {
        assert_valid_capacity(buffer.len());
        Self::bind(buffer)
    }

    /// Like [`init`](Self::init), but an unusable buffer length is returned
    /// as `Error::InvalidCapacity`.
    pub fn try_init(buffer: &'a mut [T]) -> Result<Self> {
        if !is_valid_capacity(buffer.len()) {
            return Err(Error::InvalidCapacity {
                capacity: buffer.len(),
            });
        }
        Ok(Self::bind(buffer))
    }
}

impl<T: Copy + Default> RingQueue<T, Box<[T]>> {
    /// Allocate a queue with `capacity` slots.
    ///
    /// # Panics
    ///
    /// If `capacity` is not a power of two greater than one.
    pub fn create(capacity: usize) -> Result<Self> {
        assert_valid_capacity(capacity);
        let storage = allocate(capacity)?;
        log_debug!("Created ring queue with {} slots", capacity);
        Ok(Self::bind(storage))
    }

    /// Allocate a queue sized by `config`, validating it first.
    pub fn from_config(config: &QueueConfig) -> Result<Self> {
        config.validate()?;
        Self::create(config.capacity)
    }
}

impl<T: Copy> RingQueue<T, Box<[T]>> {
    /// Release the queue and its storage block.
    ///
    /// Resident elements are dropped as plain values; nothing they refer to
    /// is touched.
    pub fn destroy(self) {
        log_debug!("Destroying ring queue with {} slots", self.capacity());
    }
}

impl<T: Copy, S: Storage<T>> RingQueue<T, S> {
    fn bind(storage: S) -> Self {
        let capacity = storage.slots().len();
        Self {
            storage,
            mask: capacity - 1,
            head: 0,
            tail: 0,
            _marker: PhantomData,
        }
    }

    /// Number of physical slots
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Number of resident elements, in `0..capacity()`
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask
    }

    /// Returns true if the queue holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns true if another enqueue would be rejected.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        (self.tail + 1) & self.mask == self.head
    }

    /// Returns true if the occupied region is one contiguous span,
    /// i.e. it does not run past the end of the buffer.
    #[inline(always)]
    pub fn is_linear(&self) -> bool {
        self.head <= self.tail
    }

    /// Returns true if physical slot `i` currently holds an element.
    ///
    /// # Panics
    ///
    /// If `i >= capacity()`.
    #[inline]
    pub fn is_active(&self, i: usize) -> bool {
        assert!(
            i < self.capacity(),
            "slot index {} out of range for capacity {}",
            i,
            self.capacity()
        );
        i.wrapping_sub(self.head) & self.mask < self.count()
    }

    /// Index of the oldest occupied slot
    #[inline(always)]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index of the next slot to be written
    #[inline(always)]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Oldest element, left in place.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.storage.slots()[self.head])
    }

    /// Value in physical slot `i` if that slot is active.
    ///
    /// # Panics
    ///
    /// If `i >= capacity()`.
    pub fn slot(&self, i: usize) -> Option<T> {
        if self.is_active(i) {
            Some(self.storage.slots()[i])
        } else {
            None
        }
    }

    /// Append an item. Returns false and leaves the queue unchanged if full.
    #[inline]
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            log_trace!("Ring queue full at {} elements, enqueue rejected", self.count());
            return false;
        }
        let tail = self.tail;
        self.storage.slots_mut()[tail] = item;
        self.tail = (tail + 1) & self.mask;
        true
    }

    /// Remove and return the oldest item. Returns None if empty.
    ///
    /// The vacated slot keeps its old value.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.storage.slots()[self.head];
        self.head = (self.head + 1) & self.mask;
        Some(item)
    }

    /// Logically empty the queue. Stored values are not touched.
    #[inline]
    pub fn clear(&mut self) {
        self.head = self.tail;
    }

    /// Copy resident elements oldest-first into `dest`.
    ///
    /// Copies `min(count(), dest.len())` elements and returns that number.
    pub fn to_array(&self, dest: &mut [T]) -> usize {
        let to_copy = self.count().min(dest.len());
        if to_copy == 0 {
            return 0;
        }

        let data = self.storage.slots();
        let head = self.head;
        if self.is_linear() {
            dest[..to_copy].copy_from_slice(&data[head..head + to_copy]);
        } else {
            let head_side_count = self.capacity() - head;
            let first_copy = to_copy.min(head_side_count);
            dest[..first_copy].copy_from_slice(&data[head..head + first_copy]);

            if to_copy > first_copy {
                let remaining = to_copy - first_copy;
                dest[first_copy..to_copy].copy_from_slice(&data[..remaining]);
            }
        }

        to_copy
    }

    /// Occupied region as two physical spans, oldest first.
    /// The second span is empty unless the region wraps.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let data = self.storage.slots();
        if self.is_linear() {
            (&data[self.head..self.tail], &data[..0])
        } else {
            (&data[self.head..], &data[..self.tail])
        }
    }

    /// Iterate resident elements oldest-first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            data: self.storage.slots(),
            mask: self.mask,
            pos: self.head,
            remaining: self.count(),
        }
    }

    /// Give the storage back, discarding queue state.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<T: Copy + fmt::Debug, S: Storage<T>> fmt::Debug for RingQueue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Oldest-first iterator over a queue's resident elements
pub struct Iter<'a, T> {
    data: &'a [T],
    mask: usize,
    pos: usize,
    remaining: usize,
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.data[self.pos];
        self.pos = (self.pos + 1) & self.mask;
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Copy, S: Storage<T>> IntoIterator for &'a RingQueue<T, S> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
