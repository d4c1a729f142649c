//! Backing storage for a ring queue
//! - `Box<[T]>`: one block allocated and owned by the queue
//! - `&mut [T]`: a caller buffer borrowed for the queue's whole life

use crate::log_error;
use crate::types::{Error, Result};

mod sealed {
    /// Restricts `Storage` to the slice forms below
    pub trait Sealed {}
}

/// Contiguous slot storage a queue can be built over.
///
/// Sealed: the only implementors are the owned and borrowed slice forms, so
/// the queue type alone tells who releases the memory.
pub trait Storage<T>: sealed::Sealed {
    /// All physical slots
    fn slots(&self) -> &[T];

    /// All physical slots, mutably
    fn slots_mut(&mut self) -> &mut [T];
}

impl<T> sealed::Sealed for Box<[T]> {}

impl<T> Storage<T> for Box<[T]> {
    #[inline(always)]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> sealed::Sealed for &mut [T] {}

impl<T> Storage<T> for &mut [T] {
    #[inline(always)]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

/// Allocate `capacity` default-filled slots as a single block.
///
/// The reservation is fallible so an exhausted allocator surfaces as
/// `Error::AllocationFailed` instead of aborting the process.
pub(crate) fn allocate<T: Copy + Default>(capacity: usize) -> Result<Box<[T]>> {
    let mut slots = Vec::new();
    if slots.try_reserve_exact(capacity).is_err() {
        log_error!("Failed to allocate ring queue storage for {} slots", capacity);
        return Err(Error::AllocationFailed { capacity });
    }
    slots.resize(capacity, T::default());
    Ok(slots.into_boxed_slice())
}
