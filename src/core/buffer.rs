use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use crate::core::error::{LineError, LineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    pub len: usize,
    pub capacity: usize,
}

struct Inner<T> {
    queue: VecDeque<T>,
    canceled: bool,
}

/// Fixed-capacity FIFO with blocking semantics on both ends.
///
/// `put` blocks while full, `get` blocks while empty. One mutex guards the
/// queue; the condvar waits release it while suspended and the condition is
/// re-checked in a loop after every wake (spurious wakeups, racing waiters).
/// `cancel` wakes all blocked callers and makes further blocking calls fail
/// fast; a canceled buffer is abandoned, never reset.
pub struct BoundedBuffer<T> {
    inner: Mutex<Inner<T>>,
    capacity: usize,
    not_full: Condvar,
    not_empty: Condvar,
}

impl<T> BoundedBuffer<T> {
    /// Capacity must be >= 1. The boundary (config validation) rejects
    /// anything else before a buffer is built.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "capacity validated at the boundary");
        Self {
            inner: Mutex::new(Inner {
                queue: VecDeque::with_capacity(capacity),
                canceled: false,
            }),
            capacity,
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    /// Blocks while the buffer is full. Returns only after the item is
    /// enqueued, or `Err(Canceled)` without enqueuing if the buffer is
    /// canceled before a slot frees up.
    pub fn put(&self, item: T) -> LineResult<()> {
        let mut inner = self.inner.lock().unwrap();
        while inner.queue.len() == self.capacity {
            if inner.canceled {
                return Err(LineError::Canceled);
            }
            inner = self.not_full.wait(inner).unwrap();
        }
        if inner.canceled {
            return Err(LineError::Canceled);
        }
        inner.queue.push_back(item);
        debug_assert!(inner.queue.len() <= self.capacity);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Blocks while the buffer is empty, then removes and returns the head
    /// item. Same cancellation contract as `put`.
    pub fn get(&self) -> LineResult<T> {
        let mut inner = self.inner.lock().unwrap();
        while inner.queue.is_empty() {
            if inner.canceled {
                return Err(LineError::Canceled);
            }
            inner = self.not_empty.wait(inner).unwrap();
        }
        if inner.canceled {
            return Err(LineError::Canceled);
        }
        let item = inner.queue.pop_front().unwrap();
        self.not_full.notify_one();
        Ok(item)
    }

    /// Non-blocking put. Hands the item back when the buffer is full.
    /// Ignores the cancel flag; state inspection stays possible after cancel.
    pub fn try_put(&self, item: T) -> Result<(), T> {
        let mut inner = self.inner.lock().unwrap();
        if inner.queue.len() == self.capacity {
            return Err(item);
        }
        inner.queue.push_back(item);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Non-blocking get.
    pub fn try_get(&self) -> Option<T> {
        let mut inner = self.inner.lock().unwrap();
        let item = inner.queue.pop_front();
        if item.is_some() {
            self.not_full.notify_one();
        }
        item
    }

    /// Wakes every blocked `put`/`get` and fails further blocking calls.
    /// Taken under the lock so a waiter between its condition check and its
    /// wait cannot miss the wakeup. Buffer contents are left untouched.
    pub fn cancel(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.canceled = true;
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    pub fn is_canceled(&self) -> bool {
        self.inner.lock().unwrap().canceled
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> BufferStats {
        BufferStats {
            len: self.len(),
            capacity: self.capacity,
        }
    }
}
