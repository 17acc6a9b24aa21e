//! A byte FIFO that never grows past its capacity.
//!
//! Appending to a full queue evicts the oldest bytes first, so the queue
//! always holds the most recent `capacity` bytes of everything appended to it.
//! Every insertion path (`append`, `append_str`, `append_repeated`,
//! `append_queue`, `Extend`) shares that policy.

use alloc::{
    collections::{VecDeque, vec_deque},
    vec::Vec,
};
use core::{fmt, iter, mem};

use bstr::{BStr, BString};
use tracing::trace;

/// Capacity-bounded FIFO of bytes with oldest-first eviction.
///
/// The queue owns both its storage and its capacity, and `len() <= capacity()`
/// holds after every method returns.
///
/// ```rust
/// use streamcore::BoundedQueue;
///
/// let mut q = BoundedQueue::new(4);
/// q.append(b"abc");
/// q.append(b"def");
/// assert_eq!(q.pop_all(), "cdef");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BoundedQueue {
    data: VecDeque<u8>,
    capacity: usize,
}

impl BoundedQueue {
    /// Creates an empty queue holding at most `capacity` bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: VecDeque::new(),
            capacity,
        }
    }

    /// Adopts existing bytes as the queue's storage.
    ///
    /// If `storage` is longer than `capacity`, only its newest `capacity` bytes
    /// are kept.
    #[must_use]
    pub fn with_storage(storage: impl Into<VecDeque<u8>>, capacity: usize) -> Self {
        let mut queue = Self {
            data: storage.into(),
            capacity,
        };
        queue.enforce_capacity();
        queue
    }

    /// Replaces both the storage and the capacity, returning the old storage.
    pub fn attach(&mut self, storage: impl Into<VecDeque<u8>>, capacity: usize) -> VecDeque<u8> {
        self.capacity = capacity;
        self.replace_storage(storage)
    }

    /// Replaces the storage and keeps the capacity, returning the old storage.
    pub fn replace_storage(&mut self, storage: impl Into<VecDeque<u8>>) -> VecDeque<u8> {
        let previous = mem::replace(&mut self.data, storage.into());
        self.enforce_capacity();
        previous
    }

    /// Changes the capacity. Shrinking below the current length evicts the
    /// oldest bytes; the number evicted is returned.
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        self.capacity = capacity;
        self.enforce_capacity()
    }

    /// Releases the storage back to the caller.
    #[must_use]
    pub fn into_storage(self) -> VecDeque<u8> {
        self.data
    }

    /// Maximum number of bytes the queue holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of bytes currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes that can be appended before anything is evicted.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.data.len())
    }

    /// `true` once the next appended byte would evict an older one.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// Iterates over the queued bytes, oldest first.
    pub fn iter(&self) -> iter::Copied<vec_deque::Iter<'_, u8>> {
        self.data.iter().copied()
    }

    /// The queued bytes as two slices, oldest first. See
    /// [`VecDeque::as_slices`].
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        self.data.as_slices()
    }

    /// Copies the queued bytes into one contiguous buffer without consuming
    /// them.
    #[must_use]
    pub fn contiguous(&self) -> BString {
        let (front, back) = self.data.as_slices();
        let mut bytes = Vec::with_capacity(self.data.len());
        bytes.extend_from_slice(front);
        bytes.extend_from_slice(back);
        BString::from(bytes)
    }

    /// Appends `bytes`, evicting the oldest queued bytes to make room.
    ///
    /// Returns how many bytes were dropped. When `bytes` alone is longer than
    /// the capacity, its own leading bytes are counted as dropped too, and
    /// the queue ends up holding the tail of `bytes`.
    pub fn append(&mut self, bytes: &[u8]) -> usize {
        self.append_exact(bytes.iter().copied())
    }

    /// Appends the UTF-8 bytes of `text`. Same eviction as [`append`](Self::append).
    pub fn append_str(&mut self, text: &str) -> usize {
        self.append(text.as_bytes())
    }

    /// Appends `count` copies of `byte`. Same eviction as [`append`](Self::append).
    pub fn append_repeated(&mut self, byte: u8, count: usize) -> usize {
        self.append_exact(iter::repeat_n(byte, count))
    }

    /// Appends a copy of everything in `other`, which is left untouched.
    pub fn append_queue(&mut self, other: &BoundedQueue) -> usize {
        self.append_exact(other.iter())
    }

    /// Removes up to `n` of the oldest bytes and returns how many went.
    pub fn remove_front(&mut self, n: usize) -> usize {
        let n = n.min(self.data.len());
        self.data.drain(..n);
        n
    }

    /// Empties the queue.
    pub fn remove_all(&mut self) {
        self.data.clear();
    }

    /// Removes and returns up to `n` of the oldest bytes.
    ///
    /// A short queue yields a short (possibly empty) result.
    pub fn pop_front(&mut self, n: usize) -> BString {
        let n = n.min(self.data.len());
        BString::from(self.data.drain(..n).collect::<Vec<u8>>())
    }

    /// Removes and returns everything queued.
    pub fn pop_all(&mut self) -> BString {
        BString::from(Vec::from(mem::take(&mut self.data)))
    }

    fn append_exact<I>(&mut self, incoming: I) -> usize
    where
        I: ExactSizeIterator<Item = u8>,
    {
        let skipped = incoming.len().saturating_sub(self.capacity);
        let kept = incoming.len() - skipped;
        let overflow = (self.data.len() + kept).saturating_sub(self.capacity);

        self.data.drain(..overflow);
        self.data.extend(incoming.skip(skipped));

        let evicted = skipped + overflow;
        if evicted > 0 {
            trace!(evicted, capacity = self.capacity, "evicted oldest bytes");
        }
        evicted
    }

    fn enforce_capacity(&mut self) -> usize {
        let excess = self.data.len().saturating_sub(self.capacity);
        if excess > 0 {
            self.data.drain(..excess);
            trace!(evicted = excess, capacity = self.capacity, "trimmed to capacity");
        }
        excess
    }
}

impl Extend<u8> for BoundedQueue {
    fn extend<T: IntoIterator<Item = u8>>(&mut self, iter: T) {
        for byte in iter {
            if self.capacity == 0 {
                continue;
            }
            if self.data.len() >= self.capacity {
                self.data.pop_front();
            }
            self.data.push_back(byte);
        }
    }
}

impl<'a> Extend<&'a u8> for BoundedQueue {
    fn extend<T: IntoIterator<Item = &'a u8>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied());
    }
}

impl fmt::Debug for BoundedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.contiguous();
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("data", &BStr::new(&bytes))
            .finish()
    }
}
