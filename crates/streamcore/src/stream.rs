//! Transmit/receive queue pair handed to an external transport.
//!
//! A [`ByteStream`] does no I/O of its own. A driver calls the receive path
//! ([`receive`](ByteStream::receive) and friends) whenever bytes arrive and
//! drains them with [`read`](ByteStream::read); outgoing bytes are staged with
//! [`push_back`](ByteStream::push_back) and taken with
//! [`flush`](ByteStream::flush). Both paths use the same
//! [`BoundedQueue::append`] eviction, so a slow consumer loses the oldest
//! bytes rather than blocking the producer.

use core::fmt;

use bstr::BString;
use tracing::{debug, trace};

use crate::{BoundedQueue, StreamError, StreamOptions};

/// Which queue of a [`ByteStream`] an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Outgoing bytes staged for the channel.
    Tx,
    /// Incoming bytes waiting to be parsed.
    Rx,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Tx => "tx",
            Direction::Rx => "rx",
        })
    }
}

/// A pair of bounded queues, one per direction.
///
/// Either queue may be missing: a stream built with
/// [`ByteStream::detached`] has neither until [`attach`](Self::attach) is
/// called. Operations on a missing queue fail with
/// [`StreamError::NotAttached`]; nothing else in this type can fail.
#[derive(Debug, Clone, Default)]
pub struct ByteStream {
    tx: Option<BoundedQueue>,
    rx: Option<BoundedQueue>,
}

impl ByteStream {
    /// Creates a stream with both queues attached and empty.
    #[must_use]
    pub fn new(options: StreamOptions) -> Self {
        Self {
            tx: Some(BoundedQueue::new(options.tx_capacity)),
            rx: Some(BoundedQueue::new(options.rx_capacity)),
        }
    }

    /// Creates a stream with no queues attached.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Attaches `queue` for `direction`, returning whatever was attached
    /// before.
    pub fn attach(&mut self, direction: Direction, queue: BoundedQueue) -> Option<BoundedQueue> {
        trace!(%direction, capacity = queue.capacity(), "attaching queue");
        self.slot_mut(direction).replace(queue)
    }

    /// Hands the queue for `direction` back to the caller.
    pub fn detach(&mut self, direction: Direction) -> Option<BoundedQueue> {
        trace!(%direction, "detaching queue");
        self.slot_mut(direction).take()
    }

    /// `true` if a queue is attached for `direction`.
    #[must_use]
    pub fn is_attached(&self, direction: Direction) -> bool {
        self.slot(direction).is_some()
    }

    /// Borrows the queue for `direction`.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no queue is attached.
    pub fn queue(&self, direction: Direction) -> Result<&BoundedQueue, StreamError> {
        self.slot(direction).as_ref().ok_or_else(|| not_attached(direction))
    }

    /// Mutably borrows the queue for `direction`.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no queue is attached.
    pub fn queue_mut(&mut self, direction: Direction) -> Result<&mut BoundedQueue, StreamError> {
        self.slot_mut(direction)
            .as_mut()
            .ok_or_else(|| not_attached(direction))
    }

    /// Capacity of the queue for `direction`.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no queue is attached.
    pub fn capacity(&self, direction: Direction) -> Result<usize, StreamError> {
        self.queue(direction).map(BoundedQueue::capacity)
    }

    /// Changes the capacity of the queue for `direction`, returning how many
    /// bytes the change evicted.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no queue is attached.
    pub fn set_capacity(&mut self, direction: Direction, capacity: usize) -> Result<usize, StreamError> {
        Ok(self.queue_mut(direction)?.set_capacity(capacity))
    }

    /// Number of bytes queued for `direction`.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no queue is attached.
    pub fn len(&self, direction: Direction) -> Result<usize, StreamError> {
        self.queue(direction).map(BoundedQueue::len)
    }

    /// Empties the queue for `direction`.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no queue is attached.
    pub fn clear(&mut self, direction: Direction) -> Result<(), StreamError> {
        self.queue_mut(direction)?.remove_all();
        Ok(())
    }

    // Transmit path

    /// Stages `bytes` for transmission. Returns the number of bytes evicted.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no transmit queue is attached.
    pub fn push_back(&mut self, bytes: &[u8]) -> Result<usize, StreamError> {
        Ok(self.queue_mut(Direction::Tx)?.append(bytes))
    }

    /// Stages the UTF-8 bytes of `text` for transmission.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no transmit queue is attached.
    pub fn push_back_str(&mut self, text: &str) -> Result<usize, StreamError> {
        Ok(self.queue_mut(Direction::Tx)?.append_str(text))
    }

    /// Stages `count` copies of `byte` for transmission.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no transmit queue is attached.
    pub fn push_back_repeated(&mut self, byte: u8, count: usize) -> Result<usize, StreamError> {
        Ok(self.queue_mut(Direction::Tx)?.append_repeated(byte, count))
    }

    /// Stages a copy of `other` for transmission.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no transmit queue is attached.
    pub fn push_back_queue(&mut self, other: &BoundedQueue) -> Result<usize, StreamError> {
        Ok(self.queue_mut(Direction::Tx)?.append_queue(other))
    }

    /// Takes every staged outgoing byte.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no transmit queue is attached.
    pub fn flush(&mut self) -> Result<BString, StreamError> {
        Ok(self.queue_mut(Direction::Tx)?.pop_all())
    }

    // Receive path

    /// Records `bytes` as received from the channel. Returns the number of
    /// bytes evicted.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no receive queue is attached.
    pub fn receive(&mut self, bytes: &[u8]) -> Result<usize, StreamError> {
        Ok(self.queue_mut(Direction::Rx)?.append(bytes))
    }

    /// Records the UTF-8 bytes of `text` as received.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no receive queue is attached.
    pub fn receive_str(&mut self, text: &str) -> Result<usize, StreamError> {
        Ok(self.queue_mut(Direction::Rx)?.append_str(text))
    }

    /// Records `count` copies of `byte` as received.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no receive queue is attached.
    pub fn receive_repeated(&mut self, byte: u8, count: usize) -> Result<usize, StreamError> {
        Ok(self.queue_mut(Direction::Rx)?.append_repeated(byte, count))
    }

    /// Records a copy of `other` as received.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no receive queue is attached.
    pub fn receive_queue(&mut self, other: &BoundedQueue) -> Result<usize, StreamError> {
        Ok(self.queue_mut(Direction::Rx)?.append_queue(other))
    }

    /// Takes up to `n` of the oldest received bytes.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no receive queue is attached.
    pub fn read(&mut self, n: usize) -> Result<BString, StreamError> {
        Ok(self.queue_mut(Direction::Rx)?.pop_front(n))
    }

    /// Takes every received byte.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no receive queue is attached.
    pub fn read_all(&mut self) -> Result<BString, StreamError> {
        Ok(self.queue_mut(Direction::Rx)?.pop_all())
    }

    /// Discards up to `n` of the oldest received bytes, returning how many
    /// were discarded.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotAttached`] if no receive queue is attached.
    pub fn consume(&mut self, n: usize) -> Result<usize, StreamError> {
        Ok(self.queue_mut(Direction::Rx)?.remove_front(n))
    }

    fn slot(&self, direction: Direction) -> &Option<BoundedQueue> {
        match direction {
            Direction::Tx => &self.tx,
            Direction::Rx => &self.rx,
        }
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<BoundedQueue> {
        match direction {
            Direction::Tx => &mut self.tx,
            Direction::Rx => &mut self.rx,
        }
    }
}

fn not_attached(direction: Direction) -> StreamError {
    debug!(%direction, "operation on detached queue");
    StreamError::NotAttached(direction)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn small() -> ByteStream {
        ByteStream::new(StreamOptions {
            tx_capacity: 4,
            rx_capacity: 6,
        })
    }

    #[test]
    fn directions_are_independent() {
        let mut stream = small();
        stream.push_back(b"out").unwrap();
        stream.receive(b"in").unwrap();
        assert_eq!(stream.len(Direction::Tx), Ok(3));
        assert_eq!(stream.len(Direction::Rx), Ok(2));
        assert_eq!(stream.flush().unwrap(), "out");
        assert_eq!(stream.read_all().unwrap(), "in");
    }

    #[test]
    fn push_back_and_receive_evict_identically() {
        let mut stream = ByteStream::new(StreamOptions {
            tx_capacity: 5,
            rx_capacity: 5,
        });
        for chunk in [b"abc".as_slice(), b"defg", b"", b"hijklmn"] {
            let tx_evicted = stream.push_back(chunk).unwrap();
            let rx_evicted = stream.receive(chunk).unwrap();
            assert_eq!(tx_evicted, rx_evicted);
        }
        assert_eq!(stream.queue(Direction::Tx), stream.queue(Direction::Rx));
        assert_eq!(stream.flush().unwrap(), "jklmn");
    }

    #[test]
    fn receive_variants_share_window() {
        let mut stream = small();
        let mut extra = BoundedQueue::new(2);
        extra.append(b"qq");

        stream.receive_str("abc").unwrap();
        stream.receive_repeated(b'-', 2).unwrap();
        assert_eq!(stream.receive_queue(&extra).unwrap(), 1);
        assert_eq!(stream.read(4).unwrap(), "bc--");
        assert_eq!(stream.consume(10).unwrap(), 2);
        assert_eq!(stream.read(1).unwrap(), "");
    }

    #[test]
    fn transmit_variants_share_window() {
        let mut stream = small();
        let mut extra = BoundedQueue::new(3);
        extra.append(b"xyz");

        stream.push_back_str("ab").unwrap();
        stream.push_back_repeated(b'0', 1).unwrap();
        assert_eq!(stream.push_back_queue(&extra).unwrap(), 2);
        assert_eq!(stream.flush().unwrap(), "0xyz");
        assert_eq!(stream.flush().unwrap(), "");
    }

    #[rstest]
    #[case(Direction::Tx)]
    #[case(Direction::Rx)]
    fn detached_queue_is_reported(#[case] direction: Direction) {
        let mut stream = ByteStream::detached();
        assert!(!stream.is_attached(direction));
        assert_eq!(stream.len(direction), Err(StreamError::NotAttached(direction)));
        assert_eq!(stream.clear(direction), Err(StreamError::NotAttached(direction)));
        assert_eq!(
            stream.set_capacity(direction, 8),
            Err(StreamError::NotAttached(direction))
        );

        assert!(stream.attach(direction, BoundedQueue::new(2)).is_none());
        assert_eq!(stream.capacity(direction), Ok(2));

        let released = stream.detach(direction).unwrap();
        assert_eq!(released.capacity(), 2);
        assert!(stream.queue(direction).is_err());
    }

    #[test]
    fn detached_paths_fail_without_touching_the_other_queue() {
        let mut stream = ByteStream::detached();
        stream.attach(Direction::Rx, BoundedQueue::new(4));

        assert_eq!(
            stream.push_back(b"x"),
            Err(StreamError::NotAttached(Direction::Tx))
        );
        assert!(stream.flush().is_err());
        assert_eq!(stream.receive(b"x"), Ok(0));
        assert_eq!(stream.read_all().unwrap(), "x");
    }

    #[test]
    fn attach_replaces_and_returns_previous_queue() {
        let mut stream = small();
        stream.receive(b"old").unwrap();

        let previous = stream
            .attach(Direction::Rx, BoundedQueue::with_storage(b"new".to_vec(), 8))
            .unwrap();
        assert_eq!(previous.contiguous(), "old");
        assert_eq!(stream.read_all().unwrap(), "new");
    }

    #[test]
    fn shrinking_capacity_through_stream() {
        let mut stream = small();
        stream.receive(b"abcdef").unwrap();
        assert_eq!(stream.set_capacity(Direction::Rx, 2), Ok(4));
        assert_eq!(stream.read_all().unwrap(), "ef");
    }

    #[test]
    fn error_message_names_direction() {
        assert_eq!(
            alloc::string::ToString::to_string(&StreamError::NotAttached(Direction::Rx)),
            "no rx queue is attached"
        );
    }
}
