/// Configuration for a [`ByteStream`](crate::ByteStream).
///
/// Each capacity is the largest number of bytes the matching queue holds.
/// Once a queue is full, new bytes push the oldest ones out.
///
/// # Examples
///
/// ```rust
/// use streamcore::{ByteStream, StreamOptions};
///
/// let stream = ByteStream::new(StreamOptions {
///     rx_capacity: 64 * 1024,
///     ..Default::default()
/// });
/// assert_eq!(stream.capacity(streamcore::Direction::Rx), Ok(64 * 1024));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StreamOptions {
    /// Capacity of the transmit queue in bytes.
    ///
    /// # Default
    ///
    /// `1024`
    pub tx_capacity: usize,

    /// Capacity of the receive queue in bytes.
    ///
    /// # Default
    ///
    /// `1024`
    pub rx_capacity: usize,
}

impl StreamOptions {
    /// Capacity used for both queues when nothing else is configured.
    pub const DEFAULT_CAPACITY: usize = 1024;
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            tx_capacity: Self::DEFAULT_CAPACITY,
            rx_capacity: Self::DEFAULT_CAPACITY,
        }
    }
}
