use alloc::string::String;

use thiserror::Error;

use crate::stream::Direction;

/// Errors raised by [`ByteStream`](crate::ByteStream) operations.
///
/// Capacity overflow and short reads are not errors; the only failure is
/// touching a queue the owner has not attached.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// The queue for this direction was never attached or has been detached.
    #[error("no {0} queue is attached")]
    NotAttached(Direction),
}

/// Returned when a type tag is not one of the supported value kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value type tag '{tag}'")]
pub struct ParseValueKindError {
    pub(crate) tag: String,
}

impl ParseValueKindError {
    /// The tag that failed to parse.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}
