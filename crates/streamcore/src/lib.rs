//! Capacity-bounded byte queues for staging channel traffic, plus helpers for
//! validating delimited text fields as typed values.
//!
//! The two halves are independent. [`BoundedQueue`] is a sliding window over
//! a byte stream: when an append would exceed the configured capacity the
//! oldest bytes are dropped. [`ByteStream`] pairs a transmit and a receive
//! queue for an external transport to fill and drain.
//!
//! ```rust
//! use streamcore::{ByteStream, StreamOptions};
//!
//! let mut stream = ByteStream::new(StreamOptions { tx_capacity: 4, rx_capacity: 4 });
//! stream.receive(b"hello").unwrap();
//! assert_eq!(stream.read_all().unwrap(), "ello");
//! ```
//!
//! The [`text`] and [`value_kind`] modules hold the pure string helpers:
//!
//! ```rust
//! use streamcore::{ValueKind, text};
//!
//! let fields = text::split("42, true ,3.5", ',');
//! assert!(text::validate_row(&fields, 3));
//! assert!(ValueKind::Int32.accepts(&fields[0]));
//! assert!(ValueKind::Bool.accepts(&fields[1]));
//! assert!(ValueKind::Double.accepts(&fields[2]));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod queue;
mod stream;
pub mod text;
pub mod value_kind;


pub use error::{ParseValueKindError, StreamError};
pub use options::StreamOptions;
pub use queue::BoundedQueue;
pub use stream::{ByteStream, Direction};
pub use value_kind::{ValueKind, check_value_type};

pub use bstr::BString;
