#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Bounds-checked little-endian binary codec.
//!
//! Both blocksync blob formats (the signature table and the diff stream) are
//! built and parsed through this crate:
//!
//! - [`Writer`] appends fixed-width integers and raw byte runs to an owned,
//!   exponentially growing buffer and freezes it to its exact length.
//! - [`Reader`] walks an immutable byte slice with a cursor, failing with
//!   [`WireError::UnexpectedEof`] when a read outruns the buffer and with
//!   [`WireError::ExpectedEof`] when a parser that should have consumed
//!   everything left trailing bytes behind.
//!
//! All integers are unsigned 32-bit little-endian. There is no padding or
//! alignment anywhere in either format.

mod error;
mod reader;
mod writer;

pub use error::WireError;
pub use reader::Reader;
pub use writer::Writer;

/// Width in bytes of the strong block digest carried by both formats.
pub const DIGEST_LEN: usize = 16;
