use thiserror::Error;

/// Errors raised by the binary codec.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum WireError {
    /// A read requested more bytes than remain in the buffer.
    #[error("unexpected end of input: needed {needed} byte(s) but only {remaining} remain")]
    UnexpectedEof {
        /// Number of bytes the read asked for.
        needed: usize,
        /// Number of unread bytes left in the buffer.
        remaining: usize,
    },
    /// A parser expected to be fully consumed but bytes remain.
    #[error("expected end of input but {trailing} byte(s) remain")]
    ExpectedEof {
        /// Number of unread bytes left in the buffer.
        trailing: usize,
    },
}
