use thiserror::Error;
use wire::WireError;

/// Errors raised while building, generating, or parsing signature tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SignatureError {
    /// The declared block count disagrees with the number of signatures
    /// actually written or read.
    #[error("block count mismatch: expected {expected}, got {actual}")]
    BlockCountMismatch {
        /// Count declared in the table header.
        expected: u32,
        /// Count of signatures actually seen.
        actual: u32,
    },
    /// Malformed bytes in the underlying buffer.
    #[error(transparent)]
    Wire(#[from] WireError),
}
