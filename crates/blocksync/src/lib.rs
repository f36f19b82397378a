#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Rsync-style block-level delta synchronization.
//!
//! Given the block signatures of a reference file, blocksync computes a
//! minimal binary patch that transforms a base copy of that file into an
//! updated version, without the updated file ever being present on the side
//! holding the base copy. The pipeline is three pure, synchronous stages,
//! each a byte-buffer-in/byte-buffer-out function:
//!
//! 1. [`prepare`] signs the reference file: one `(weak, strong)` checksum
//!    pair per fixed-size block, serialized as a signature table.
//! 2. [`diff`] scans the updated file against that table with a rolling
//!    checksum and emits a diff stream of matched block references and
//!    literal byte runs.
//! 3. [`apply`] replays the diff stream against the base copy and
//!    reconstructs the updated file byte-for-byte.
//!
//! ```
//! let base = b"the quick brown fox jumps over the lazy dog".to_vec();
//! let target = b"the quick brown cat jumps over the lazy dog".to_vec();
//!
//! let table = blocksync::prepare(&base, 8)?;
//! let stream = blocksync::diff(&target, &table)?;
//! assert_eq!(blocksync::apply(&base, &stream)?, target);
//! # Ok::<(), blocksync::Error>(())
//! ```
//!
//! Both intermediate blobs are opaque little-endian formats; moving them
//! between machines is the caller's concern. Malformed or incompatible blobs
//! fail whole with an [`Error`] — no stage ever returns partial output.

use thiserror::Error as ThisError;

pub use checksums::{Adler32, Md5};
pub use delta::{format, DeltaBuilder, DeltaReader, DeltaScript, Patch, SignatureIndex};
pub use signature::{BlockSignature, SignatureBuilder, SignatureReader, DEFAULT_BLOCK_SIZE};

/// Failure of a pipeline stage.
///
/// The closed set of ways a blob can be corrupted or incompatible. All four
/// kinds abort the whole call; none is transient or retryable from inside
/// the pipeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// A read requested more bytes than remain in the blob being parsed.
    #[error("unexpected end of input: needed {needed} byte(s) but only {remaining} remain")]
    UnexpectedEof {
        /// Number of bytes the read asked for.
        needed: usize,
        /// Number of unread bytes left.
        remaining: usize,
    },
    /// Bytes remain after a blob should have been fully consumed.
    #[error("expected end of input but {trailing} byte(s) remain")]
    ExpectedEof {
        /// Number of unread bytes left.
        trailing: usize,
    },
    /// A signature table's declared block count disagrees with its contents.
    #[error("block count mismatch: expected {expected}, got {actual}")]
    BlockCountMismatch {
        /// Count declared in the table header.
        expected: u32,
        /// Count of signatures actually seen.
        actual: u32,
    },
    /// A diff stream patch references a block that is missing from, or out
    /// of order in, the matched-block stream.
    #[error("invalid diff: patch anchored after block {anchor}, but that block is not matched")]
    InvalidDiff {
        /// The unreachable anchor index.
        anchor: u32,
    },
}

impl From<wire::WireError> for Error {
    fn from(err: wire::WireError) -> Self {
        match err {
            wire::WireError::UnexpectedEof { needed, remaining } => {
                Self::UnexpectedEof { needed, remaining }
            }
            wire::WireError::ExpectedEof { trailing } => Self::ExpectedEof { trailing },
        }
    }
}

impl From<signature::SignatureError> for Error {
    fn from(err: signature::SignatureError) -> Self {
        match err {
            signature::SignatureError::BlockCountMismatch { expected, actual } => {
                Self::BlockCountMismatch { expected, actual }
            }
            signature::SignatureError::Wire(wire) => wire.into(),
        }
    }
}

impl From<delta::DeltaError> for Error {
    fn from(err: delta::DeltaError) -> Self {
        match err {
            delta::DeltaError::InvalidDiff { anchor } => Self::InvalidDiff { anchor },
            delta::DeltaError::Signature(sig) => sig.into(),
            delta::DeltaError::Wire(wire) => wire.into(),
        }
    }
}

/// Signs `file`: returns the signature table for blocks of `block_size`
/// bytes (the last block may be shorter).
///
/// `block_size` must be non-zero; [`prepare_default`] picks the standard
/// size.
pub fn prepare(file: &[u8], block_size: u32) -> Result<Vec<u8>, Error> {
    Ok(signature::generate(file, block_size)?)
}

/// Signs `file` with [`DEFAULT_BLOCK_SIZE`].
pub fn prepare_default(file: &[u8]) -> Result<Vec<u8>, Error> {
    prepare(file, DEFAULT_BLOCK_SIZE)
}

/// Computes the diff stream that rewrites the file described by
/// `signature_table` into `candidate`.
pub fn diff(candidate: &[u8], signature_table: &[u8]) -> Result<Vec<u8>, Error> {
    Ok(delta::generate(candidate, signature_table)?)
}

/// Replays `diff_stream` against `base` and returns the reconstructed file
/// as a freshly owned buffer.
pub fn apply(base: &[u8], diff_stream: &[u8]) -> Result<Vec<u8>, Error> {
    Ok(delta::apply(base, diff_stream)?)
}
