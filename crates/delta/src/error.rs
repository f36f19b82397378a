use signature::SignatureError;
use thiserror::Error;
use wire::WireError;

/// Errors raised while generating or applying a delta.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DeltaError {
    /// A patch references an anchor block that is missing from, or out of
    /// order in, the remaining matched-block stream.
    #[error("invalid diff: patch anchored after block {anchor}, but that block is not matched")]
    InvalidDiff {
        /// The unreachable anchor index carried by the offending patch.
        anchor: u32,
    },
    /// The signature table handed to the generator was malformed.
    #[error(transparent)]
    Signature(#[from] SignatureError),
    /// Malformed bytes in the diff stream itself.
    #[error(transparent)]
    Wire(#[from] WireError),
}
