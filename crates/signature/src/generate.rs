use checksums::{Adler32, Md5};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::block::BlockSignature;
use crate::error::SignatureError;
use crate::format::SignatureBuilder;

/// Block size used when the caller does not specify one.
pub const DEFAULT_BLOCK_SIZE: u32 = 1024;

/// Generates the signature table for `file` (the `prepare` stage).
///
/// The file is split into `ceil(len / block_size)` blocks; the final block
/// may be shorter than `block_size`. Each block contributes one
/// `(weak, strong)` signature pair, in block order.
///
/// `block_size` must be non-zero.
#[cfg_attr(
    feature = "tracing",
    instrument(skip(file), fields(file_len = file.len()))
)]
pub fn generate(file: &[u8], block_size: u32) -> Result<Vec<u8>, SignatureError> {
    debug_assert!(block_size > 0, "block size must be non-zero");

    let chunk = block_size as usize;
    let block_count = file.len().div_ceil(chunk) as u32;

    let mut builder = SignatureBuilder::new(block_size, block_count);
    for block in file.chunks(chunk) {
        builder.add_block(&BlockSignature::new(
            Adler32::from_block(block).value(),
            Md5::digest(block),
        ));
    }
    builder.into_bytes()
}
