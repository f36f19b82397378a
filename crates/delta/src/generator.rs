use checksums::Adler32;
use signature::SignatureReader;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::DeltaError;
use crate::format::DeltaBuilder;
use crate::index::SignatureIndex;

/// Generates a diff stream transforming the signed reference file into
/// `candidate` (the `diff` stage).
///
/// One left-to-right scan with a window of `block_size` bytes. The window's
/// weak checksum is rolled forward in O(1) while the scan advances byte by
/// byte; it is recomputed from scratch for the first window, after every
/// block match, and whenever fewer than `block_size` bytes remain. A weak
/// hit is confirmed against the strong digest before the block is claimed;
/// unmatched bytes accumulate into literal runs that are flushed as patches.
#[cfg_attr(
    feature = "tracing",
    instrument(skip_all, fields(candidate_len = candidate.len()))
)]
pub fn generate(candidate: &[u8], signature_bytes: &[u8]) -> Result<Vec<u8>, DeltaError> {
    let mut signatures = SignatureReader::new(signature_bytes)?;
    let block_size = signatures.block_size();
    let mut index = SignatureIndex::from_reader(&mut signatures)?;

    let mut builder = DeltaBuilder::new(block_size);

    // A zero block size cannot match anything; the whole candidate travels
    // as one literal run. Guards the scan below against zero-byte advances.
    if block_size == 0 {
        if !candidate.is_empty() {
            builder.add_patch(candidate);
        }
        return Ok(builder.into_bytes());
    }

    let window_len = block_size as usize;
    let mut literal: Vec<u8> = Vec::new();
    let mut rolling: Option<Adler32> = None;
    let mut offset = 0usize;

    while offset < candidate.len() {
        let window_end = offset.saturating_add(window_len).min(candidate.len());
        if window_end - offset < window_len {
            // Trailing partial block: rolling is no longer valid.
            rolling = None;
        }
        let window = &candidate[offset..window_end];

        let checksum = match rolling {
            Some(mut sum) => {
                sum.roll(block_size, candidate[offset - 1], window[window.len() - 1]);
                sum
            }
            None => Adler32::from_block(window),
        };
        rolling = Some(checksum);

        match index.find_match(checksum.value(), window) {
            Some(block_index) => {
                if !literal.is_empty() {
                    builder.add_patch(&literal);
                    literal.clear();
                }
                builder.add_matched_block(block_index);
                offset += window_len;
                rolling = None;
            }
            None => {
                literal.push(candidate[offset]);
                offset += 1;
            }
        }
    }

    if !literal.is_empty() {
        builder.add_patch(&literal);
    }

    Ok(builder.into_bytes())
}
