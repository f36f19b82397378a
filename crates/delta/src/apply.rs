#[cfg(feature = "tracing")]
use tracing::instrument;
use wire::Writer;

use crate::error::DeltaError;
use crate::format::DeltaReader;

/// Reconstructs the target file from `base` and a diff stream (the `apply`
/// stage).
///
/// Matched blocks and literal patches are merged by anchor order: before a
/// patch is emitted, matched blocks are copied from `base` up to and
/// including the patch's anchor block. A patch whose anchor cannot be
/// reached in the remaining matched-block stream makes the whole call fail
/// with [`DeltaError::InvalidDiff`] — a corrupt stream must never be
/// miscompiled into a silently corrupt file.
#[cfg_attr(
    feature = "tracing",
    instrument(skip_all, fields(base_len = base.len()))
)]
pub fn apply(base: &[u8], diff_bytes: &[u8]) -> Result<Vec<u8>, DeltaError> {
    let mut reader = DeltaReader::new(diff_bytes)?;
    let block_size = reader.block_size() as usize;

    if is_identity(base, &reader) {
        // The candidate was byte-identical to the base; skip the merge and
        // hand back a fresh copy.
        return Ok(base.to_vec());
    }

    // The target is usually close to the base in size.
    let mut out = Writer::with_capacity(base.len());

    let copy_block = |out: &mut Writer, index: u32| {
        // Indices are 1-based; out-of-range blocks copy nothing.
        let start = (index as usize)
            .saturating_sub(1)
            .saturating_mul(block_size)
            .min(base.len());
        let end = start.saturating_add(block_size).min(base.len());
        out.write_bytes(&base[start..end]);
    };

    let mut next_patch = reader.read_patch()?;
    let mut next_block = reader.read_matched_block();

    // Literal content before any matched block.
    if let Some(patch) = next_patch {
        if patch.anchor == 0 {
            out.write_bytes(patch.data);
            next_patch = reader.read_patch()?;
        }
    }

    while let Some(patch) = next_patch {
        // Copy matched blocks up to the patch's anchor.
        while next_block != Some(patch.anchor) {
            let Some(index) = next_block else {
                return Err(DeltaError::InvalidDiff {
                    anchor: patch.anchor,
                });
            };
            copy_block(&mut out, index);
            next_block = reader.read_matched_block();
        }
        // The anchor block itself precedes the literal run.
        copy_block(&mut out, patch.anchor);
        next_block = reader.read_matched_block();

        out.write_bytes(patch.data);
        next_patch = reader.read_patch()?;
    }

    // No more patches; the remaining matched blocks close out the file.
    while let Some(index) = next_block {
        copy_block(&mut out, index);
        next_block = reader.read_matched_block();
    }

    reader.read_eof()?;
    Ok(out.into_bytes())
}

/// Recognizes the patch-free, fully sequential matched run `1..=n` covering
/// the whole base file. Deliberately a narrow shape check, not a general
/// content-equality test.
fn is_identity(base: &[u8], reader: &DeltaReader<'_>) -> bool {
    let block_size = reader.block_size() as usize;
    if block_size == 0 || reader.patch_count() != 0 {
        return false;
    }
    let expected = base.len().div_ceil(block_size) as u32;
    if reader.matched_count() != expected {
        return false;
    }
    let mut run = reader.clone();
    let mut next = 1u32;
    while let Some(index) = run.read_matched_block() {
        if index != next {
            return false;
        }
        next += 1;
    }
    true
}
