//! Diff stream wire format.
//!
//! ```text
//! u32 block_size
//! u32 patch_count
//! u32 matched_count
//! matched_count x u32            matched block indices, 1-based
//! patch_count x (u32 anchor | u32 len | len bytes)
//! ```
//!
//! Matched-block indices are stored as one contiguous run up front rather
//! than interleaved with the patches; the interleaving is reconstructed
//! during application from each patch's `anchor` — the index of the matched
//! block it immediately follows in output order, with `0` meaning
//! start-of-file (not block 1).

use crate::error::DeltaError;
use wire::{Reader, Writer};

/// One literal run carried by the diff stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Patch<'a> {
    /// Index of the matched block this run follows, or `0` for start-of-file.
    pub anchor: u32,
    /// Candidate-file bytes carried verbatim.
    pub data: &'a [u8],
}

/// Build-side encoder for the diff stream.
///
/// Matched blocks and patches are accumulated in separate buffers and
/// stitched together by [`into_bytes`](Self::into_bytes). Each
/// [`add_patch`](Self::add_patch) stamps the most recently added matched
/// block as the patch's anchor, so callers only ever emit events in output
/// order.
#[derive(Debug)]
pub struct DeltaBuilder {
    block_size: u32,
    matched: Writer,
    patches: Writer,
    matched_count: u32,
    patch_count: u32,
    last_match: u32,
}

impl DeltaBuilder {
    /// Starts a diff stream for the given block size.
    #[must_use]
    pub fn new(block_size: u32) -> Self {
        Self {
            block_size,
            matched: Writer::new(),
            patches: Writer::new(),
            matched_count: 0,
            patch_count: 0,
            last_match: 0,
        }
    }

    /// Records that the candidate reproduces reference block `index`
    /// (1-based) at this point in the output.
    pub fn add_matched_block(&mut self, index: u32) {
        self.matched.write_u32(index);
        self.matched_count += 1;
        self.last_match = index;
    }

    /// Records a literal run at this point in the output.
    pub fn add_patch(&mut self, data: &[u8]) {
        self.patches.write_u32(self.last_match);
        self.patches.write_u32(data.len() as u32);
        self.patches.write_bytes(data);
        self.patch_count += 1;
    }

    /// Assembles the final blob.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        let matched = self.matched.into_bytes();
        let patches = self.patches.into_bytes();

        let mut writer = Writer::with_capacity(12 + matched.len() + patches.len());
        writer.write_u32(self.block_size);
        writer.write_u32(self.patch_count);
        writer.write_u32(self.matched_count);
        writer.write_bytes(&matched);
        writer.write_bytes(&patches);
        writer.into_bytes()
    }
}

/// Parse-side decoder for the diff stream.
///
/// The matched-block run is sliced out of the buffer when the header is
/// parsed, so [`read_matched_block`](Self::read_matched_block) and
/// [`read_patch`](Self::read_patch) can be pulled independently, each
/// yielding `None` once its declared count is exhausted.
#[derive(Clone, Debug)]
pub struct DeltaReader<'a> {
    reader: Reader<'a>,
    matched: Reader<'a>,
    block_size: u32,
    patch_count: u32,
    matched_count: u32,
    patches_read: u32,
    matched_read: u32,
}

impl<'a> DeltaReader<'a> {
    /// Parses the header and slices out the matched-block run.
    pub fn new(bytes: &'a [u8]) -> Result<Self, DeltaError> {
        let mut reader = Reader::new(bytes);
        let block_size = reader.read_u32()?;
        let patch_count = reader.read_u32()?;
        let matched_count = reader.read_u32()?;
        let matched = Reader::new(reader.read_bytes(matched_count as usize * 4)?);
        Ok(Self {
            reader,
            matched,
            block_size,
            patch_count,
            matched_count,
            patches_read: 0,
            matched_read: 0,
        })
    }

    /// Block size declared in the header.
    #[must_use]
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Number of patches declared in the header.
    #[must_use]
    pub const fn patch_count(&self) -> u32 {
        self.patch_count
    }

    /// Number of matched blocks declared in the header.
    #[must_use]
    pub const fn matched_count(&self) -> u32 {
        self.matched_count
    }

    /// Pulls the next matched block index, or `None` once the declared count
    /// is exhausted.
    pub fn read_matched_block(&mut self) -> Option<u32> {
        if self.matched_read >= self.matched_count {
            return None;
        }
        self.matched_read += 1;
        // The run was bounds-checked whole when the header was parsed.
        Some(
            self.matched
                .read_u32()
                .expect("matched-block run sliced to declared length"),
        )
    }

    /// Pulls the next patch, or `None` once the declared count is exhausted.
    pub fn read_patch(&mut self) -> Result<Option<Patch<'a>>, DeltaError> {
        if self.patches_read >= self.patch_count {
            return Ok(None);
        }
        let anchor = self.reader.read_u32()?;
        let len = self.reader.read_u32()?;
        let data = self.reader.read_bytes(len as usize)?;
        self.patches_read += 1;
        Ok(Some(Patch { anchor, data }))
    }

    /// Fails if unread bytes remain after both runs are exhausted.
    pub fn read_eof(&self) -> Result<(), DeltaError> {
        self.reader.expect_eof()?;
        Ok(())
    }
}

/// Fully materialized diff stream, for inspection and tests.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeltaScript<'a> {
    /// Block size declared in the header.
    pub block_size: u32,
    /// Matched block indices in output order.
    pub matched_blocks: Vec<u32>,
    /// Literal runs in output order.
    pub patches: Vec<Patch<'a>>,
}

impl<'a> DeltaScript<'a> {
    /// Eagerly parses a whole diff stream.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, DeltaError> {
        let mut reader = DeltaReader::new(bytes)?;

        let mut matched_blocks = Vec::with_capacity(reader.matched_count() as usize);
        while let Some(index) = reader.read_matched_block() {
            matched_blocks.push(index);
        }

        let mut patches = Vec::with_capacity(reader.patch_count() as usize);
        while let Some(patch) = reader.read_patch()? {
            patches.push(patch);
        }

        reader.read_eof()?;
        Ok(Self {
            block_size: reader.block_size(),
            matched_blocks,
            patches,
        })
    }
}
