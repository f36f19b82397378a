use crate::block::BlockSignature;
use crate::error::SignatureError;
use wire::{Reader, Writer};

/// Build-side encoder for the signature table blob.
///
/// The header is written up front from the declared block count;
/// [`into_bytes`](Self::into_bytes) enforces that exactly that many
/// signatures were added before the blob is released.
#[derive(Debug)]
pub struct SignatureBuilder {
    writer: Writer,
    declared: u32,
    added: u32,
}

impl SignatureBuilder {
    /// Starts a table declaring `block_count` signatures of `block_size`-byte
    /// blocks.
    #[must_use]
    pub fn new(block_size: u32, block_count: u32) -> Self {
        let capacity = 8 + block_count as usize * BlockSignature::WIRE_LEN;
        let mut writer = Writer::with_capacity(capacity);
        writer.write_u32(block_size);
        writer.write_u32(block_count);
        Self {
            writer,
            declared: block_count,
            added: 0,
        }
    }

    /// Appends one block signature.
    pub fn add_block(&mut self, signature: &BlockSignature) {
        self.writer.write_u32(signature.weak);
        self.writer.write_digest(&signature.strong);
        self.added += 1;
    }

    /// Finishes the table, failing with
    /// [`SignatureError::BlockCountMismatch`] unless the declared number of
    /// signatures was added.
    pub fn into_bytes(self) -> Result<Vec<u8>, SignatureError> {
        if self.added != self.declared {
            return Err(SignatureError::BlockCountMismatch {
                expected: self.declared,
                actual: self.added,
            });
        }
        Ok(self.writer.into_bytes())
    }
}

/// Parse-side decoder for the signature table blob.
///
/// Signatures are pulled one at a time with [`read_block`](Self::read_block);
/// [`read_eof`](Self::read_eof) verifies that the declared count was read and
/// that no trailing bytes remain.
#[derive(Debug)]
pub struct SignatureReader<'a> {
    reader: Reader<'a>,
    block_size: u32,
    block_count: u32,
    read: u32,
}

impl<'a> SignatureReader<'a> {
    /// Parses the table header.
    pub fn new(bytes: &'a [u8]) -> Result<Self, SignatureError> {
        let mut reader = Reader::new(bytes);
        let block_size = reader.read_u32()?;
        let block_count = reader.read_u32()?;
        Ok(Self {
            reader,
            block_size,
            block_count,
            read: 0,
        })
    }

    /// Block size declared in the header.
    #[must_use]
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Number of signatures declared in the header.
    #[must_use]
    pub const fn block_count(&self) -> u32 {
        self.block_count
    }

    /// Reads the next block signature.
    pub fn read_block(&mut self) -> Result<BlockSignature, SignatureError> {
        let weak = self.reader.read_u32()?;
        let strong = self.reader.read_digest()?;
        self.read += 1;
        Ok(BlockSignature { weak, strong })
    }

    /// Verifies that the declared count was read and the input is exhausted.
    pub fn read_eof(&self) -> Result<(), SignatureError> {
        if self.read != self.block_count {
            return Err(SignatureError::BlockCountMismatch {
                expected: self.block_count,
                actual: self.read,
            });
        }
        self.reader.expect_eof()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire::WireError;

    fn sample_signature(seed: u8) -> BlockSignature {
        BlockSignature::new(u32::from(seed) << 8 | 0x79, [seed; 16])
    }

    #[test]
    fn build_then_parse_reproduces_fields() {
        let mut builder = SignatureBuilder::new(16, 2);
        builder.add_block(&sample_signature(1));
        builder.add_block(&sample_signature(2));
        let bytes = builder.into_bytes().unwrap();
        assert_eq!(bytes.len(), 8 + 2 * 20);

        let mut reader = SignatureReader::new(&bytes).unwrap();
        assert_eq!(reader.block_size(), 16);
        assert_eq!(reader.block_count(), 2);
        assert_eq!(reader.read_block().unwrap(), sample_signature(1));
        assert_eq!(reader.read_block().unwrap(), sample_signature(2));
        reader.read_eof().unwrap();
    }

    #[test]
    fn empty_table_is_eight_bytes() {
        let bytes = SignatureBuilder::new(1024, 0).into_bytes().unwrap();
        assert_eq!(bytes.len(), 8);

        let reader = SignatureReader::new(&bytes).unwrap();
        assert_eq!(reader.block_size(), 1024);
        assert_eq!(reader.block_count(), 0);
        reader.read_eof().unwrap();
    }

    #[test]
    fn builder_rejects_missing_blocks() {
        let mut builder = SignatureBuilder::new(16, 3);
        builder.add_block(&sample_signature(1));
        assert_eq!(
            builder.into_bytes(),
            Err(SignatureError::BlockCountMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn builder_rejects_extra_blocks() {
        let mut builder = SignatureBuilder::new(16, 1);
        builder.add_block(&sample_signature(1));
        builder.add_block(&sample_signature(2));
        assert_eq!(
            builder.into_bytes(),
            Err(SignatureError::BlockCountMismatch {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn reader_rejects_count_disagreement() {
        let mut builder = SignatureBuilder::new(16, 2);
        builder.add_block(&sample_signature(1));
        builder.add_block(&sample_signature(2));
        let bytes = builder.into_bytes().unwrap();

        let mut reader = SignatureReader::new(&bytes).unwrap();
        reader.read_block().unwrap();
        assert_eq!(
            reader.read_eof(),
            Err(SignatureError::BlockCountMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn reader_rejects_trailing_bytes() {
        let mut bytes = SignatureBuilder::new(16, 0).into_bytes().unwrap();
        bytes.push(0xFF);

        let reader = SignatureReader::new(&bytes).unwrap();
        assert_eq!(
            reader.read_eof(),
            Err(SignatureError::Wire(WireError::ExpectedEof { trailing: 1 }))
        );
    }

    #[test]
    fn truncated_header_reports_unexpected_eof() {
        assert_eq!(
            SignatureReader::new(&[0u8; 6]).unwrap_err(),
            SignatureError::Wire(WireError::UnexpectedEof {
                needed: 4,
                remaining: 2
            })
        );
    }

    #[test]
    fn truncated_block_reports_unexpected_eof() {
        let mut builder = SignatureBuilder::new(16, 1);
        builder.add_block(&sample_signature(9));
        let bytes = builder.into_bytes().unwrap();

        let mut reader = SignatureReader::new(&bytes[..bytes.len() - 4]).unwrap();
        assert_eq!(
            reader.read_block(),
            Err(SignatureError::Wire(WireError::UnexpectedEof {
                needed: 16,
                remaining: 12
            }))
        );
    }
}
