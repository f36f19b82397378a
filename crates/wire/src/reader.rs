use crate::error::WireError;
use crate::DIGEST_LEN;

/// Cursor-based little-endian reader over an immutable byte slice.
///
/// Every read is bounds-checked against the remaining input and fails with
/// [`WireError::UnexpectedEof`] rather than panicking. Parsers that are
/// supposed to consume their whole input finish with
/// [`expect_eof`](Self::expect_eof).
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Wraps `buf` with the cursor at the start.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    /// Reads an unsigned 32-bit integer, little-endian.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a strong digest.
    #[inline]
    pub fn read_digest(&mut self) -> Result<[u8; DIGEST_LEN], WireError> {
        let bytes = self.take(DIGEST_LEN)?;
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(bytes);
        Ok(digest)
    }

    /// Reads a raw run of `len` bytes, borrowed from the underlying buffer.
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        self.take(len)
    }

    /// Fails with [`WireError::ExpectedEof`] if unread bytes remain.
    pub fn expect_eof(&self) -> Result<(), WireError> {
        match self.remaining() {
            0 => Ok(()),
            trailing => Err(WireError::ExpectedEof { trailing }),
        }
    }

    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(WireError::UnexpectedEof {
                needed: len,
                remaining,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}
