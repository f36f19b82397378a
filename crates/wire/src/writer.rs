use crate::DIGEST_LEN;

/// Initial buffer capacity; enough for the blobs of small files.
const INITIAL_CAPACITY: usize = 32 * 4;

/// Growth factor applied when a write would overflow the current capacity.
const GROWTH_FACTOR: usize = 4;

/// Append-only little-endian writer over an owned, growable byte buffer.
///
/// The buffer starts at a fixed small capacity and is re-sized by powers of
/// [`GROWTH_FACTOR`] whenever a write would overflow it, keeping appends
/// amortized O(1). [`into_bytes`](Self::into_bytes) freezes the buffer to its
/// exact written length.
#[derive(Debug)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a writer with the default initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a writer with at least `capacity` bytes preallocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity.max(INITIAL_CAPACITY)),
        }
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends a single byte.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.grow_for(1);
        self.buf.push(value);
    }

    /// Appends an unsigned 32-bit integer, little-endian.
    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.grow_for(4);
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a strong digest verbatim.
    #[inline]
    pub fn write_digest(&mut self, digest: &[u8; DIGEST_LEN]) {
        self.grow_for(DIGEST_LEN);
        self.buf.extend_from_slice(digest);
    }

    /// Appends a raw run of bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.grow_for(bytes.len());
        self.buf.extend_from_slice(bytes);
    }

    /// Freezes the buffer to its exact written length and returns it.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        let mut buf = self.buf;
        buf.shrink_to_fit();
        buf
    }

    /// Ensures capacity for `additional` more bytes, growing by powers of
    /// [`GROWTH_FACTOR`] from the initial capacity.
    fn grow_for(&mut self, additional: usize) {
        let required = self.buf.len() + additional;
        if required <= self.buf.capacity() {
            return;
        }
        let mut capacity = INITIAL_CAPACITY;
        while capacity < required {
            capacity *= GROWTH_FACTOR;
        }
        self.buf.reserve_exact(capacity - self.buf.len());
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_u32_little_endian() {
        let mut writer = Writer::new();
        writer.write_u32(0x0403_0201);
        assert_eq!(writer.into_bytes(), vec![0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn mixed_writes_preserve_order() {
        let mut writer = Writer::new();
        writer.write_u8(0xAA);
        writer.write_u32(16);
        writer.write_bytes(&[1, 2, 3]);
        assert_eq!(writer.into_bytes(), vec![0xAA, 16, 0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn digest_is_written_verbatim() {
        let digest = [7u8; 16];
        let mut writer = Writer::new();
        writer.write_digest(&digest);
        assert_eq!(writer.into_bytes(), digest.to_vec());
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut writer = Writer::new();
        let payload = vec![0x5Au8; 10_000];
        writer.write_bytes(&payload);
        writer.write_u8(0xFF);
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 10_001);
        assert_eq!(bytes[9_999], 0x5A);
        assert_eq!(bytes[10_000], 0xFF);
    }

    #[test]
    fn into_bytes_has_exact_length() {
        let mut writer = Writer::new();
        writer.write_u32(1);
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 4);
        assert_eq!(bytes.capacity(), 4);
    }
}
