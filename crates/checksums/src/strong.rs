//! Strong block digest.
//!
//! MD5 serves as the collision-resistant confirmation hash: a weak-checksum
//! bucket hit is only accepted as a block match once the strong digests agree.
//! The digest is treated as an opaque 128-bit value and its canonical byte
//! serialization is carried verbatim in both wire formats.

use digest::Digest;

/// Number of bytes in a strong digest.
pub const STRONG_LEN: usize = 16;

/// Streaming MD5 hasher wrapping the RustCrypto implementation.
#[derive(Clone, Debug, Default)]
pub struct Md5 {
    inner: md5::Md5,
}

impl Md5 {
    /// Creates a hasher with an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: md5::Md5::new(),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    /// Finalises the digest and returns the 128-bit output.
    #[must_use]
    pub fn finalize(self) -> [u8; STRONG_LEN] {
        self.inner.finalize().into()
    }

    /// Computes the digest of `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> [u8; STRONG_LEN] {
        md5::Md5::digest(data).into()
    }
}
