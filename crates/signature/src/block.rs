use wire::DIGEST_LEN;

/// Signature of a single fixed-size block of the reference file.
///
/// The weak checksum is the fast candidate filter; the strong digest is the
/// confirmation. Together they are 20 bytes on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockSignature {
    /// Packed Adler-32 rolling checksum of the block.
    pub weak: u32,
    /// MD5 digest of the block.
    pub strong: [u8; DIGEST_LEN],
}

impl BlockSignature {
    /// Size of one encoded signature in bytes.
    pub const WIRE_LEN: usize = 4 + DIGEST_LEN;

    /// Creates a signature from its two checksums.
    #[must_use]
    pub const fn new(weak: u32, strong: [u8; DIGEST_LEN]) -> Self {
        Self { weak, strong }
    }
}
