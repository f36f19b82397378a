/// Largest prime below `2^16`; the Adler-32 modulus.
const ADLER_BASE: u32 = 65521;

/// Largest number of bytes that can be accumulated before the 32-bit sums
/// must be reduced modulo [`ADLER_BASE`] to avoid overflow.
const ADLER_NMAX: usize = 5552;

/// Adler-32 weak checksum over a window of bytes.
///
/// Maintains the two classic accumulators: `a` is the byte sum seeded at 1,
/// `b` the running sum of `a`, both modulo [`ADLER_BASE`]. The packed
/// [`value`](Self::value) is `(b << 16) | a`.
///
/// [`from_block`](Self::from_block) computes the checksum of a window from
/// scratch in O(n); [`roll`](Self::roll) slides a full-size window one byte to
/// the right in O(1), which is what gives the delta scan its near-linear
/// cost. Rolling is only algebraically valid for full-size windows — a
/// trailing partial block must be recomputed from scratch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Adler32 {
    a: u32,
    b: u32,
}

impl Adler32 {
    /// Computes the checksum of `block` from scratch.
    ///
    /// The modulo reduction is deferred for runs of up to [`ADLER_NMAX`]
    /// bytes, the largest batch for which the unreduced 32-bit sums cannot
    /// overflow.
    #[must_use]
    pub fn from_block(block: &[u8]) -> Self {
        let mut a: u32 = 1;
        let mut b: u32 = 0;

        for chunk in block.chunks(ADLER_NMAX) {
            for &byte in chunk {
                a += u32::from(byte);
                b += a;
            }
            a %= ADLER_BASE;
            b %= ADLER_BASE;
        }

        Self { a, b }
    }

    /// Slides a full-size window of `block_size` bytes one byte to the right.
    ///
    /// Removes `outgoing` (the byte leaving the window on the left) and adds
    /// `incoming` (the byte entering on the right). The `- 1` in the `b`
    /// update compensates for the seed contribution that `outgoing` carried.
    #[inline]
    pub fn roll(&mut self, block_size: u32, outgoing: u8, incoming: u8) {
        let out = u32::from(outgoing);
        let inn = u32::from(incoming);

        // (block_size * out) can exceed 32 bits for large blocks.
        let weighted_out = ((u64::from(block_size) * u64::from(out)) % u64::from(ADLER_BASE)) as u32;

        let a = (self.a + ADLER_BASE - out + inn) % ADLER_BASE;
        let b = (self.b + ADLER_BASE - weighted_out + a + ADLER_BASE - 1) % ADLER_BASE;

        self.a = a;
        self.b = b;
    }

    /// Returns the packed 32-bit checksum value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        (self.b << 16) | self.a
    }
}

impl From<Adler32> for u32 {
    fn from(checksum: Adler32) -> Self {
        checksum.value()
    }
}
