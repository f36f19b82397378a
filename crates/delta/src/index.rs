use checksums::Md5;
use rustc_hash::FxHashMap;
use signature::{SignatureError, SignatureReader};
use wire::DIGEST_LEN;

/// One signature-table entry awaiting a match.
#[derive(Clone, Debug)]
struct Candidate {
    block_index: u32,
    strong: [u8; DIGEST_LEN],
}

/// Consume-once index of a signature table, keyed by weak checksum.
///
/// Buckets hold candidates in signature order; a lookup confirms candidates
/// against the window's strong digest and the first confirmed candidate wins
/// and is removed, so a reference block can back at most one matched block in
/// the output. Emptied buckets are dropped so stale keys do not slow later
/// probes.
#[derive(Debug, Default)]
pub struct SignatureIndex {
    buckets: FxHashMap<u32, Vec<Candidate>>,
    len: usize,
}

impl SignatureIndex {
    /// Builds the index by draining `reader`, assigning 1-based block indices
    /// in signature order.
    ///
    /// Fails if the signature blob is truncated, carries trailing bytes, or
    /// disagrees with its declared block count.
    pub fn from_reader(reader: &mut SignatureReader<'_>) -> Result<Self, SignatureError> {
        let block_count = reader.block_count();
        let mut buckets: FxHashMap<u32, Vec<Candidate>> = FxHashMap::default();

        for block_index in 1..=block_count {
            let signature = reader.read_block()?;
            buckets.entry(signature.weak).or_default().push(Candidate {
                block_index,
                strong: signature.strong,
            });
        }
        reader.read_eof()?;

        Ok(Self {
            buckets,
            len: block_count as usize,
        })
    }

    /// Number of candidates still available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` once every candidate has been consumed (or none were
    /// indexed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks up `weak` and confirms candidates against the strong digest of
    /// `window`; the first confirmed candidate is consumed and its 1-based
    /// block index returned.
    ///
    /// The strong digest is only computed when the weak checksum has a
    /// bucket at all.
    pub fn find_match(&mut self, weak: u32, window: &[u8]) -> Option<u32> {
        let bucket = self.buckets.get_mut(&weak)?;
        let digest = Md5::digest(window);

        let position = bucket
            .iter()
            .position(|candidate| candidate.strong == digest)?;
        // Order-preserving removal: later probes must still try remaining
        // candidates in signature order.
        let block_index = bucket.remove(position).block_index;
        if bucket.is_empty() {
            self.buckets.remove(&weak);
        }
        self.len -= 1;
        Some(block_index)
    }
}
