#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Block signature table: format, builder/parser, and generation.
//!
//! The signature table is the blob produced by the `prepare` stage and
//! consumed by the `diff` stage. It records, for every fixed-size block of a
//! reference file, a weak rolling checksum and a strong digest:
//!
//! ```text
//! u32 block_size | u32 block_count | block_count x (u32 weak | 16-byte strong)
//! ```
//!
//! All integers are little-endian. An empty file yields an 8-byte table.
//! Block indices are 1-based everywhere they travel on the wire; in this
//! table they are implicit in the ordering (the first signature describes
//! block 1).

mod block;
mod error;
mod format;
mod generate;

pub use block::BlockSignature;
pub use error::SignatureError;
pub use format::{SignatureBuilder, SignatureReader};
pub use generate::{generate, DEFAULT_BLOCK_SIZE};
