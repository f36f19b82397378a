#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Checksum primitives for blocksync block matching.
//!
//! Two digests cooperate during delta generation:
//!
//! - [`Adler32`], the weak rolling checksum. Cheap to compute, cheap to slide
//!   one byte at a time across a scan window, and deliberately collision-prone:
//!   it is a candidate filter, not proof of a match.
//! - [`Md5`], the strong 128-bit digest used to confirm a weak-checksum hit
//!   before a block is accepted as matched.

mod rolling;
pub mod strong;

pub use rolling::Adler32;
pub use strong::Md5;
