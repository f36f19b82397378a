#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Delta generation and application for blocksync transfers.
//!
//! This crate carries the two stages that sit on either side of the wire:
//!
//! - [`generate`] scans a candidate file against a reference file's signature
//!   table, using the rolling weak checksum as a candidate filter and the
//!   strong digest as confirmation, and emits a diff stream.
//! - [`apply`] replays a diff stream against the base file, merging matched
//!   block copies and literal patches back into the target file
//!   byte-for-byte.
//!
//! The diff stream wire format lives in [`format`]; the consume-once
//! weak-checksum index used during generation lives in [`SignatureIndex`].

mod apply;
mod error;
pub mod format;
mod generator;
mod index;

pub use apply::apply;
pub use error::DeltaError;
pub use format::{DeltaBuilder, DeltaReader, DeltaScript, Patch};
pub use generator::generate;
pub use index::SignatureIndex;
