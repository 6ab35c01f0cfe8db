//! An append-only record store: a flat data file of serialized records plus a
//! fixed-width index file that locates each record.
//!
//! ```text
//! data file:   [ chunk_0 ][ chunk_1 ][ chunk_2 ] ...
//! index file:  [ (offset_0, length_0) ][ (offset_1, length_1) ] ...
//! ```
//!
//! [`Dataset`] is the entry point. It composes a [`RecordCodec`], an [`IndexFile`]
//! and a [`DataFile`].

mod data_file;
mod dataset;
mod entry;
mod error;
pub mod fs_utils;
mod index_file;
mod observability;
mod options;
mod record_codec;

pub use data_file::*;
pub use dataset::*;
pub use entry::*;
pub use error::*;
pub use index_file::*;
pub use options::*;
pub use record_codec::*;
