//! # Field codecs
//!
//! A [`FieldCodec`] turns one [`Value`] into bytes and back. The bytes a codec
//! consumes are exactly the bytes it produced; codecs never see neighboring fields.
//!
//! Configuration (bit width, signedness, float width, the inner codec of a list)
//! is bound when the codec is constructed, so a constructed codec is an immutable
//! `(encode, decode)` pair that may be shared freely.
//!
//! The below pseudocode depicts the serialized representations. All integers are
//! little-endian.
//!
//! ```text
//! struct Int {
//!     body:       [u8; bits / 8],     // bits in {8, 16, 32, 64}
//! }
//!
//! struct Float {
//!     body:       [u8; 4] or [u8; 8],
//! }
//!
//! struct Bool {
//!     body:       u8,                 // 0 or 1
//! }
//!
//! struct Str or Bytes {
//!     body:       [u8; ..],           // The whole segment. Utf-8 for Str.
//! }
//!
//! struct List {
//!     items_count:    u64,
//!     item_0:         {
//!         item_len:       u64,
//!         item_body:      [u8; item_len],   // Encoded by the inner codec.
//!     },
//!     item_1:         ...
//! }
//! ```
//!
//! None of the bodies carry their own length. The enclosing structure (a list,
//! or the record that holds the field) records it.

mod boolean;
mod bytes;
mod error;
mod float;
mod int;
mod lengths;
mod list;
mod text;

pub use boolean::*;
pub use bytes::*;
pub use error::*;
pub use float::*;
pub use int::*;
pub use lengths::*;
pub use list::*;
pub use text::*;

use crate::value::Value;
use std::fmt::Debug;
use std::sync::Arc;

pub trait FieldCodec: Send + Sync + Debug {
    /// A short human readable name, used in error messages and logs.
    fn name(&self) -> &'static str;

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError>;

    fn into_shared(self) -> SharedCodec
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

pub type SharedCodec = Arc<dyn FieldCodec>;
