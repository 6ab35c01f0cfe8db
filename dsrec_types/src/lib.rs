//! Typed field values and the codecs that turn them into bytes.
//!
//! A [`value::Record`] is an ordered tuple of [`value::Value`]s.
//! Each position of a record is handled by one [`codec::FieldCodec`].

pub mod codec;
pub mod value;
