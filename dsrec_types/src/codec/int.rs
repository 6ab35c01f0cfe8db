use crate::codec::{CodecError, FieldCodec};
use crate::value::Value;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::mem;

const CODEC_NAME: &str = "int";

#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum IntBits {
    B8 = 8,
    B16 = 16,
    B32 = 32,
    B64 = 64,
}
impl IntBits {
    pub fn from_bits(bits: u8) -> Result<Self, CodecError> {
        IntBits::from_u8(bits).ok_or_else(|| CodecError::UnsupportedConfig {
            codec: CODEC_NAME,
            reason: format!("{bits} bits; expected one of 8, 16, 32, 64"),
        })
    }
    pub fn bits(&self) -> u32 {
        *self as u32
    }
    pub fn width(&self) -> usize {
        *self as usize / 8
    }
}

#[derive(Clone, Copy, Debug)]
pub struct IntConfig {
    pub bits: IntBits,
    pub signed: bool,
}
impl Default for IntConfig {
    fn default() -> Self {
        Self {
            bits: IntBits::B64,
            signed: true,
        }
    }
}

/// Fixed-width little-endian integer.
#[derive(Clone, Copy, Default, Debug)]
pub struct IntCodec {
    conf: IntConfig,
}

impl IntCodec {
    pub fn new(conf: IntConfig) -> Self {
        Self { conf }
    }

    /// Like [`IntCodec::new`], but validates a raw bit count first.
    pub fn with_bits(bits: u8, signed: bool) -> Result<Self, CodecError> {
        let bits = IntBits::from_bits(bits)?;
        Ok(Self::new(IntConfig { bits, signed }))
    }

    pub fn config(&self) -> &IntConfig {
        &self.conf
    }

    /// Inclusive bounds of the declared domain.
    fn bounds(&self) -> (i128, i128) {
        let bits = self.conf.bits.bits();
        if self.conf.signed {
            let half = 1i128 << (bits - 1);
            (-half, half - 1)
        } else {
            (0, (1i128 << bits) - 1)
        }
    }
}

impl FieldCodec for IntCodec {
    fn name(&self) -> &'static str {
        CODEC_NAME
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        let int = match value {
            Value::Int(i) => *i as i128,
            Value::UInt(u) => *u as i128,
            _ => {
                return Err(CodecError::TypeMismatch {
                    codec: CODEC_NAME,
                    found: value.value_type(),
                })
            }
        };

        let (lo, hi) = self.bounds();
        if int < lo || hi < int {
            let sign = if self.conf.signed { "i" } else { "u" };
            return Err(CodecError::OutOfRange {
                codec: CODEC_NAME,
                value: format!("{int} as {sign}{}", self.conf.bits.bits()),
            });
        }

        /* Two's complement truncation is exact for in-range values of either signedness. */
        let width = self.conf.bits.width();
        Ok(int.to_le_bytes()[..width].to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        let width = self.conf.bits.width();
        if bytes.len() != width {
            return Err(CodecError::WidthMismatch {
                codec: CODEC_NAME,
                expected: width,
                actual: bytes.len(),
            });
        }

        let is_negative = self.conf.signed && bytes[width - 1] & 0x80 != 0;
        let fill = if is_negative { 0xFF } else { 0x00 };
        let mut buf = [fill; mem::size_of::<u64>()];
        buf[..width].copy_from_slice(bytes);

        let value = if self.conf.signed {
            Value::Int(i64::from_le_bytes(buf))
        } else {
            Value::UInt(u64::from_le_bytes(buf))
        };
        Ok(value)
    }
}
