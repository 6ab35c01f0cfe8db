use crate::codec::{CodecError, FieldCodec};
use crate::value::Value;
use std::mem;

const CODEC_NAME: &str = "float";

#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum FloatWidth {
    F32,
    #[default]
    F64,
}

/// IEEE 754 little-endian float.
///
/// An `F32` codec only accepts values that survive the trip through `f32` unchanged.
#[derive(Clone, Copy, Default, Debug)]
pub struct FloatCodec {
    width: FloatWidth,
}

impl FloatCodec {
    pub fn new(width: FloatWidth) -> Self {
        Self { width }
    }

    pub fn width(&self) -> FloatWidth {
        self.width
    }
}

impl FieldCodec for FloatCodec {
    fn name(&self) -> &'static str {
        CODEC_NAME
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        let f = match value {
            Value::Float(f) => *f,
            _ => {
                return Err(CodecError::TypeMismatch {
                    codec: CODEC_NAME,
                    found: value.value_type(),
                })
            }
        };
        match self.width {
            FloatWidth::F64 => Ok(f.to_le_bytes().to_vec()),
            FloatWidth::F32 => {
                let narrow = f as f32;
                if !f.is_nan() && narrow as f64 != f {
                    return Err(CodecError::OutOfRange {
                        codec: CODEC_NAME,
                        value: format!("{f} as f32"),
                    });
                }
                Ok(narrow.to_le_bytes().to_vec())
            }
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        let expected = match self.width {
            FloatWidth::F32 => mem::size_of::<f32>(),
            FloatWidth::F64 => mem::size_of::<f64>(),
        };
        let width_mismatch = || CodecError::WidthMismatch {
            codec: CODEC_NAME,
            expected,
            actual: bytes.len(),
        };
        let f = match self.width {
            FloatWidth::F32 => {
                let buf = <[u8; 4]>::try_from(bytes).map_err(|_| width_mismatch())?;
                f32::from_le_bytes(buf) as f64
            }
            FloatWidth::F64 => {
                let buf = <[u8; 8]>::try_from(bytes).map_err(|_| width_mismatch())?;
                f64::from_le_bytes(buf)
            }
        };
        Ok(Value::Float(f))
    }
}
