use crate::codec::{CodecError, FieldCodec};
use crate::value::Value;

const CODEC_NAME: &str = "bool";

#[derive(Clone, Copy, Default, Debug)]
pub struct BoolCodec;

impl FieldCodec for BoolCodec {
    fn name(&self) -> &'static str {
        CODEC_NAME
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        match value {
            Value::Bool(b) => Ok(vec![u8::from(*b)]),
            _ => Err(CodecError::TypeMismatch {
                codec: CODEC_NAME,
                found: value.value_type(),
            }),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        match bytes {
            [0] => Ok(Value::Bool(false)),
            [1] => Ok(Value::Bool(true)),
            [b] => Err(CodecError::Malformed {
                codec: CODEC_NAME,
                reason: format!("byte {b:#04x} is neither 0 nor 1"),
            }),
            _ => Err(CodecError::WidthMismatch {
                codec: CODEC_NAME,
                expected: 1,
                actual: bytes.len(),
            }),
        }
    }
}
