use crate::codec::{CodecError, FieldCodec};
use crate::value::Value;

const CODEC_NAME: &str = "str";

/// Utf-8 text.
#[derive(Clone, Copy, Default, Debug)]
pub struct StrCodec;

impl FieldCodec for StrCodec {
    fn name(&self) -> &'static str {
        CODEC_NAME
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        match value {
            Value::Str(s) => Ok(s.as_bytes().to_vec()),
            _ => Err(CodecError::TypeMismatch {
                codec: CODEC_NAME,
                found: value.value_type(),
            }),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        let s = String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::Malformed {
            codec: CODEC_NAME,
            reason: e.to_string(),
        })?;
        Ok(Value::Str(s))
    }
}
