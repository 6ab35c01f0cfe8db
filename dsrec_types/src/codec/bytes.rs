use crate::codec::{CodecError, FieldCodec};
use crate::value::Value;

const CODEC_NAME: &str = "bytes";

/// Opaque blobs, stored as-is. Pre-encoded payloads (image files etc.) go through here.
#[derive(Clone, Copy, Default, Debug)]
pub struct BytesCodec;

impl FieldCodec for BytesCodec {
    fn name(&self) -> &'static str {
        CODEC_NAME
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        match value {
            Value::Bytes(b) => Ok(b.clone()),
            _ => Err(CodecError::TypeMismatch {
                codec: CODEC_NAME,
                found: value.value_type(),
            }),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        Ok(Value::Bytes(bytes.to_vec()))
    }
}
