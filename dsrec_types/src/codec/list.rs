use crate::codec::{CodecError, FieldCodec, LenPrefix, SharedCodec};
use crate::value::Value;

const CODEC_NAME: &str = "list";

/// A variable-length sequence whose items all go through one inner codec.
///
/// Lists nest: the inner codec may itself be a [`ListCodec`].
#[derive(Clone, Debug)]
pub struct ListCodec {
    item_codec: SharedCodec,
}

impl ListCodec {
    pub fn new(item_codec: SharedCodec) -> Self {
        Self { item_codec }
    }

    pub fn item_codec(&self) -> &SharedCodec {
        &self.item_codec
    }
}

impl FieldCodec for ListCodec {
    fn name(&self) -> &'static str {
        CODEC_NAME
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        let items = match value {
            Value::List(items) => items,
            _ => {
                return Err(CodecError::TypeMismatch {
                    codec: CODEC_NAME,
                    found: value.value_type(),
                })
            }
        };

        let mut buf = vec![];

        /* items_count */
        LenPrefix::from(items.len() as u64).ser(&mut buf);

        /* items */
        for item in items {
            let item_buf = self.item_codec.encode(item)?;
            LenPrefix::of(&item_buf).ser(&mut buf);
            buf.extend_from_slice(&item_buf);
        }

        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        let malformed = |reason: String| CodecError::Malformed {
            codec: CODEC_NAME,
            reason,
        };

        /* items_count */
        let (items_ct, mut rest) = LenPrefix::deser(bytes)
            .ok_or_else(|| malformed(format!("{} bytes hold no items count", bytes.len())))?;

        /* items */
        // Every item costs at least one prefix, which bounds a bogus count.
        let capacity = (*items_ct).min((rest.len() / LenPrefix::WIDTH) as u64) as usize;
        let mut items = Vec::with_capacity(capacity);
        for item_i in 0..*items_ct {
            let (item_buf, tail) = LenPrefix::deser_segment(rest).ok_or_else(|| {
                malformed(format!("item {item_i} of {} is cut short", *items_ct))
            })?;
            items.push(self.item_codec.decode(item_buf)?);
            rest = tail;
        }

        if !rest.is_empty() {
            return Err(malformed(format!("{} trailing bytes", rest.len())));
        }

        Ok(Value::List(items))
    }
}
