use crate::{Error, Result};
use dsrec_types::codec::{LenPrefix, SharedCodec};
use dsrec_types::value::{Record, Value};

/// Composes one field codec per record position into a whole-record codec.
///
/// ```text
/// struct Chunk {
///     field_0:    {
///         field_len:      u64,
///         field_body:     [u8; field_len],
///     },
///     field_1:    ...
///     // One field per codec, in codec order. Nothing follows the last field.
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RecordCodec {
    field_codecs: Vec<SharedCodec>,
}

impl RecordCodec {
    pub fn new(field_codecs: impl IntoIterator<Item = SharedCodec>) -> Self {
        Self {
            field_codecs: field_codecs.into_iter().collect(),
        }
    }

    pub fn arity(&self) -> usize {
        self.field_codecs.len()
    }

    pub fn field_codecs(&self) -> &[SharedCodec] {
        &self.field_codecs
    }

    pub fn encode(&self, record: &[Value]) -> Result<Vec<u8>> {
        if record.len() != self.arity() {
            return Err(Error::Arity {
                expected: self.arity(),
                actual: record.len(),
            });
        }

        let mut chunk = vec![];
        for (field, (codec, value)) in self.field_codecs.iter().zip(record).enumerate() {
            let body = codec
                .encode(value)
                .map_err(|source| Error::Encode { field, source })?;

            /* field_len */
            LenPrefix::of(&body).ser(&mut chunk);

            /* field_body */
            chunk.extend_from_slice(&body);
        }
        Ok(chunk)
    }

    pub fn decode(&self, chunk: &[u8]) -> Result<Record> {
        let mut rest = chunk;
        let mut values = Vec::with_capacity(self.arity());
        for (field, codec) in self.field_codecs.iter().enumerate() {
            let (body, tail) = split_field(rest, field)?;
            let value = codec
                .decode(body)
                .map_err(|source| Error::Decode { field, source })?;
            values.push(value);
            rest = tail;
        }

        if !rest.is_empty() {
            return Err(Error::CorruptRecord {
                reason: format!("{} trailing bytes after the last field", rest.len()),
            });
        }

        Ok(Record::from(values))
    }

    /// Decodes only the value at `field`, skipping the bodies before it undecoded.
    ///
    /// Bytes after the requested field are not inspected.
    pub fn decode_field(&self, chunk: &[u8], field: usize) -> Result<Value> {
        let codec = self.field_codec(field)?;

        let mut rest = chunk;
        for skipped in 0..field {
            let (_, tail) = split_field(rest, skipped)?;
            rest = tail;
        }

        let (body, _) = split_field(rest, field)?;
        codec
            .decode(body)
            .map_err(|source| Error::Decode { field, source })
    }

    pub(crate) fn field_codec(&self, field: usize) -> Result<&SharedCodec> {
        self.field_codecs
            .get(field)
            .ok_or_else(|| Error::FieldOutOfRange {
                field,
                arity: self.arity(),
            })
    }
}

/// Splits the next `(field_len, field_body)` off `rest`.
/// Returns the body and what follows it.
fn split_field(rest: &[u8], field: usize) -> Result<(&[u8], &[u8])> {
    /* field_len */
    let (body_len, tail) = LenPrefix::deser(rest).ok_or_else(|| Error::CorruptRecord {
        reason: format!(
            "{} bytes left where the length of field {field} is expected",
            rest.len()
        ),
    })?;

    /* field_body */
    if *body_len > tail.len() as u64 {
        return Err(Error::CorruptRecord {
            reason: format!(
                "field {field} claims {} bytes but only {} remain",
                *body_len,
                tail.len()
            ),
        });
    }
    Ok(tail.split_at(*body_len as usize))
}
