use crate::value::ValueType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The value is of a type the codec does not handle.
    #[error("{codec} codec cannot encode a {found} value")]
    TypeMismatch {
        codec: &'static str,
        found: ValueType,
    },
    /// The value has the right type but lies outside the codec's domain.
    #[error("{codec} codec cannot represent {value}")]
    OutOfRange { codec: &'static str, value: String },
    /// A fixed-width payload has the wrong number of bytes.
    #[error("{codec} codec expected {expected} bytes, got {actual}")]
    WidthMismatch {
        codec: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("malformed {codec} payload: {reason}")]
    Malformed { codec: &'static str, reason: String },
    #[error("unsupported {codec} codec configuration: {reason}")]
    UnsupportedConfig { codec: &'static str, reason: String },
}

impl CodecError {
    /// Whether the error is raised while turning a value into bytes,
    /// as opposed to while turning bytes into a value.
    pub fn is_encode_side(&self) -> bool {
        match self {
            Self::TypeMismatch { .. } | Self::OutOfRange { .. } => true,
            Self::WidthMismatch { .. } | Self::Malformed { .. } => false,
            Self::UnsupportedConfig { .. } => true,
        }
    }
}
