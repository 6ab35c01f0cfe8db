use dsrec_types::codec::CodecError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the engine. None of them are retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// A field value lies outside its codec's domain. Raised before any I/O.
    #[error("field {field} could not be encoded: {source}")]
    Encode {
        field: usize,
        #[source]
        source: CodecError,
    },
    /// The record does not have one value per codec. Raised before any I/O.
    #[error("record has {actual} fields but the codec list has {expected}")]
    Arity { expected: usize, actual: usize },
    /// A field codec rejected its segment.
    #[error("field {field} could not be decoded: {source}")]
    Decode {
        field: usize,
        #[source]
        source: CodecError,
    },
    /// The chunk does not follow the length-prefixed field layout.
    #[error("corrupt record: {reason}")]
    CorruptRecord { reason: String },
    #[error("index {index} is out of range for {len} records")]
    IndexOutOfRange { index: i128, len: u64 },
    /// The index file size is not a whole number of entries.
    #[error("index file {path:?} is {size} bytes, which is not a multiple of the entry width")]
    CorruptIndex { path: PathBuf, size: u64 },
    /// The data file ends before the extent an index entry names.
    #[error("data file {path:?} has {available} bytes at offset {offset}, expected {length}")]
    TruncatedRead {
        path: PathBuf,
        offset: u64,
        length: u64,
        available: u64,
    },
    /// Another dataset holds a conflicting lock on the file.
    #[error("{path:?} is locked by another dataset")]
    Locked {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} is opened read-only")]
    ReadOnly { path: PathBuf },
    /// An earlier append failed and its partial write could not be removed.
    #[error("{path:?} refuses appends after a failed write could not be rolled back")]
    Poisoned { path: PathBuf },
    /// The record has no field at this position.
    #[error("field {field} is out of range for records of {arity} fields")]
    FieldOutOfRange { field: usize, arity: usize },
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

/// Attaches the failed operation and its path to an [`io::Error`].
pub trait IoContext<T> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|source| Error::Io {
            context: f(),
            source,
        })
    }
}
