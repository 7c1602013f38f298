//! The codec contract and its error type

use jsonapi_core::{DeserializationError, SerializationError};
use struson::reader::{JsonReader, ReaderError, ValueType};
use struson::writer::JsonWriter;
use thiserror::Error;

/// Codec error types
#[derive(Debug, Error)]
pub enum CodecError {
    /// Incoming document breaks a JSON:API rule (client fault)
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),

    /// In-memory model cannot be written (programmer fault)
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Operation the server never performs, e.g. reading an error document
    #[error("{operation} is not supported")]
    Unsupported {
        /// What was attempted
        operation: &'static str,
    },

    /// Malformed JSON or a read failure on the underlying stream
    #[error("malformed JSON: {0}")]
    Reader(#[from] ReaderError),

    /// Write failure on the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Number the writer refused
    #[error("invalid number: {0}")]
    Number(String),
}

impl CodecError {
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        CodecError::Unsupported { operation }
    }

    /// The JSON:API-level deserialization error, if that is what this is
    pub fn as_deserialization(&self) -> Option<&DeserializationError> {
        match self {
            CodecError::Deserialization(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Reads and writes one JSON:API structural concept
///
/// Implementations are stateless: every call works only on its own reader,
/// writer and arguments, so one instance can be shared across threads.
/// `deserialize` must consume exactly the value it was positioned at.
pub trait JsonApiCodec<T> {
    /// Write `value` at the writer's current position
    fn serialize<W: JsonWriter>(&self, value: &T, writer: &mut W) -> CodecResult<()>;

    /// Read a value at the reader's current position; `path` is its JSON pointer
    fn deserialize<R: JsonReader>(&self, reader: &mut R, path: &str) -> CodecResult<T>;

    /// Write `value`, or JSON `null` for `None`
    fn serialize_option<W: JsonWriter>(&self, value: Option<&T>, writer: &mut W) -> CodecResult<()> {
        match value {
            Some(value) => self.serialize(value, writer),
            None => Ok(writer.null_value()?),
        }
    }

    /// Read a value, mapping JSON `null` to `None`
    fn deserialize_option<R: JsonReader>(&self, reader: &mut R, path: &str) -> CodecResult<Option<T>> {
        if matches!(reader.peek()?, ValueType::Null) {
            reader.next_null()?;
            return Ok(None);
        }
        self.deserialize(reader, path).map(Some)
    }
}
