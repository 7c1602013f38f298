//! Unified error types for the JSON:API codec.
//!
//! This module flattens the per-crate errors into one enum so callers can
//! decide what to do with a failure without knowing which layer raised it.

use jsonapi_core::{DeserializationError, ErrorObject, ModelError, SerializationError};
use jsonapi_wire::CodecError;
use thiserror::Error;

/// Title for error objects describing input that is not JSON at all
pub const MALFORMED_JSON_TITLE: &str = "Malformed JSON";

/// All JSON:API codec errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Incoming document breaks a JSON:API structural rule
    #[error(transparent)]
    InvalidDocument(#[from] DeserializationError),

    /// Incoming bytes are not well-formed JSON, or nest too deep
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// In-memory document cannot be written
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Invalid value passed to a constructor
    #[error("invalid model: {0}")]
    Model(#[from] ModelError),

    /// Operation that is never performed, e.g. reading an error document
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// I/O error on the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for JSON:API codec operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the client sent something unusable.
    ///
    /// These map to a 400 response; everything else is a server problem.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Error::InvalidDocument(_) | Error::MalformedJson(_))
    }

    /// Check if this error signals a bug in the calling code.
    ///
    /// Fatal errors must not be turned into a client-facing response.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Serialization(_) | Error::Model(_) | Error::Internal(_)
        )
    }

    /// The structural error with its JSON pointer, if that is what this is
    pub fn as_invalid_document(&self) -> Option<&DeserializationError> {
        match self {
            Error::InvalidDocument(e) => Some(e),
            _ => None,
        }
    }

    /// Describe a client fault as an error object for an error document.
    ///
    /// Returns `None` for anything that is not the client's fault.
    pub fn to_error_object(&self) -> Option<ErrorObject> {
        match self {
            Error::InvalidDocument(e) => Some(ErrorObject::from_deserialization_error(e)),
            Error::MalformedJson(msg) => Some(
                ErrorObject::builder()
                    .status(jsonapi_core::error_object::BAD_REQUEST)
                    .title(MALFORMED_JSON_TITLE)
                    .detail(msg.clone())
                    .build(),
            ),
            _ => None,
        }
    }
}

// Convert from the wire crate's codec error
impl From<CodecError> for Error {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::Deserialization(e) => Error::InvalidDocument(e),
            CodecError::Serialization(e) => Error::Serialization(e),
            CodecError::Unsupported { operation } => Error::Unsupported(operation.to_string()),
            CodecError::Reader(e) => Error::MalformedJson(e.to_string()),
            CodecError::Io(e) => Error::Io(e),
            CodecError::Number(msg) => Error::Internal(format!("invalid number: {}", msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialization_is_client_fault() {
        let err: Error = CodecError::from(DeserializationError::new("/data/type", "Expected a value for `type`")).into();
        assert!(err.is_client_fault());
        assert!(!err.is_fatal());
        assert_eq!(err.as_invalid_document().map(|e| e.pointer()), Some("/data/type"));
    }

    #[test]
    fn test_serialization_is_fatal() {
        let err: Error = CodecError::from(SerializationError::NullMetadata).into();
        assert!(err.is_fatal());
        assert!(!err.is_client_fault());
        assert!(err.to_error_object().is_none());
    }

    #[test]
    fn test_model_error_is_fatal() {
        let err: Error = ModelError::EmptyType.into();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unsupported_is_neither() {
        let err: Error = CodecError::Unsupported {
            operation: "deserializing error documents",
        }
        .into();
        assert!(!err.is_client_fault());
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "unsupported: deserializing error documents");
    }

    #[test]
    fn test_error_object_for_invalid_document() {
        let err = Error::InvalidDocument(DeserializationError::new("/data", "bad"));
        let object = err.to_error_object().unwrap();
        assert_eq!(object.status(), Some(400));
        assert_eq!(object.detail(), Some("bad"));
        assert_eq!(object.pointer(), Some("/data"));
    }

    #[test]
    fn test_error_object_for_malformed_json() {
        let err = Error::MalformedJson("unexpected end".to_string());
        let object = err.to_error_object().unwrap();
        assert_eq!(object.title(), Some(MALFORMED_JSON_TITLE));
        assert!(!object.has_source());
    }
}
