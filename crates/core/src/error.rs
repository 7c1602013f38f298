//! Error types for the JSON:API data model
//!
//! Three disjoint kinds, matching who is at fault:
//!
//! | Type | Fault | Raised when |
//! |------|-------|-------------|
//! | [`DeserializationError`] | client | incoming JSON breaks a structural rule |
//! | [`SerializationError`] | programmer | the in-memory model breaks an invariant the codec cannot repair |
//! | [`ModelError`] | programmer | a value is constructed with an invalid part |
//!
//! Deserialization errors carry a JSON pointer so the HTTP layer can turn
//! them into an error document with `source.pointer` filled in.

use thiserror::Error;

/// Title used when a deserialization error has no more specific title
pub const DEFAULT_DESERIALIZATION_TITLE: &str = "Invalid JSON:API document";

/// Incoming document violates a JSON:API structural rule
///
/// Recoverable and client-facing. The `pointer` is built incrementally by
/// each codec layer as it descends, e.g. `/data/relationships/author/data/type`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{title}: {message} (at '{pointer}')")]
pub struct DeserializationError {
    title: String,
    message: String,
    pointer: String,
}

impl DeserializationError {
    /// Create an error at `pointer` with the default title
    pub fn new(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_DESERIALIZATION_TITLE.to_string(),
            message: message.into(),
            pointer: pointer.into(),
        }
    }

    /// Replace the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Short summary of the problem
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Human-readable explanation
    pub fn message(&self) -> &str {
        &self.message
    }

    /// JSON pointer to the offending member (`""` is the document root)
    pub fn pointer(&self) -> &str {
        &self.pointer
    }
}

/// The in-memory model cannot be written as a valid document
///
/// These indicate a bug in the code that built the model, not in client
/// input, and must not be swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializationError {
    /// A `Metadata` instance wraps `null`
    #[error("the meta object cannot be null")]
    NullMetadata,

    /// A `Metadata` instance wraps something other than an object
    #[error("the meta object must be a JSON object, got {0}")]
    MetadataNotObject(&'static str),

    /// Any other structural violation
    #[error("{0}")]
    Structural(String),
}

/// Invalid value handed to a model constructor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Resource identifier with an empty `type` or `id`
    #[error("resource identifier {part} cannot be empty")]
    EmptyIdentifierPart {
        /// Which part was empty
        part: &'static str,
    },

    /// Resource object or schema with an empty type
    #[error("resource type cannot be empty")]
    EmptyType,

    /// `id` or `type` used as an attribute or relationship name
    #[error("`{key}` is reserved and cannot be used as {location} name")]
    ReservedKey {
        /// The reserved key
        key: String,
        /// "an attribute" or "a relationship"
        location: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialization_error_defaults() {
        let err = DeserializationError::new("/data/type", "Expected a value for `type`");
        assert_eq!(err.title(), DEFAULT_DESERIALIZATION_TITLE);
        assert_eq!(err.pointer(), "/data/type");
        assert_eq!(err.message(), "Expected a value for `type`");
    }

    #[test]
    fn test_deserialization_error_display_includes_pointer() {
        let err = DeserializationError::new("/data", "bad").with_title("Nope");
        assert_eq!(err.to_string(), "Nope: bad (at '/data')");
    }

    #[test]
    fn test_null_metadata_message() {
        assert_eq!(
            SerializationError::NullMetadata.to_string(),
            "the meta object cannot be null"
        );
    }

    #[test]
    fn test_reserved_key_message() {
        let err = ModelError::ReservedKey {
            key: "id".into(),
            location: "an attribute",
        };
        assert_eq!(
            err.to_string(),
            "`id` is reserved and cannot be used as an attribute name"
        );
    }
}
