//! `meta` objects

use super::codec::{CodecResult, JsonApiCodec};
use super::value::{read_value, token_kind, write_value};
use jsonapi_core::attribute::json_type_name;
use jsonapi_core::{DeserializationError, Metadata, SerializationError};
use serde_json::Value;
use struson::reader::{JsonReader, ValueType};
use struson::writer::JsonWriter;

/// Reads and writes opaque `meta` objects
///
/// Absent metadata goes through `serialize_option` / `deserialize_option`
/// and maps to JSON `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataCodec;

impl JsonApiCodec<Metadata> for MetadataCodec {
    fn serialize<W: JsonWriter>(&self, metadata: &Metadata, writer: &mut W) -> CodecResult<()> {
        match metadata.object() {
            Value::Null => Err(SerializationError::NullMetadata.into()),
            object @ Value::Object(_) => write_value(object, writer),
            other => Err(SerializationError::MetadataNotObject(json_type_name(other)).into()),
        }
    }

    fn deserialize<R: JsonReader>(&self, reader: &mut R, path: &str) -> CodecResult<Metadata> {
        match reader.peek()? {
            ValueType::Object => Ok(Metadata::from_value(read_value(reader, path)?)),
            other => Err(DeserializationError::new(
                path,
                format!("Expected an object for metadata, but got {}", token_kind(other)),
            )
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::test_util::{from_json, option_from_json, option_to_json, to_json};
    use crate::json::CodecError;
    use serde_json::json;

    #[test]
    fn test_serialize_object_verbatim() {
        let meta = Metadata::from_value(json!({"count": 3, "tags": ["a", "b"]}));
        assert_eq!(to_json(&MetadataCodec, &meta).unwrap(), r#"{"count":3,"tags":["a","b"]}"#);
    }

    #[test]
    fn test_serialize_absent_is_null() {
        assert_eq!(option_to_json(&MetadataCodec, None).unwrap(), "null");
    }

    #[test]
    fn test_serialize_wrapped_null_is_fatal() {
        let meta = Metadata::from_value(Value::Null);
        let err = to_json(&MetadataCodec, &meta).unwrap_err();
        assert!(matches!(err, CodecError::Serialization(SerializationError::NullMetadata)));
        assert_eq!(err.to_string(), "the meta object cannot be null");
    }

    #[test]
    fn test_serialize_wrapped_array_rejected() {
        let meta = Metadata::from_value(json!([1]));
        let err = to_json(&MetadataCodec, &meta).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Serialization(SerializationError::MetadataNotObject("Array"))
        ));
    }

    #[test]
    fn test_deserialize_object() {
        let meta = from_json(&MetadataCodec, r#"{"a": {"b": null}}"#, "/meta").unwrap();
        assert_eq!(meta.object(), &json!({"a": {"b": null}}));
    }

    #[test]
    fn test_deserialize_null_is_absent() {
        assert_eq!(option_from_json(&MetadataCodec, "null", "/meta").unwrap(), None);
    }

    #[test]
    fn test_deserialize_wrong_token() {
        let err = option_from_json(&MetadataCodec, "42", "/data/meta").unwrap_err();
        let de = err.as_deserialization().unwrap();
        assert_eq!(de.pointer(), "/data/meta");
        assert_eq!(de.message(), "Expected an object for metadata, but got Number");
    }
}
