//! Error objects
//!
//! Write-only. `status` is written as a string, `source` only when a pointer
//! or parameter is set.

use super::codec::{CodecError, CodecResult, JsonApiCodec};
use super::link::LinkCodec;
use super::metadata::MetadataCodec;
use jsonapi_core::{ErrorObject, Link, Metadata};
use struson::reader::JsonReader;
use struson::writer::JsonWriter;

/// Writes error objects
#[derive(Debug, Clone)]
pub struct ErrorObjectCodec<L = LinkCodec, M = MetadataCodec> {
    link: L,
    metadata: M,
}

impl<L, M> ErrorObjectCodec<L, M> {
    /// Create an error object codec
    pub fn new(link: L, metadata: M) -> Self {
        Self { link, metadata }
    }
}

impl Default for ErrorObjectCodec {
    fn default() -> Self {
        ErrorObjectCodec::new(LinkCodec::default(), MetadataCodec)
    }
}

fn write_optional_string<W: JsonWriter>(writer: &mut W, name: &str, value: Option<&str>) -> CodecResult<()> {
    if let Some(value) = value {
        writer.name(name)?;
        writer.string_value(value)?;
    }
    Ok(())
}

impl<L, M> JsonApiCodec<ErrorObject> for ErrorObjectCodec<L, M>
where
    L: JsonApiCodec<Link>,
    M: JsonApiCodec<Metadata>,
{
    fn serialize<W: JsonWriter>(&self, error: &ErrorObject, writer: &mut W) -> CodecResult<()> {
        writer.begin_object()?;

        write_optional_string(writer, "id", error.id())?;

        if let Some(link) = error.about_link() {
            writer.name("links")?;
            writer.begin_object()?;
            writer.name("about")?;
            self.link.serialize(link, writer)?;
            writer.end_object()?;
        }

        if let Some(status) = error.status() {
            writer.name("status")?;
            writer.string_value(&status.to_string())?;
        }

        write_optional_string(writer, "code", error.code())?;
        write_optional_string(writer, "title", error.title())?;
        write_optional_string(writer, "detail", error.detail())?;

        if error.has_source() {
            writer.name("source")?;
            writer.begin_object()?;
            write_optional_string(writer, "pointer", error.pointer())?;
            write_optional_string(writer, "parameter", error.parameter())?;
            writer.end_object()?;
        }

        if let Some(metadata) = error.metadata() {
            writer.name("meta")?;
            self.metadata.serialize(metadata, writer)?;
        }

        writer.end_object()?;
        Ok(())
    }

    fn deserialize<R: JsonReader>(&self, _reader: &mut R, _path: &str) -> CodecResult<ErrorObject> {
        Err(CodecError::unsupported("deserializing error objects"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::test_util::{from_json, to_json};
    use jsonapi_core::{DeserializationError, SerializationError};
    use serde_json::{json, Value};

    fn codec() -> ErrorObjectCodec {
        ErrorObjectCodec::new(LinkCodec::new(MetadataCodec), MetadataCodec)
    }

    #[test]
    fn test_default_wiring() {
        let codec = ErrorObjectCodec::default();
        let error = ErrorObject::builder().about_link(Link::new("/docs")).status(400).build();
        assert_eq!(
            to_json(&codec, &error).unwrap(),
            r#"{"links":{"about":"/docs"},"status":"400"}"#
        );
    }

    #[test]
    fn test_empty_error_object() {
        assert_eq!(to_json(&codec(), &ErrorObject::default()).unwrap(), "{}");
    }

    #[test]
    fn test_full_member_order() {
        let error = ErrorObject::builder()
            .id("e1")
            .about_link(Link::new("/docs/errors/e1"))
            .status(422)
            .code("invalid")
            .title("Invalid Attribute")
            .detail("First name must contain at least three characters.")
            .pointer("/data/attributes/firstName")
            .parameter("include")
            .metadata(Metadata::from_value(json!({"retry": false})))
            .build();

        assert_eq!(
            to_json(&codec(), &error).unwrap(),
            concat!(
                r#"{"id":"e1","links":{"about":"/docs/errors/e1"},"status":"422","code":"invalid","#,
                r#""title":"Invalid Attribute","detail":"First name must contain at least three characters.","#,
                r#""source":{"pointer":"/data/attributes/firstName","parameter":"include"},"meta":{"retry":false}}"#
            )
        );
    }

    #[test]
    fn test_source_with_pointer_only() {
        let error = ErrorObject::builder().pointer("/data").build();
        assert_eq!(to_json(&codec(), &error).unwrap(), r#"{"source":{"pointer":"/data"}}"#);
    }

    #[test]
    fn test_from_deserialization_error() {
        let de = DeserializationError::new("/data/type", "Expected a value for `type`");
        let error = ErrorObject::from_deserialization_error(&de);
        assert_eq!(
            to_json(&codec(), &error).unwrap(),
            concat!(
                r#"{"status":"400","title":"Invalid JSON:API document","#,
                r#""detail":"Expected a value for `type`","source":{"pointer":"/data/type"}}"#
            )
        );
    }

    #[test]
    fn test_null_meta_is_fatal() {
        let error = ErrorObject::builder().metadata(Metadata::from_value(Value::Null)).build();
        let err = to_json(&codec(), &error).unwrap_err();
        assert!(matches!(err, CodecError::Serialization(SerializationError::NullMetadata)));
    }

    #[test]
    fn test_deserialize_unsupported() {
        let err = from_json(&codec(), "{}", "/errors/0").unwrap_err();
        assert_eq!(err.to_string(), "deserializing error objects is not supported");
    }
}
