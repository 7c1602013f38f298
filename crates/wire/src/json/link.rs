//! Links
//!
//! Write-only: servers emit links but never accept them from clients.

use super::codec::{CodecError, CodecResult, JsonApiCodec};
use super::metadata::MetadataCodec;
use jsonapi_core::{Link, Metadata};
use struson::reader::JsonReader;
use struson::writer::JsonWriter;

/// Writes a link as `"href"` or `{"href": ..., "meta": ...}`
#[derive(Debug, Clone)]
pub struct LinkCodec<M = MetadataCodec> {
    metadata: M,
}

impl<M> LinkCodec<M> {
    /// Create a link codec
    pub fn new(metadata: M) -> Self {
        Self { metadata }
    }
}

impl Default for LinkCodec {
    fn default() -> Self {
        LinkCodec::new(MetadataCodec)
    }
}

impl<M: JsonApiCodec<Metadata>> JsonApiCodec<Link> for LinkCodec<M> {
    fn serialize<W: JsonWriter>(&self, link: &Link, writer: &mut W) -> CodecResult<()> {
        match link.metadata() {
            None => writer.string_value(link.href())?,
            Some(metadata) => {
                writer.begin_object()?;
                writer.name("href")?;
                writer.string_value(link.href())?;
                writer.name("meta")?;
                self.metadata.serialize(metadata, writer)?;
                writer.end_object()?;
            }
        }
        Ok(())
    }

    fn deserialize<R: JsonReader>(&self, _reader: &mut R, _path: &str) -> CodecResult<Link> {
        Err(CodecError::unsupported("deserializing links"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::test_util::{from_json, to_json};
    use jsonapi_core::SerializationError;
    use serde_json::{json, Value};

    fn codec() -> LinkCodec {
        LinkCodec::new(MetadataCodec)
    }

    #[test]
    fn test_default_writes_meta() {
        let codec: LinkCodec = Default::default();
        let link = Link::with_metadata("/posts/1", Metadata::from_value(json!({"count": 1})));
        assert_eq!(to_json(&codec, &link).unwrap(), r#"{"href":"/posts/1","meta":{"count":1}}"#);
    }

    #[test]
    fn test_plain_link_is_string() {
        let link = Link::new("http://example.com/posts/1");
        assert_eq!(to_json(&codec(), &link).unwrap(), r#""http://example.com/posts/1""#);
    }

    #[test]
    fn test_link_with_meta() {
        let link = Link::with_metadata("/posts/1", Metadata::from_value(json!({"count": 10})));
        assert_eq!(
            to_json(&codec(), &link).unwrap(),
            r#"{"href":"/posts/1","meta":{"count":10}}"#
        );
    }

    #[test]
    fn test_link_with_null_meta_is_fatal() {
        let link = Link::with_metadata("/posts/1", Metadata::from_value(Value::Null));
        let err = to_json(&codec(), &link).unwrap_err();
        assert!(matches!(err, CodecError::Serialization(SerializationError::NullMetadata)));
    }

    #[test]
    fn test_deserialize_unsupported() {
        let err = from_json(&codec(), r#""/posts/1""#, "/links/self").unwrap_err();
        assert!(matches!(err, CodecError::Unsupported { .. }));
    }
}
