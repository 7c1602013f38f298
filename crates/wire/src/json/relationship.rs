//! Relationship objects
//!
//! Written as `{"links": {"self", "related"}, "data": <linkage>, "meta": {...}}`
//! with every member optional but at least one present. Read back with
//! `data` and `meta` only; links sent by a client carry nothing the server
//! uses.

use super::codec::{CodecResult, JsonApiCodec};
use super::link::LinkCodec;
use super::linkage::LinkageCodec;
use super::metadata::MetadataCodec;
use super::value::expect_object;
use jsonapi_core::{pointer, Link, Metadata, RelationshipObject, ResourceLinkage, SerializationError};
use struson::reader::JsonReader;
use struson::writer::JsonWriter;
use tracing::trace;

/// Message for a relationship object with nothing to write
pub const EMPTY_RELATIONSHIP_MESSAGE: &str =
    "At least one of `links`, `data`, or `meta` must be present in a relationship object.";

/// Reads and writes relationship objects
#[derive(Debug, Clone)]
pub struct RelationshipObjectCodec<L = LinkCodec, K = LinkageCodec, M = MetadataCodec> {
    link: L,
    linkage: K,
    metadata: M,
}

impl<L, K, M> RelationshipObjectCodec<L, K, M> {
    /// Create a relationship object codec
    pub fn new(link: L, linkage: K, metadata: M) -> Self {
        Self {
            link,
            linkage,
            metadata,
        }
    }
}

impl Default for RelationshipObjectCodec {
    fn default() -> Self {
        RelationshipObjectCodec::new(LinkCodec::default(), LinkageCodec, MetadataCodec)
    }
}

impl<L, K, M> JsonApiCodec<RelationshipObject> for RelationshipObjectCodec<L, K, M>
where
    L: JsonApiCodec<Link>,
    K: JsonApiCodec<ResourceLinkage>,
    M: JsonApiCodec<Metadata>,
{
    fn serialize<W: JsonWriter>(&self, relationship: &RelationshipObject, writer: &mut W) -> CodecResult<()> {
        if !relationship.has_any_member() {
            return Err(SerializationError::Structural(EMPTY_RELATIONSHIP_MESSAGE.to_string()).into());
        }

        writer.begin_object()?;

        let self_link = relationship.self_link();
        let related = relationship.related_resource_link();
        if self_link.is_some() || related.is_some() {
            writer.name("links")?;
            writer.begin_object()?;
            if let Some(link) = self_link {
                writer.name("self")?;
                self.link.serialize(link, writer)?;
            }
            if let Some(link) = related {
                writer.name("related")?;
                self.link.serialize(link, writer)?;
            }
            writer.end_object()?;
        }

        if let Some(linkage) = relationship.linkage() {
            writer.name("data")?;
            self.linkage.serialize(linkage, writer)?;
        }

        if let Some(metadata) = relationship.metadata() {
            writer.name("meta")?;
            self.metadata.serialize(metadata, writer)?;
        }

        writer.end_object()?;
        Ok(())
    }

    fn deserialize<R: JsonReader>(&self, reader: &mut R, path: &str) -> CodecResult<RelationshipObject> {
        expect_object(reader, path, "relationship object")?;

        let mut linkage = None;
        let mut metadata = None;
        while reader.has_next()? {
            let name = reader.next_name()?.to_owned();
            match name.as_str() {
                "data" => linkage = Some(self.linkage.deserialize(reader, &pointer::child(path, "data"))?),
                "meta" => metadata = self.metadata.deserialize_option(reader, &pointer::child(path, "meta"))?,
                _ => {
                    trace!(member = %name, path, "skipping relationship member");
                    reader.skip_value()?;
                }
            }
        }
        reader.end_object()?;

        Ok(RelationshipObject::new(None, None, linkage, metadata))
    }
}
