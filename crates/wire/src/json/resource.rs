//! Resource objects
//!
//! Member order on write: `type`, `id`, `attributes`, `relationships`,
//! `links`, `meta`. Empty or absent members are omitted; `type` and `id`
//! are always written.

use super::codec::{CodecResult, JsonApiCodec};
use super::link::LinkCodec;
use super::metadata::MetadataCodec;
use super::relationship::RelationshipObjectCodec;
use super::value::{expect_object, read_string, read_value, write_value};
use jsonapi_core::{
    is_reserved_member_name, pointer, DeserializationError, Link, Metadata, RelationshipObject,
    ResourceObject,
};
use serde_json::{Map, Value};
use struson::reader::{JsonReader, ValueType};
use struson::writer::JsonWriter;
use tracing::trace;

/// Reads and writes resource objects
#[derive(Debug, Clone)]
pub struct ResourceObjectCodec<R = RelationshipObjectCodec, L = LinkCodec, M = MetadataCodec> {
    relationship: R,
    link: L,
    metadata: M,
}

impl<R, L, M> ResourceObjectCodec<R, L, M> {
    /// Create a resource object codec
    pub fn new(relationship: R, link: L, metadata: M) -> Self {
        Self {
            relationship,
            link,
            metadata,
        }
    }
}

impl Default for ResourceObjectCodec {
    fn default() -> Self {
        ResourceObjectCodec::new(
            RelationshipObjectCodec::default(),
            LinkCodec::default(),
            MetadataCodec,
        )
    }
}

fn reserved_name_error(path: &str, name: &str, location: &str) -> DeserializationError {
    DeserializationError::new(
        pointer::child(path, name),
        format!("`{}` is reserved and cannot be used as {} name", name, location),
    )
}

impl<Rel, L, M> ResourceObjectCodec<Rel, L, M>
where
    Rel: JsonApiCodec<RelationshipObject>,
{
    fn read_attributes<R: JsonReader>(reader: &mut R, path: &str) -> CodecResult<Map<String, Value>> {
        expect_object(reader, path, "`attributes`")?;
        let mut attributes = Map::new();
        while reader.has_next()? {
            let name = reader.next_name()?.to_owned();
            if is_reserved_member_name(&name) {
                return Err(reserved_name_error(path, &name, "an attribute").into());
            }
            let value = read_value(reader, &pointer::child(path, &name))?;
            attributes.insert(name, value);
        }
        reader.end_object()?;
        Ok(attributes)
    }

    fn read_relationships<R: JsonReader>(
        &self,
        reader: &mut R,
        path: &str,
    ) -> CodecResult<Vec<(String, Option<RelationshipObject>)>> {
        expect_object(reader, path, "`relationships`")?;
        let mut relationships = Vec::new();
        while reader.has_next()? {
            let name = reader.next_name()?.to_owned();
            if is_reserved_member_name(&name) {
                return Err(reserved_name_error(path, &name, "a relationship").into());
            }
            let entry_path = pointer::child(path, &name);
            let relationship = if matches!(reader.peek()?, ValueType::Null) {
                reader.next_null()?;
                None
            } else {
                Some(self.relationship.deserialize(reader, &entry_path)?)
            };
            relationships.push((name, relationship));
        }
        reader.end_object()?;
        Ok(relationships)
    }
}

impl<Rel, L, M> JsonApiCodec<ResourceObject> for ResourceObjectCodec<Rel, L, M>
where
    Rel: JsonApiCodec<RelationshipObject>,
    L: JsonApiCodec<Link>,
    M: JsonApiCodec<Metadata>,
{
    fn serialize<W: JsonWriter>(&self, resource: &ResourceObject, writer: &mut W) -> CodecResult<()> {
        writer.begin_object()?;

        writer.name("type")?;
        writer.string_value(resource.resource_type())?;
        writer.name("id")?;
        writer.string_value(resource.id())?;

        if !resource.attributes().is_empty() {
            writer.name("attributes")?;
            writer.begin_object()?;
            for (name, value) in resource.attributes() {
                writer.name(name)?;
                write_value(value, writer)?;
            }
            writer.end_object()?;
        }

        let mut present = resource
            .relationships()
            .iter()
            .filter_map(|(name, rel)| rel.as_ref().map(|rel| (name, rel)))
            .peekable();
        if present.peek().is_some() {
            writer.name("relationships")?;
            writer.begin_object()?;
            for (name, relationship) in present {
                writer.name(name)?;
                self.relationship.serialize(relationship, writer)?;
            }
            writer.end_object()?;
        }

        if let Some(link) = resource.self_link() {
            writer.name("links")?;
            writer.begin_object()?;
            writer.name("self")?;
            self.link.serialize(link, writer)?;
            writer.end_object()?;
        }

        if let Some(metadata) = resource.metadata() {
            writer.name("meta")?;
            self.metadata.serialize(metadata, writer)?;
        }

        writer.end_object()?;
        Ok(())
    }

    fn deserialize<R: JsonReader>(&self, reader: &mut R, path: &str) -> CodecResult<ResourceObject> {
        expect_object(reader, path, "resource object")?;

        let mut resource_type: Option<String> = None;
        let mut id: Option<String> = None;
        let mut attributes = Map::new();
        let mut relationships = Vec::new();
        let mut metadata = None;

        while reader.has_next()? {
            let name = reader.next_name()?.to_owned();
            match name.as_str() {
                "type" => resource_type = Some(read_string(reader, &pointer::child(path, "type"), "type")?),
                "id" => id = Some(read_string(reader, &pointer::child(path, "id"), "id")?),
                "meta" => metadata = self.metadata.deserialize_option(reader, &pointer::child(path, "meta"))?,
                "attributes" => attributes = Self::read_attributes(reader, &pointer::child(path, "attributes"))?,
                "relationships" => {
                    relationships = self.read_relationships(reader, &pointer::child(path, "relationships"))?
                }
                _ => {
                    trace!(member = %name, path, "skipping resource object member");
                    reader.skip_value()?;
                }
            }
        }
        reader.end_object()?;

        let resource_type = match resource_type {
            Some(t) if !t.is_empty() => t,
            _ => {
                return Err(
                    DeserializationError::new(pointer::child(path, "type"), "Expected a value for `type`").into(),
                )
            }
        };

        let mut builder = ResourceObject::builder(resource_type, id.unwrap_or_default()).attributes(attributes);
        for (name, relationship) in relationships {
            builder = builder.relationship(name, relationship);
        }
        if let Some(metadata) = metadata {
            builder = builder.metadata(metadata);
        }
        builder
            .build()
            .map_err(|e| DeserializationError::new(path, e.to_string()).into())
    }
}
