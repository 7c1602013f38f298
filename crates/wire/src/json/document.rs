//! Top-level documents
//!
//! ```text
//! {"data": <resource | null | [resources]>, "included": [...], "meta": {...}}
//! {"errors": [...], "meta": {...}}
//! ```
//!
//! `included` and `meta` are written only when there is something to carry.
//! Reads accept any member order and skip unknown top-level members.

use super::codec::{CodecError, CodecResult, JsonApiCodec};
use super::error::ErrorObjectCodec;
use super::metadata::MetadataCodec;
use super::resource::ResourceObjectCodec;
use super::value::{expect_array, expect_object};
use jsonapi_core::{
    pointer, ErrorDocument, ErrorObject, Metadata, ResourceCollectionDocument, ResourceObject,
    SingleResourceDocument,
};
use struson::reader::JsonReader;
use struson::writer::JsonWriter;
use tracing::{debug, trace};

fn write_resources<O, W>(codec: &O, resources: &[ResourceObject], writer: &mut W) -> CodecResult<()>
where
    O: JsonApiCodec<ResourceObject>,
    W: JsonWriter,
{
    writer.begin_array()?;
    for resource in resources {
        codec.serialize(resource, writer)?;
    }
    writer.end_array()?;
    Ok(())
}

/// Read an array of resource objects, each at `<path>/<index>`
fn read_resources<O, R>(codec: &O, reader: &mut R, path: &str, what: &str) -> CodecResult<Vec<ResourceObject>>
where
    O: JsonApiCodec<ResourceObject>,
    R: JsonReader,
{
    expect_array(reader, path, what)?;
    let mut resources = Vec::new();
    while reader.has_next()? {
        let item_path = pointer::index(path, resources.len());
        resources.push(codec.deserialize(reader, &item_path)?);
    }
    reader.end_array()?;
    Ok(resources)
}

fn write_included_and_meta<O, M, W>(
    resource_codec: &O,
    metadata_codec: &M,
    included: &[ResourceObject],
    metadata: Option<&Metadata>,
    writer: &mut W,
) -> CodecResult<()>
where
    O: JsonApiCodec<ResourceObject>,
    M: JsonApiCodec<Metadata>,
    W: JsonWriter,
{
    if !included.is_empty() {
        writer.name("included")?;
        write_resources(resource_codec, included, writer)?;
    }
    if let Some(metadata) = metadata {
        writer.name("meta")?;
        metadata_codec.serialize(metadata, writer)?;
    }
    Ok(())
}

// ============================================================================
// Single resource
// ============================================================================

/// Reads and writes documents whose primary data is one resource or `null`
#[derive(Debug, Clone)]
pub struct SingleResourceDocumentCodec<O = ResourceObjectCodec, M = MetadataCodec> {
    resource: O,
    metadata: M,
}

impl<O, M> SingleResourceDocumentCodec<O, M> {
    /// Create a single-resource document codec
    pub fn new(resource: O, metadata: M) -> Self {
        Self { resource, metadata }
    }
}

impl Default for SingleResourceDocumentCodec {
    fn default() -> Self {
        SingleResourceDocumentCodec::new(ResourceObjectCodec::default(), MetadataCodec)
    }
}

impl<O, M> JsonApiCodec<SingleResourceDocument> for SingleResourceDocumentCodec<O, M>
where
    O: JsonApiCodec<ResourceObject>,
    M: JsonApiCodec<Metadata>,
{
    fn serialize<W: JsonWriter>(&self, document: &SingleResourceDocument, writer: &mut W) -> CodecResult<()> {
        writer.begin_object()?;
        writer.name("data")?;
        self.resource.serialize_option(document.primary_data(), writer)?;
        write_included_and_meta(
            &self.resource,
            &self.metadata,
            document.related_data(),
            document.metadata(),
            writer,
        )?;
        writer.end_object()?;
        Ok(())
    }

    fn deserialize<R: JsonReader>(&self, reader: &mut R, path: &str) -> CodecResult<SingleResourceDocument> {
        expect_object(reader, path, "document")?;

        let mut primary = None;
        let mut included = Vec::new();
        let mut metadata = None;
        while reader.has_next()? {
            let name = reader.next_name()?.to_owned();
            match name.as_str() {
                "data" => primary = self.resource.deserialize_option(reader, &pointer::child(path, "data"))?,
                "included" => {
                    included = read_resources(&self.resource, reader, &pointer::child(path, "included"), "`included`")?
                }
                "meta" => metadata = self.metadata.deserialize_option(reader, &pointer::child(path, "meta"))?,
                _ => {
                    trace!(member = %name, path, "skipping document member");
                    reader.skip_value()?;
                }
            }
        }
        reader.end_object()?;

        debug!(
            has_primary = primary.is_some(),
            included = included.len(),
            "read single-resource document"
        );
        Ok(SingleResourceDocument::new(primary, included, metadata))
    }
}

// ============================================================================
// Resource collection
// ============================================================================

/// Reads and writes documents whose primary data is an array of resources
#[derive(Debug, Clone)]
pub struct ResourceCollectionDocumentCodec<O = ResourceObjectCodec, M = MetadataCodec> {
    resource: O,
    metadata: M,
}

impl<O, M> ResourceCollectionDocumentCodec<O, M> {
    /// Create a resource-collection document codec
    pub fn new(resource: O, metadata: M) -> Self {
        Self { resource, metadata }
    }
}

impl Default for ResourceCollectionDocumentCodec {
    fn default() -> Self {
        ResourceCollectionDocumentCodec::new(ResourceObjectCodec::default(), MetadataCodec)
    }
}

impl<O, M> JsonApiCodec<ResourceCollectionDocument> for ResourceCollectionDocumentCodec<O, M>
where
    O: JsonApiCodec<ResourceObject>,
    M: JsonApiCodec<Metadata>,
{
    fn serialize<W: JsonWriter>(&self, document: &ResourceCollectionDocument, writer: &mut W) -> CodecResult<()> {
        writer.begin_object()?;
        writer.name("data")?;
        write_resources(&self.resource, document.primary_data(), writer)?;
        write_included_and_meta(
            &self.resource,
            &self.metadata,
            document.related_data(),
            document.metadata(),
            writer,
        )?;
        writer.end_object()?;
        Ok(())
    }

    fn deserialize<R: JsonReader>(&self, reader: &mut R, path: &str) -> CodecResult<ResourceCollectionDocument> {
        expect_object(reader, path, "document")?;

        let mut primary = Vec::new();
        let mut included = Vec::new();
        let mut metadata = None;
        while reader.has_next()? {
            let name = reader.next_name()?.to_owned();
            match name.as_str() {
                "data" => primary = read_resources(&self.resource, reader, &pointer::child(path, "data"), "`data`")?,
                "included" => {
                    included = read_resources(&self.resource, reader, &pointer::child(path, "included"), "`included`")?
                }
                "meta" => metadata = self.metadata.deserialize_option(reader, &pointer::child(path, "meta"))?,
                _ => {
                    trace!(member = %name, path, "skipping document member");
                    reader.skip_value()?;
                }
            }
        }
        reader.end_object()?;

        debug!(
            primary = primary.len(),
            included = included.len(),
            "read resource-collection document"
        );
        Ok(ResourceCollectionDocument::new(primary, included, metadata))
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Writes `{"errors": [...]}` documents
#[derive(Debug, Clone)]
pub struct ErrorDocumentCodec<E = ErrorObjectCodec, M = MetadataCodec> {
    error: E,
    metadata: M,
}

impl<E, M> ErrorDocumentCodec<E, M> {
    /// Create an error document codec
    pub fn new(error: E, metadata: M) -> Self {
        Self { error, metadata }
    }
}

impl Default for ErrorDocumentCodec {
    fn default() -> Self {
        ErrorDocumentCodec::new(ErrorObjectCodec::default(), MetadataCodec)
    }
}

impl<E, M> JsonApiCodec<ErrorDocument> for ErrorDocumentCodec<E, M>
where
    E: JsonApiCodec<ErrorObject>,
    M: JsonApiCodec<Metadata>,
{
    fn serialize<W: JsonWriter>(&self, document: &ErrorDocument, writer: &mut W) -> CodecResult<()> {
        writer.begin_object()?;
        writer.name("errors")?;
        writer.begin_array()?;
        for error in document.errors() {
            self.error.serialize(error, writer)?;
        }
        writer.end_array()?;
        if let Some(metadata) = document.metadata() {
            writer.name("meta")?;
            self.metadata.serialize(metadata, writer)?;
        }
        writer.end_object()?;
        Ok(())
    }

    fn deserialize<R: JsonReader>(&self, _reader: &mut R, _path: &str) -> CodecResult<ErrorDocument> {
        Err(CodecError::unsupported("deserializing error documents"))
    }
}
