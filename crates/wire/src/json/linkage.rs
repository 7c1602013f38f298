//! Resource linkage
//!
//! | JSON | Linkage |
//! |------|---------|
//! | `null` | to-one, empty |
//! | `{"type", "id"}` | to-one |
//! | `[{"type", "id"}, ...]` | to-many |

use super::codec::{CodecResult, JsonApiCodec};
use super::value::{expect_object, token_kind};
use jsonapi_core::{pointer, DeserializationError, ResourceIdentifier, ResourceLinkage};
use struson::reader::{JsonReader, ValueType};
use struson::writer::JsonWriter;
use tracing::trace;

/// Reads and writes the `data` member of a relationship object
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkageCodec;

impl LinkageCodec {
    fn write_identifier<W: JsonWriter>(identifier: &ResourceIdentifier, writer: &mut W) -> CodecResult<()> {
        writer.begin_object()?;
        writer.name("type")?;
        writer.string_value(identifier.resource_type())?;
        writer.name("id")?;
        writer.string_value(identifier.id())?;
        writer.end_object()?;
        Ok(())
    }

    fn read_identifier<R: JsonReader>(reader: &mut R, path: &str) -> CodecResult<ResourceIdentifier> {
        expect_object(reader, path, "resource identifier")?;

        let mut resource_type = None;
        let mut id = None;
        while reader.has_next()? {
            let name = reader.next_name()?.to_owned();
            match name.as_str() {
                "type" => resource_type = Some(read_identifier_part(reader, path, "type")?),
                "id" => id = Some(read_identifier_part(reader, path, "id")?),
                _ => {
                    trace!(member = %name, path, "skipping resource identifier member");
                    reader.skip_value()?;
                }
            }
        }
        reader.end_object()?;

        let resource_type = resource_type
            .ok_or_else(|| DeserializationError::new(path, "Expected a value for `type`"))?;
        let id = id.ok_or_else(|| DeserializationError::new(path, "Expected a value for `id`"))?;
        ResourceIdentifier::new(resource_type, id)
            .map_err(|e| DeserializationError::new(path, e.to_string()).into())
    }
}

/// Read `type` or `id`: a non-empty string, else an error at `<path>/<part>`
fn read_identifier_part<R: JsonReader>(reader: &mut R, path: &str, part: &str) -> CodecResult<String> {
    let part_path = pointer::child(path, part);
    let kind = reader.peek()?;
    if !matches!(kind, ValueType::String) {
        reader.skip_value()?;
        return Err(DeserializationError::new(
            part_path,
            format!("Expected a string for `{}`, but got {}", part, token_kind(kind)),
        )
        .into());
    }
    let value = reader.next_string()?;
    if value.is_empty() {
        return Err(DeserializationError::new(part_path, format!("Expected a value for `{}`", part)).into());
    }
    Ok(value)
}

impl JsonApiCodec<ResourceLinkage> for LinkageCodec {
    fn serialize<W: JsonWriter>(&self, linkage: &ResourceLinkage, writer: &mut W) -> CodecResult<()> {
        match linkage {
            ResourceLinkage::ToMany(identifiers) => {
                writer.begin_array()?;
                for identifier in identifiers {
                    Self::write_identifier(identifier, writer)?;
                }
                writer.end_array()?;
            }
            ResourceLinkage::ToOne(None) => writer.null_value()?,
            ResourceLinkage::ToOne(Some(identifier)) => Self::write_identifier(identifier, writer)?,
        }
        Ok(())
    }

    fn deserialize<R: JsonReader>(&self, reader: &mut R, path: &str) -> CodecResult<ResourceLinkage> {
        match reader.peek()? {
            ValueType::Array => {
                reader.begin_array()?;
                let mut identifiers = Vec::new();
                while reader.has_next()? {
                    let item_path = pointer::index(path, identifiers.len());
                    identifiers.push(Self::read_identifier(reader, &item_path)?);
                }
                reader.end_array()?;
                Ok(ResourceLinkage::ToMany(identifiers))
            }
            ValueType::Object => Ok(ResourceLinkage::ToOne(Some(Self::read_identifier(reader, path)?))),
            ValueType::Null => {
                reader.next_null()?;
                Ok(ResourceLinkage::ToOne(None))
            }
            other => Err(DeserializationError::new(
                path,
                format!(
                    "Expected an array, object, or null for linkage, but got {}",
                    token_kind(other)
                ),
            )
            .into()),
        }
    }
}
