//! Main entry point for reading and writing JSON:API documents.
//!
//! This module provides the `JsonApi` struct, which owns the standard codec
//! set plus the reader/writer settings, and its builder.

use crate::error::{Error, Result};
use jsonapi_core::{pointer, ErrorDocument, ResourceCollectionDocument, SingleResourceDocument};
use jsonapi_wire::{CodecError, Codecs, JsonApiCodec};
use std::io;
use struson::reader::{JsonReader, JsonStreamReader, ReaderSettings};
use struson::writer::{JsonStreamWriter, JsonWriter, WriterSettings};
use tracing::debug;

/// Default limit on array/object nesting for incoming documents
pub const DEFAULT_MAX_NESTING_DEPTH: u32 = 128;

/// The JSON:API codec facade.
///
/// Stateless apart from its settings: one instance can be cloned freely or
/// shared across threads.
///
/// # Example
///
/// ```
/// use jsonapi::prelude::*;
///
/// let api = JsonApi::new();
/// let doc = api.read_single(r#"{"data": {"type": "posts", "id": "1"}}"#)?;
/// assert_eq!(doc.primary_data().map(|r| r.id()), Some("1"));
///
/// let json = api.write_single(&doc)?;
/// assert_eq!(json, r#"{"data":{"type":"posts","id":"1"}}"#);
/// # Ok::<(), jsonapi::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonApi {
    codecs: Codecs,
    config: JsonApiConfig,
}

/// Settings applied to every read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonApiConfig {
    /// Indent output
    pub pretty: bool,
    /// Nesting limit for incoming documents; `None` disables the check
    pub max_nesting_depth: Option<u32>,
    /// Accept bytes after the top-level value
    pub allow_trailing_data: bool,
}

impl Default for JsonApiConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            max_nesting_depth: Some(DEFAULT_MAX_NESTING_DEPTH),
            allow_trailing_data: false,
        }
    }
}

impl JsonApi {
    /// Create a codec facade with default settings.
    ///
    /// Compact output, nesting depth 128, trailing data rejected.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for codec configuration.
    ///
    /// # Example
    ///
    /// ```
    /// let api = jsonapi::JsonApi::builder()
    ///     .pretty(true)
    ///     .max_nesting_depth(Some(32))
    ///     .build();
    /// assert!(api.config().pretty);
    /// ```
    pub fn builder() -> JsonApiBuilder {
        JsonApiBuilder::new()
    }

    /// Get the active settings.
    pub fn config(&self) -> &JsonApiConfig {
        &self.config
    }

    /// Get the underlying codecs.
    pub fn codecs(&self) -> &Codecs {
        &self.codecs
    }

    // ========================================================================
    // Writing
    // ========================================================================

    /// Write a single-resource document to a string.
    pub fn write_single(&self, document: &SingleResourceDocument) -> Result<String> {
        self.write_string(&self.codecs.single, document)
    }

    /// Write a resource-collection document to a string.
    pub fn write_collection(&self, document: &ResourceCollectionDocument) -> Result<String> {
        self.write_string(&self.codecs.collection, document)
    }

    /// Write an error document to a string.
    pub fn write_errors(&self, document: &ErrorDocument) -> Result<String> {
        self.write_string(&self.codecs.errors, document)
    }

    /// Write a single-resource document to a byte sink.
    ///
    /// The sink is flushed once the document is complete but not closed.
    pub fn write_single_to<W: io::Write>(&self, document: &SingleResourceDocument, out: W) -> Result<()> {
        self.write_to(&self.codecs.single, document, out)
    }

    /// Write a resource-collection document to a byte sink.
    pub fn write_collection_to<W: io::Write>(&self, document: &ResourceCollectionDocument, out: W) -> Result<()> {
        self.write_to(&self.codecs.collection, document, out)
    }

    /// Write an error document to a byte sink.
    pub fn write_errors_to<W: io::Write>(&self, document: &ErrorDocument, out: W) -> Result<()> {
        self.write_to(&self.codecs.errors, document, out)
    }

    // ========================================================================
    // Reading
    // ========================================================================

    /// Read a single-resource document.
    ///
    /// Error pointers are rooted at the document, e.g. `/data/type`.
    pub fn read_single(&self, json: &str) -> Result<SingleResourceDocument> {
        self.read_from(&self.codecs.single, json.as_bytes())
    }

    /// Read a resource-collection document.
    pub fn read_collection(&self, json: &str) -> Result<ResourceCollectionDocument> {
        self.read_from(&self.codecs.collection, json.as_bytes())
    }

    /// Read an error document.
    ///
    /// Always fails with [`Error::Unsupported`]: error documents flow from
    /// server to client only.
    pub fn read_errors(&self, json: &str) -> Result<ErrorDocument> {
        self.read_from(&self.codecs.errors, json.as_bytes())
    }

    /// Read a single-resource document from a byte source.
    pub fn read_single_from<R: io::Read>(&self, input: R) -> Result<SingleResourceDocument> {
        self.read_from(&self.codecs.single, input)
    }

    /// Read a resource-collection document from a byte source.
    pub fn read_collection_from<R: io::Read>(&self, input: R) -> Result<ResourceCollectionDocument> {
        self.read_from(&self.codecs.collection, input)
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    fn writer_settings(&self) -> WriterSettings {
        WriterSettings {
            pretty_print: self.config.pretty,
            ..Default::default()
        }
    }

    fn reader_settings(&self) -> ReaderSettings {
        ReaderSettings {
            max_nesting_depth: self.config.max_nesting_depth,
            ..Default::default()
        }
    }

    fn write_string<T, C: JsonApiCodec<T>>(&self, codec: &C, value: &T) -> Result<String> {
        let mut out = Vec::new();
        self.write_to(codec, value, &mut out)?;
        String::from_utf8(out).map_err(|e| Error::Internal(format!("writer produced invalid UTF-8: {}", e)))
    }

    fn write_to<T, C, W>(&self, codec: &C, value: &T, out: W) -> Result<()>
    where
        C: JsonApiCodec<T>,
        W: io::Write,
    {
        let mut writer = JsonStreamWriter::new_custom(out, self.writer_settings());
        codec.serialize(value, &mut writer)?;
        writer.finish_document()?;
        debug!(document = std::any::type_name::<T>(), "wrote document");
        Ok(())
    }

    fn read_from<T, C, R>(&self, codec: &C, input: R) -> Result<T>
    where
        C: JsonApiCodec<T>,
        R: io::Read,
    {
        let mut reader = JsonStreamReader::new_custom(input, self.reader_settings());
        let value = codec.deserialize(&mut reader, pointer::ROOT)?;
        if !self.config.allow_trailing_data {
            reader.consume_trailing_whitespace().map_err(CodecError::from)?;
        }
        debug!(document = std::any::type_name::<T>(), "read document");
        Ok(value)
    }
}

impl Default for JsonApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for codec configuration.
///
/// # Example
///
/// ```
/// use jsonapi::JsonApi;
///
/// // Human-readable output for debugging
/// let api = JsonApi::builder().pretty(true).build();
///
/// // Accept streams that carry more after the document
/// let api = JsonApi::builder().allow_trailing_data(true).build();
/// # let _ = api;
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonApiBuilder {
    config: JsonApiConfig,
}

impl JsonApiBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent written documents.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Limit array/object nesting in read documents; `None` removes the limit.
    pub fn max_nesting_depth(mut self, depth: Option<u32>) -> Self {
        self.config.max_nesting_depth = depth;
        self
    }

    /// Accept trailing bytes after the top-level value.
    pub fn allow_trailing_data(mut self, allow: bool) -> Self {
        self.config.allow_trailing_data = allow;
        self
    }

    /// Build the facade with the standard codec set.
    pub fn build(self) -> JsonApi {
        self.build_with(Codecs::standard())
    }

    /// Build the facade around an explicitly constructed codec set.
    pub fn build_with(self, codecs: Codecs) -> JsonApi {
        JsonApi {
            codecs,
            config: self.config,
        }
    }
}
