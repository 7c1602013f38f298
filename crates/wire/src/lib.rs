//! Wire encoding for JSON:API
//!
//! This crate implements the streaming codecs that read and write JSON:API
//! documents over a forward-only JSON token reader/writer
//! ([`struson::reader::JsonReader`] / [`struson::writer::JsonWriter`]).
//!
//! ## Layering
//!
//! Each codec handles exactly one structural concept and delegates the rest:
//!
//! | Codec | Delegates to |
//! |-------|--------------|
//! | [`SingleResourceDocumentCodec`], [`ResourceCollectionDocumentCodec`] | resource object, metadata |
//! | [`ErrorDocumentCodec`] | error object, metadata |
//! | [`ResourceObjectCodec`] | relationship object, link, metadata |
//! | [`RelationshipObjectCodec`] | link, linkage, metadata |
//! | [`ErrorObjectCodec`] | link, metadata |
//! | [`LinkCodec`] | metadata |
//! | [`LinkageCodec`], [`MetadataCodec`] | - |
//!
//! Collaborators are injected through constructors. [`Codecs::standard`]
//! wires up the default set.
//!
//! ## Error paths
//!
//! Every `deserialize` call receives the JSON pointer of the value it is
//! about to read and extends it before delegating, so a failure deep in a
//! document reports e.g. `/data/relationships/author/data/type`.
//!
//! ## Examples
//!
//! ```
//! use jsonapi_wire::{Codecs, JsonApiCodec};
//! use jsonapi_core::{pointer, ResourceObject, SingleResourceDocument};
//! use struson::reader::JsonStreamReader;
//! use struson::writer::{JsonStreamWriter, JsonWriter};
//!
//! let codecs = Codecs::standard();
//! let resource = ResourceObject::builder("posts", "1").build().unwrap();
//! let doc = SingleResourceDocument::new(Some(resource), vec![], None);
//!
//! let mut out = Vec::new();
//! let mut writer = JsonStreamWriter::new(&mut out);
//! codecs.single.serialize(&doc, &mut writer).unwrap();
//! writer.finish_document().unwrap();
//! assert_eq!(out, br#"{"data":{"type":"posts","id":"1"}}"#);
//!
//! let mut reader = JsonStreamReader::new(out.as_slice());
//! let decoded = codecs.single.deserialize(&mut reader, pointer::ROOT).unwrap();
//! assert_eq!(decoded, doc);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    CodecError, CodecResult, Codecs, ErrorDocumentCodec, ErrorObjectCodec, JsonApiCodec, LinkCodec,
    LinkageCodec, MetadataCodec, RelationshipObjectCodec, ResourceCollectionDocumentCodec,
    ResourceObjectCodec, SingleResourceDocumentCodec,
};
