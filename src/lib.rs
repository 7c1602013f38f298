//! # jsonapi
//!
//! Streaming JSON:API document codec.
//!
//! Translates between an immutable in-memory model and JSON:API documents:
//! single resources, resource collections, compound documents (`included`)
//! and error documents. Every structural rule violation in an incoming
//! document is reported with a JSON pointer to the offending member.
//!
//! ## Quick Start
//!
//! ```
//! use jsonapi::prelude::*;
//!
//! let api = JsonApi::new();
//!
//! let author = ResourceIdentifier::new("people", "9")?;
//! let post = ResourceObject::builder("posts", "1")
//!     .attribute("title", json!("Hello"))
//!     .relationship("author", Some(RelationshipObject::from_linkage(ResourceLinkage::to_one(author))))
//!     .build()?;
//!
//! let json = api.write_single(&SingleResourceDocument::new(Some(post), vec![], None))?;
//! assert_eq!(
//!     json,
//!     r#"{"data":{"type":"posts","id":"1","attributes":{"title":"Hello"},"relationships":{"author":{"data":{"type":"people","id":"9"}}}}}"#
//! );
//!
//! let err = api.read_single(r#"{"data": {"id": "1"}}"#).unwrap_err();
//! assert!(err.is_client_fault());
//! assert_eq!(err.as_invalid_document().map(|e| e.pointer()), Some("/data/type"));
//! # Ok::<(), jsonapi::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`jsonapi_core`] - the data model, typed attribute conversion, presence masks
//! - [`jsonapi_wire`] - one codec per structural concept over a token reader/writer
//! - this crate - the [`JsonApi`] facade, configuration and a unified [`Error`]

#![warn(missing_docs)]

mod api;
mod error;

pub mod prelude;

// Re-export main entry points
pub use api::{JsonApi, JsonApiBuilder, JsonApiConfig, DEFAULT_MAX_NESTING_DEPTH};
pub use error::{Error, Result, MALFORMED_JSON_TITLE};

// Re-export the lower layers
pub use jsonapi_core as model;
pub use jsonapi_wire as wire;

pub use jsonapi_core::{
    AttributeKind, AttributeValue, ErrorDocument, ErrorObject, Link, Metadata, PresenceMask,
    RelationshipObject, ResourceCollectionDocument, ResourceIdentifier, ResourceLinkage, ResourceObject,
    ResourceSchema, SingleResourceDocument,
};

/// Media type for JSON:API documents
pub const MEDIA_TYPE: &str = "application/vnd.api+json";
