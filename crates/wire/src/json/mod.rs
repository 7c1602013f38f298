//! JSON:API codecs over a streaming JSON reader/writer
//!
//! - `{"data": ..., "included": [...], "meta": {...}}` documents
//! - `{"type", "id", "attributes", "relationships", "links", "meta"}` resources
//! - `{"links", "data", "meta"}` relationships
//! - `{"errors": [...]}` error documents

mod codec;
mod document;
mod error;
mod link;
mod linkage;
mod metadata;
mod relationship;
mod resource;
pub mod value;

pub use codec::{CodecError, CodecResult, JsonApiCodec};
pub use document::{ErrorDocumentCodec, ResourceCollectionDocumentCodec, SingleResourceDocumentCodec};
pub use error::ErrorObjectCodec;
pub use link::LinkCodec;
pub use linkage::LinkageCodec;
pub use metadata::MetadataCodec;
pub use relationship::RelationshipObjectCodec;
pub use resource::ResourceObjectCodec;

/// The three document codecs, wired with the standard collaborators
#[derive(Debug, Clone)]
pub struct Codecs {
    /// Single-resource documents
    pub single: SingleResourceDocumentCodec,
    /// Resource-collection documents
    pub collection: ResourceCollectionDocumentCodec,
    /// Error documents
    pub errors: ErrorDocumentCodec,
}

impl Codecs {
    /// Build every codec from the leaves up
    pub fn standard() -> Self {
        let metadata = MetadataCodec;
        let link = LinkCodec::new(metadata);
        let relationship = RelationshipObjectCodec::new(link.clone(), LinkageCodec, metadata);
        let resource = ResourceObjectCodec::new(relationship, link.clone(), metadata);
        let error = ErrorObjectCodec::new(link, metadata);

        Codecs {
            single: SingleResourceDocumentCodec::new(resource.clone(), metadata),
            collection: ResourceCollectionDocumentCodec::new(resource, metadata),
            errors: ErrorDocumentCodec::new(error, metadata),
        }
    }
}

impl Default for Codecs {
    fn default() -> Self {
        Self::standard()
    }
}
