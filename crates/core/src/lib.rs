//! Core data model for JSON:API documents
//!
//! This crate defines the immutable value types that the wire codecs read
//! and write. Every type is constructed fully populated, owned by
//! composition, and discarded after a single request/response cycle.
//!
//! ## Structure
//!
//! | Concept | Type |
//! |---------|------|
//! | Top-level document | [`SingleResourceDocument`], [`ResourceCollectionDocument`], [`ErrorDocument`] |
//! | Resource | [`ResourceObject`] |
//! | Relationship slot | [`RelationshipObject`] |
//! | Linkage | [`ResourceLinkage`], [`ResourceIdentifier`] |
//! | Link | [`Link`] |
//! | Problem report | [`ErrorObject`] |
//! | Opaque `meta` | [`Metadata`] |
//!
//! Attribute values are raw `serde_json::Value`s at this layer. Typed
//! conversion lives in [`attribute`], resolved once per resource type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attribute;
pub mod document;
pub mod error;
pub mod error_object;
pub mod link;
pub mod linkage;
pub mod metadata;
pub mod pointer;
pub mod presence;
pub mod relationship;
pub mod resource;

pub use attribute::{AttributeError, AttributeKind, AttributeValue, ConversionError, ResourceSchema};
pub use document::{ErrorDocument, ResourceCollectionDocument, SingleResourceDocument};
pub use error::{DeserializationError, ModelError, SerializationError};
pub use error_object::{ErrorObject, ErrorObjectBuilder};
pub use link::Link;
pub use linkage::{ResourceIdentifier, ResourceLinkage};
pub use metadata::Metadata;
pub use presence::PresenceMask;
pub use relationship::RelationshipObject;
pub use resource::{ResourceObject, ResourceObjectBuilder};

/// Member names that may never appear inside `attributes` or `relationships`
pub const RESERVED_MEMBER_NAMES: [&str; 2] = ["id", "type"];

/// Check whether a member name is reserved by the resource object itself
pub fn is_reserved_member_name(name: &str) -> bool {
    RESERVED_MEMBER_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_member_names() {
        assert!(is_reserved_member_name("id"));
        assert!(is_reserved_member_name("type"));
        assert!(!is_reserved_member_name("ID"));
        assert!(!is_reserved_member_name("name"));
    }
}
