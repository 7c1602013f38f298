//! Resource objects
//!
//! A resource object is one domain entity on the wire:
//!
//! ```json
//! {
//!   "type": "states",
//!   "id": "1400",
//!   "attributes": {"name": "New York"},
//!   "relationships": {"capital": {"data": {"type": "cities", "id": "7"}}},
//!   "links": {"self": "/states/1400"},
//!   "meta": {}
//! }
//! ```
//!
//! ## Invariants
//!
//! - `type` is non-empty
//! - `id` may be empty ("no id yet" during creation flows)
//! - `id` and `type` never appear as attribute or relationship names
//! - attribute order is insertion order; equality ignores order

use crate::error::ModelError;
use crate::is_reserved_member_name;
use crate::link::Link;
use crate::metadata::Metadata;
use crate::relationship::RelationshipObject;
use serde_json::{Map, Value};

/// One domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceObject {
    resource_type: String,
    id: String,
    attributes: Map<String, Value>,
    relationships: Vec<(String, Option<RelationshipObject>)>,
    self_link: Option<Link>,
    metadata: Option<Metadata>,
}

impl ResourceObject {
    /// Start building a resource object
    pub fn builder(resource_type: impl Into<String>, id: impl Into<String>) -> ResourceObjectBuilder {
        ResourceObjectBuilder::new(resource_type, id)
    }

    /// Resource type
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Resource id, possibly empty
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Attribute map in insertion order
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Look up one attribute
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Relationship entries in insertion order, `None` for null entries
    pub fn relationships(&self) -> &[(String, Option<RelationshipObject>)] {
        &self.relationships
    }

    /// Look up one non-null relationship
    pub fn relationship(&self, name: &str) -> Option<&RelationshipObject> {
        self.relationships
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, rel)| rel.as_ref())
    }

    /// `links.self`
    pub fn self_link(&self) -> Option<&Link> {
        self.self_link.as_ref()
    }

    /// `meta`
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

/// Builder for [`ResourceObject`]
///
/// Reserved-key and empty-type checks run in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ResourceObjectBuilder {
    inner: ResourceObject,
}

impl ResourceObjectBuilder {
    /// Create a builder for a resource of `resource_type` with `id`
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            inner: ResourceObject {
                resource_type: resource_type.into(),
                id: id.into(),
                attributes: Map::new(),
                relationships: Vec::new(),
                self_link: None,
                metadata: None,
            },
        }
    }

    /// Add or replace an attribute
    pub fn attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.inner.attributes.insert(name.into(), value);
        self
    }

    /// Add every attribute from `attributes`, keeping their order
    pub fn attributes(mut self, attributes: Map<String, Value>) -> Self {
        for (name, value) in attributes {
            self.inner.attributes.insert(name, value);
        }
        self
    }

    /// Add or replace a relationship entry; `None` is a null entry
    pub fn relationship(mut self, name: impl Into<String>, relationship: Option<RelationshipObject>) -> Self {
        let name = name.into();
        match self.inner.relationships.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = relationship,
            None => self.inner.relationships.push((name, relationship)),
        }
        self
    }

    /// Set `links.self`
    pub fn self_link(mut self, link: Link) -> Self {
        self.inner.self_link = Some(link);
        self
    }

    /// Set `meta`
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.inner.metadata = Some(metadata);
        self
    }

    /// Validate and finish
    pub fn build(self) -> Result<ResourceObject, ModelError> {
        if self.inner.resource_type.is_empty() {
            return Err(ModelError::EmptyType);
        }
        if let Some(key) = self.inner.attributes.keys().find(|k| is_reserved_member_name(k)) {
            return Err(ModelError::ReservedKey {
                key: key.clone(),
                location: "an attribute",
            });
        }
        if let Some((key, _)) = self
            .inner
            .relationships
            .iter()
            .find(|(k, _)| is_reserved_member_name(k))
        {
            return Err(ModelError::ReservedKey {
                key: key.clone(),
                location: "a relationship",
            });
        }
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkage::{ResourceIdentifier, ResourceLinkage};
    use serde_json::json;

    #[test]
    fn test_build_minimal() {
        let resource = ResourceObject::builder("posts", "1").build().unwrap();
        assert_eq!(resource.resource_type(), "posts");
        assert_eq!(resource.id(), "1");
        assert!(resource.attributes().is_empty());
        assert!(resource.relationships().is_empty());
    }

    #[test]
    fn test_empty_id_is_allowed() {
        let resource = ResourceObject::builder("posts", "").build().unwrap();
        assert_eq!(resource.id(), "");
    }

    #[test]
    fn test_empty_type_rejected() {
        let err = ResourceObject::builder("", "1").build().unwrap_err();
        assert_eq!(err, ModelError::EmptyType);
    }

    #[test]
    fn test_reserved_attribute_rejected() {
        let err = ResourceObject::builder("posts", "1")
            .attribute("type", json!("x"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ModelError::ReservedKey { ref key, .. } if key == "type"));
    }

    #[test]
    fn test_reserved_relationship_rejected() {
        let err = ResourceObject::builder("posts", "1")
            .relationship("id", None)
            .build()
            .unwrap_err();
        assert!(matches!(err, ModelError::ReservedKey { location: "a relationship", .. }));
    }

    #[test]
    fn test_attribute_insertion_order_preserved() {
        let resource = ResourceObject::builder("states", "1")
            .attribute("zeta", json!(1))
            .attribute("alpha", json!(2))
            .build()
            .unwrap();
        let keys: Vec<&String> = resource.attributes().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_attribute_equality_ignores_order() {
        let a = ResourceObject::builder("states", "1")
            .attribute("x", json!(1))
            .attribute("y", json!(2))
            .build()
            .unwrap();
        let b = ResourceObject::builder("states", "1")
            .attribute("y", json!(2))
            .attribute("x", json!(1))
            .build()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_relationship_replaced_by_name() {
        let linkage = ResourceLinkage::to_one(ResourceIdentifier::new("cities", "7").unwrap());
        let resource = ResourceObject::builder("states", "1")
            .relationship("capital", None)
            .relationship("capital", Some(RelationshipObject::from_linkage(linkage)))
            .build()
            .unwrap();

        assert_eq!(resource.relationships().len(), 1);
        assert!(resource.relationship("capital").is_some());
    }
}
