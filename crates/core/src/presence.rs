//! Presence masks
//!
//! A PATCH-style update needs to know which members the client actually
//! sent, so that absent members are left alone rather than reset. The mask
//! is returned alongside the converted values instead of being recovered
//! later from a side table keyed by object identity.

use crate::resource::ResourceObject;
use std::collections::BTreeSet;

/// Names of the attributes and relationships present in an inbound resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceMask {
    attributes: BTreeSet<String>,
    relationships: BTreeSet<String>,
}

impl PresenceMask {
    /// Empty mask
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask covering every member of `resource`, null relationship entries included
    pub fn from_resource(resource: &ResourceObject) -> Self {
        let mut mask = PresenceMask::new();
        for name in resource.attributes().keys() {
            mask.mark_attribute(name.clone());
        }
        for (name, _) in resource.relationships() {
            mask.mark_relationship(name.clone());
        }
        mask
    }

    /// Record an attribute as present
    pub fn mark_attribute(&mut self, name: impl Into<String>) {
        self.attributes.insert(name.into());
    }

    /// Record a relationship as present
    pub fn mark_relationship(&mut self, name: impl Into<String>) {
        self.relationships.insert(name.into());
    }

    /// Was the attribute sent?
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Was the relationship sent?
    pub fn has_relationship(&self, name: &str) -> bool {
        self.relationships.contains(name)
    }

    /// Present attribute names, sorted
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    /// Present relationship names, sorted
    pub fn relationships(&self) -> impl Iterator<Item = &str> {
        self.relationships.iter().map(String::as_str)
    }

    /// Nothing was sent
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.relationships.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_resource_includes_null_relationships() {
        let resource = ResourceObject::builder("states", "1")
            .attribute("name", json!("Ohio"))
            .attribute("motto", json!(null))
            .relationship("capital", None)
            .build()
            .unwrap();

        let mask = PresenceMask::from_resource(&resource);
        assert!(mask.has_attribute("name"));
        assert!(mask.has_attribute("motto"));
        assert!(mask.has_relationship("capital"));
        assert!(!mask.has_attribute("population"));
    }

    #[test]
    fn test_new_is_empty() {
        assert!(PresenceMask::new().is_empty());
    }
}
