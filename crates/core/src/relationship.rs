//! Relationship objects

use crate::link::Link;
use crate::linkage::ResourceLinkage;
use crate::metadata::Metadata;

/// One named relationship slot on a resource
///
/// A relationship object with none of its four members set can be
/// constructed (a client may send one that only carries `links`), but it
/// cannot be written: JSON:API requires at least one of `links`, `data` or
/// `meta`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationshipObject {
    self_link: Option<Link>,
    related_resource_link: Option<Link>,
    linkage: Option<ResourceLinkage>,
    metadata: Option<Metadata>,
}

impl RelationshipObject {
    /// Create a relationship object from all four members
    pub fn new(
        self_link: Option<Link>,
        related_resource_link: Option<Link>,
        linkage: Option<ResourceLinkage>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            self_link,
            related_resource_link,
            linkage,
            metadata,
        }
    }

    /// Relationship carrying only linkage
    pub fn from_linkage(linkage: ResourceLinkage) -> Self {
        Self {
            linkage: Some(linkage),
            ..Default::default()
        }
    }

    /// `links.self`
    pub fn self_link(&self) -> Option<&Link> {
        self.self_link.as_ref()
    }

    /// `links.related`
    pub fn related_resource_link(&self) -> Option<&Link> {
        self.related_resource_link.as_ref()
    }

    /// `data`
    pub fn linkage(&self) -> Option<&ResourceLinkage> {
        self.linkage.as_ref()
    }

    /// `meta`
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Whether at least one member is present
    pub fn has_any_member(&self) -> bool {
        self.self_link.is_some()
            || self.related_resource_link.is_some()
            || self.linkage.is_some()
            || self.metadata.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_relationship_has_no_members() {
        let rel = RelationshipObject::new(None, None, None, None);
        assert!(!rel.has_any_member());
    }

    #[test]
    fn test_any_single_member_counts() {
        assert!(RelationshipObject::new(Some(Link::new("/a")), None, None, None).has_any_member());
        assert!(RelationshipObject::new(None, Some(Link::new("/b")), None, None).has_any_member());
        assert!(RelationshipObject::from_linkage(ResourceLinkage::empty_to_one()).has_any_member());
    }
}
