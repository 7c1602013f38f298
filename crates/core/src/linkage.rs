//! Resource linkage
//!
//! Linkage names *which* resources a relationship points to, independent
//! of any links:
//!
//! | Variant | JSON |
//! |---------|------|
//! | to-one, empty | `null` |
//! | to-one | `{"type": "...", "id": "..."}` |
//! | to-many | `[{"type": "...", "id": "..."}, ...]` |

use crate::error::ModelError;

/// Immutable `(type, id)` pair, both non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceIdentifier {
    resource_type: String,
    id: String,
}

impl ResourceIdentifier {
    /// Create an identifier, rejecting empty parts
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Result<Self, ModelError> {
        let resource_type = resource_type.into();
        let id = id.into();
        if resource_type.is_empty() {
            return Err(ModelError::EmptyIdentifierPart { part: "type" });
        }
        if id.is_empty() {
            return Err(ModelError::EmptyIdentifierPart { part: "id" });
        }
        Ok(Self { resource_type, id })
    }

    /// Resource type
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Resource id
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Identifier(s) referenced by a relationship
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLinkage {
    /// Zero or one identifier; `None` is an explicit empty to-one relationship
    ToOne(Option<ResourceIdentifier>),
    /// Zero or more identifiers, order preserved, duplicates allowed
    ToMany(Vec<ResourceIdentifier>),
}

impl ResourceLinkage {
    /// To-one linkage pointing at `identifier`
    pub fn to_one(identifier: ResourceIdentifier) -> Self {
        ResourceLinkage::ToOne(Some(identifier))
    }

    /// Explicitly empty to-one linkage
    pub fn empty_to_one() -> Self {
        ResourceLinkage::ToOne(None)
    }

    /// To-many linkage
    pub fn to_many(identifiers: impl IntoIterator<Item = ResourceIdentifier>) -> Self {
        ResourceLinkage::ToMany(identifiers.into_iter().collect())
    }

    /// Whether this is the to-many variant
    pub fn is_to_many(&self) -> bool {
        matches!(self, ResourceLinkage::ToMany(_))
    }

    /// Ordered identifiers (at most one for to-one)
    pub fn identifiers(&self) -> &[ResourceIdentifier] {
        match self {
            ResourceLinkage::ToOne(Some(id)) => std::slice::from_ref(id),
            ResourceLinkage::ToOne(None) => &[],
            ResourceLinkage::ToMany(ids) => ids,
        }
    }
}
