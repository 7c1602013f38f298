//! Top-level documents
//!
//! Three disjoint document types. Exactly one is active per serialize call;
//! there is no shared supertype holding all three.

use crate::error_object::ErrorObject;
use crate::metadata::Metadata;
use crate::resource::ResourceObject;

/// Document whose primary data is a single resource (or `null`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleResourceDocument {
    primary_data: Option<ResourceObject>,
    related_data: Vec<ResourceObject>,
    metadata: Option<Metadata>,
}

impl SingleResourceDocument {
    /// Create a document; `related_data` must already be deduplicated
    pub fn new(
        primary_data: Option<ResourceObject>,
        related_data: Vec<ResourceObject>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            primary_data,
            related_data,
            metadata,
        }
    }

    /// `data`
    pub fn primary_data(&self) -> Option<&ResourceObject> {
        self.primary_data.as_ref()
    }

    /// `included`
    pub fn related_data(&self) -> &[ResourceObject] {
        &self.related_data
    }

    /// `meta`
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

/// Document whose primary data is an array of resources
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceCollectionDocument {
    primary_data: Vec<ResourceObject>,
    related_data: Vec<ResourceObject>,
    metadata: Option<Metadata>,
}

impl ResourceCollectionDocument {
    /// Create a document; `related_data` must already be deduplicated
    pub fn new(
        primary_data: Vec<ResourceObject>,
        related_data: Vec<ResourceObject>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            primary_data,
            related_data,
            metadata,
        }
    }

    /// `data`
    pub fn primary_data(&self) -> &[ResourceObject] {
        &self.primary_data
    }

    /// `included`
    pub fn related_data(&self) -> &[ResourceObject] {
        &self.related_data
    }

    /// `meta`
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

/// Document carrying errors instead of data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorDocument {
    errors: Vec<ErrorObject>,
    metadata: Option<Metadata>,
}

impl ErrorDocument {
    /// Create an error document
    pub fn new(errors: Vec<ErrorObject>, metadata: Option<Metadata>) -> Self {
        Self { errors, metadata }
    }

    /// `errors`
    pub fn errors(&self) -> &[ErrorObject] {
        &self.errors
    }

    /// `meta`
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}
