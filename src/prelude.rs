//! Convenient imports for the JSON:API codec.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use jsonapi::prelude::*;
//!
//! let doc = JsonApi::new().read_collection(r#"{"data": []}"#)?;
//! assert!(doc.primary_data().is_empty());
//! # Ok::<(), jsonapi::Error>(())
//! ```

// Main entry point
pub use crate::api::{JsonApi, JsonApiBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Documents
pub use jsonapi_core::{ErrorDocument, ResourceCollectionDocument, SingleResourceDocument};

// Resources and relationships
pub use jsonapi_core::{
    ErrorObject, Link, Metadata, RelationshipObject, ResourceIdentifier, ResourceLinkage, ResourceObject,
};

// Typed attributes
pub use jsonapi_core::{AttributeKind, AttributeValue, PresenceMask, ResourceSchema};

// Re-export serde_json for convenience
pub use serde_json::json;
