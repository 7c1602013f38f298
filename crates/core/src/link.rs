//! Links

use crate::metadata::Metadata;

/// A link emitted by the server
///
/// Written as a bare URL string, or as `{"href", "meta"}` when metadata is
/// attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    href: String,
    metadata: Option<Metadata>,
}

impl Link {
    /// Link without metadata
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            metadata: None,
        }
    }

    /// Link with metadata
    pub fn with_metadata(href: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            href: href.into(),
            metadata: Some(metadata),
        }
    }

    /// Target URL
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Attached metadata
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}
