//! Error objects
//!
//! ## Wire Format
//!
//! Every member is optional and omitted when absent:
//! ```json
//! {
//!   "id": "...",
//!   "links": {"about": "..."},
//!   "status": "400",
//!   "code": "...",
//!   "title": "...",
//!   "detail": "...",
//!   "source": {"pointer": "/data/type", "parameter": "..."},
//!   "meta": {}
//! }
//! ```

use crate::error::DeserializationError;
use crate::link::Link;
use crate::metadata::Metadata;

/// HTTP status used for errors raised by malformed client documents
pub const BAD_REQUEST: u16 = 400;

/// One problem encountered while processing a request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorObject {
    id: Option<String>,
    about_link: Option<Link>,
    status: Option<u16>,
    code: Option<String>,
    title: Option<String>,
    detail: Option<String>,
    pointer: Option<String>,
    parameter: Option<String>,
    metadata: Option<Metadata>,
}

impl ErrorObject {
    /// Start building an error object
    pub fn builder() -> ErrorObjectBuilder {
        ErrorObjectBuilder::default()
    }

    /// Describe a client document rejected by the codec
    pub fn from_deserialization_error(error: &DeserializationError) -> Self {
        ErrorObject::builder()
            .status(BAD_REQUEST)
            .title(error.title())
            .detail(error.message())
            .pointer(error.pointer())
            .build()
    }

    /// Unique identifier for this occurrence
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// `links.about`
    pub fn about_link(&self) -> Option<&Link> {
        self.about_link.as_ref()
    }

    /// HTTP status code; `None` means unset
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Application-specific error code
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Short summary
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Occurrence-specific explanation
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// `source.pointer`
    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
    }

    /// `source.parameter`
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// `meta`
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Whether a `source` object has anything to carry
    pub fn has_source(&self) -> bool {
        self.pointer.is_some() || self.parameter.is_some()
    }
}

/// Builder for [`ErrorObject`]
#[derive(Debug, Clone, Default)]
pub struct ErrorObjectBuilder {
    inner: ErrorObject,
}

impl ErrorObjectBuilder {
    /// Set `id`
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = Some(id.into());
        self
    }

    /// Set `links.about`
    pub fn about_link(mut self, link: Link) -> Self {
        self.inner.about_link = Some(link);
        self
    }

    /// Set `status`
    pub fn status(mut self, status: u16) -> Self {
        self.inner.status = Some(status);
        self
    }

    /// Set `code`
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Set `title`
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    /// Set `detail`
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.inner.detail = Some(detail.into());
        self
    }

    /// Set `source.pointer`
    pub fn pointer(mut self, pointer: impl Into<String>) -> Self {
        self.inner.pointer = Some(pointer.into());
        self
    }

    /// Set `source.parameter`
    pub fn parameter(mut self, parameter: impl Into<String>) -> Self {
        self.inner.parameter = Some(parameter.into());
        self
    }

    /// Set `meta`
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.inner.metadata = Some(metadata);
        self
    }

    /// Finish
    pub fn build(self) -> ErrorObject {
        self.inner
    }
}
