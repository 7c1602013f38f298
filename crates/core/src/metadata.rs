//! Opaque `meta` objects

use serde_json::{Map, Value};

/// Non-standard meta information attached to a document, resource,
/// relationship, link or error
///
/// The wrapped value is expected to be a JSON object. Absent metadata is
/// `Option::<Metadata>::None`; a `Metadata` wrapping `null` is a different,
/// fatal case that the codec refuses to write.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    object: Value,
}

impl Metadata {
    /// Wrap a JSON object
    pub fn new(object: Map<String, Value>) -> Self {
        Self {
            object: Value::Object(object),
        }
    }

    /// Wrap an arbitrary value without checking its shape
    pub fn from_value(value: Value) -> Self {
        Self { object: value }
    }

    /// The wrapped value
    pub fn object(&self) -> &Value {
        &self.object
    }

    /// The wrapped object, if it is one
    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        self.object.as_object()
    }

    /// Look up a top-level member
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }

    /// Unwrap
    pub fn into_inner(self) -> Value {
        self.object
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(object: Map<String, Value>) -> Self {
        Metadata::new(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_wraps_object() {
        let mut map = Map::new();
        map.insert("total".to_string(), json!(3));
        let meta = Metadata::new(map);

        assert_eq!(meta.get("total"), Some(&json!(3)));
        assert!(meta.as_map().is_some());
    }

    #[test]
    fn test_from_value_keeps_null() {
        let meta = Metadata::from_value(Value::Null);
        assert!(meta.object().is_null());
        assert!(meta.as_map().is_none());
    }
}
