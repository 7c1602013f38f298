//! Typed attribute conversion
//!
//! The codec stores attribute values as raw JSON. Turning them into typed
//! values (and back) is a per-attribute conversion chosen once, when a
//! resource type is registered, from a closed set of kinds:
//!
//! | Kind | Typed value | JSON |
//! |------|-------------|------|
//! | Primitive | bool, integer, float, string | native JSON scalar |
//! | Decimal | exact decimal literal | string, e.g. `"10.50"`; numbers keep their numeral |
//! | Guid | `Uuid` | hyphenated lowercase string |
//! | Enum | registered integer discriminant | number |
//! | DateTime | `DateTime<FixedOffset>` | RFC 3339 string |
//! | Object | nested object/array | verbatim |
//!
//! Every kind accepts `null` in both directions.
//!
//! A [`ResourceSchema`] holds the `(name, kind)` pairs for one resource
//! type. Reading a resource returns the converted values together with a
//! [`PresenceMask`] of what the client sent.

use crate::error::{DeserializationError, ModelError};
use crate::is_reserved_member_name;
use crate::pointer;
use crate::presence::PresenceMask;
use crate::resource::ResourceObject;
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Typed attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// JSON null
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer above `i64::MAX`
    UInt(u64),
    /// Finite float
    Float(f64),
    /// String
    String(String),
    /// Exact decimal literal, e.g. `-12.50`
    Decimal(String),
    /// GUID
    Guid(Uuid),
    /// Enum discriminant
    Enum(i64),
    /// Timestamp with offset
    DateTime(DateTime<FixedOffset>),
    /// Nested JSON passed through unchanged
    Object(Value),
}

impl AttributeValue {
    /// Returns the variant name (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Null => "Null",
            AttributeValue::Bool(_) => "Bool",
            AttributeValue::Int(_) => "Int",
            AttributeValue::UInt(_) => "UInt",
            AttributeValue::Float(_) => "Float",
            AttributeValue::String(_) => "String",
            AttributeValue::Decimal(_) => "Decimal",
            AttributeValue::Guid(_) => "Guid",
            AttributeValue::Enum(_) => "Enum",
            AttributeValue::DateTime(_) => "DateTime",
            AttributeValue::Object(_) => "Object",
        }
    }
}

/// Conversion failure for a single value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Value of the wrong shape for the attribute's kind
    #[error("expected {expected}, got {actual}")]
    KindMismatch {
        /// Kind the attribute was registered with
        expected: &'static str,
        /// What was supplied
        actual: &'static str,
    },

    /// Float that JSON cannot represent
    #[error("non-finite float cannot be written as JSON")]
    NonFiniteFloat,

    /// Malformed decimal literal
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    /// Malformed GUID
    #[error("invalid GUID: {0}")]
    InvalidGuid(String),

    /// Malformed RFC 3339 timestamp
    #[error("invalid date-time: {0}")]
    InvalidDateTime(String),

    /// Discriminant not registered for the enum
    #[error("unknown enum value: {0}")]
    UnknownEnumValue(i64),
}

/// Conversion failure tied to the attribute it happened on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("attribute `{attribute}`: {source}")]
pub struct AttributeError {
    /// Attribute name
    pub attribute: String,
    /// Underlying failure
    #[source]
    pub source: ConversionError,
}

impl AttributeError {
    /// Client-facing error pointing at `<resource_path>/attributes/<attribute>`
    pub fn to_deserialization_error(&self, resource_path: &str) -> DeserializationError {
        let path = pointer::child(&pointer::child(resource_path, "attributes"), &self.attribute);
        DeserializationError::new(path, self.source.to_string()).with_title("Invalid attribute value")
    }
}

/// How one attribute converts between its typed value and JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    /// bool, numbers and strings
    Primitive,
    /// Exact decimal written as a string
    Decimal,
    /// GUID written as a string
    Guid,
    /// Integer discriminant restricted to the registered set
    Enum {
        /// Allowed discriminants
        discriminants: Vec<i64>,
    },
    /// RFC 3339 timestamp
    DateTime,
    /// Nested object or array
    Object,
}

impl AttributeKind {
    /// Kind name (for error messages)
    pub fn name(&self) -> &'static str {
        match self {
            AttributeKind::Primitive => "Primitive",
            AttributeKind::Decimal => "Decimal",
            AttributeKind::Guid => "Guid",
            AttributeKind::Enum { .. } => "Enum",
            AttributeKind::DateTime => "DateTime",
            AttributeKind::Object => "Object",
        }
    }

    /// Typed value to JSON
    pub fn to_json(&self, value: &AttributeValue) -> Result<Value, ConversionError> {
        match (self, value) {
            (_, AttributeValue::Null) => Ok(Value::Null),
            (AttributeKind::Primitive, AttributeValue::Bool(b)) => Ok(Value::Bool(*b)),
            (AttributeKind::Primitive, AttributeValue::Int(i)) => Ok(Value::from(*i)),
            (AttributeKind::Primitive, AttributeValue::UInt(u)) => Ok(Value::from(*u)),
            (AttributeKind::Primitive, AttributeValue::Float(f)) => Number::from_f64(*f)
                .map(Value::Number)
                .ok_or(ConversionError::NonFiniteFloat),
            (AttributeKind::Primitive, AttributeValue::String(s)) => Ok(Value::String(s.clone())),
            (AttributeKind::Decimal, AttributeValue::Decimal(d)) => {
                if is_decimal_literal(d) {
                    Ok(Value::String(d.clone()))
                } else {
                    Err(ConversionError::InvalidDecimal(d.clone()))
                }
            }
            (AttributeKind::Guid, AttributeValue::Guid(g)) => Ok(Value::String(g.to_string())),
            (AttributeKind::Enum { discriminants }, AttributeValue::Enum(d)) => {
                if discriminants.contains(d) {
                    Ok(Value::from(*d))
                } else {
                    Err(ConversionError::UnknownEnumValue(*d))
                }
            }
            (AttributeKind::DateTime, AttributeValue::DateTime(dt)) => Ok(Value::String(dt.to_rfc3339())),
            (AttributeKind::Object, AttributeValue::Object(v)) => Ok(v.clone()),
            (kind, other) => Err(ConversionError::KindMismatch {
                expected: kind.name(),
                actual: other.type_name(),
            }),
        }
    }

    /// JSON to typed value
    pub fn from_json(&self, value: &Value) -> Result<AttributeValue, ConversionError> {
        if value.is_null() {
            return Ok(AttributeValue::Null);
        }
        match self {
            AttributeKind::Primitive => match value {
                Value::Bool(b) => Ok(AttributeValue::Bool(*b)),
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        Ok(AttributeValue::Int(i))
                    } else if let Some(u) = n.as_u64() {
                        Ok(AttributeValue::UInt(u))
                    } else {
                        n.as_f64()
                            .filter(|f| f.is_finite())
                            .map(AttributeValue::Float)
                            .ok_or(ConversionError::NonFiniteFloat)
                    }
                }
                Value::String(s) => Ok(AttributeValue::String(s.clone())),
                other => Err(self.mismatch(other)),
            },
            AttributeKind::Decimal => {
                let literal = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    other => return Err(self.mismatch(other)),
                };
                if is_decimal_literal(&literal) {
                    Ok(AttributeValue::Decimal(literal))
                } else {
                    Err(ConversionError::InvalidDecimal(literal))
                }
            }
            AttributeKind::Guid => match value {
                Value::String(s) => Uuid::parse_str(s)
                    .map(AttributeValue::Guid)
                    .map_err(|_| ConversionError::InvalidGuid(s.clone())),
                other => Err(self.mismatch(other)),
            },
            AttributeKind::Enum { discriminants } => match value.as_i64() {
                Some(d) if discriminants.contains(&d) => Ok(AttributeValue::Enum(d)),
                Some(d) => Err(ConversionError::UnknownEnumValue(d)),
                None => Err(self.mismatch(value)),
            },
            AttributeKind::DateTime => match value {
                Value::String(s) => DateTime::parse_from_rfc3339(s)
                    .map(AttributeValue::DateTime)
                    .map_err(|_| ConversionError::InvalidDateTime(s.clone())),
                other => Err(self.mismatch(other)),
            },
            AttributeKind::Object => Ok(AttributeValue::Object(value.clone())),
        }
    }

    fn mismatch(&self, value: &Value) -> ConversionError {
        ConversionError::KindMismatch {
            expected: self.name(),
            actual: json_type_name(value),
        }
    }
}

/// JSON token kind name, as used in error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// `-?digits(.digits)?([eE][+-]?digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e.strip_prefix(['+', '-']).unwrap_or(e))),
        None => (unsigned, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (mantissa, None),
    };
    all_digits(int_part) && frac_part.map_or(true, all_digits) && exponent.map_or(true, all_digits)
}

/// Attribute and relationship layout of one resource type
///
/// Built once at registration time; conversions then dispatch on the stored
/// kind without inspecting the value's runtime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSchema {
    resource_type: String,
    attributes: Vec<(String, AttributeKind)>,
    relationships: Vec<String>,
}

impl ResourceSchema {
    /// Schema for `resource_type` with no members yet
    pub fn new(resource_type: impl Into<String>) -> Result<Self, ModelError> {
        let resource_type = resource_type.into();
        if resource_type.is_empty() {
            return Err(ModelError::EmptyType);
        }
        Ok(Self {
            resource_type,
            attributes: Vec::new(),
            relationships: Vec::new(),
        })
    }

    /// Register an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, kind: AttributeKind) -> Result<Self, ModelError> {
        let name = name.into();
        if is_reserved_member_name(&name) {
            return Err(ModelError::ReservedKey {
                key: name,
                location: "an attribute",
            });
        }
        self.attributes.retain(|(n, _)| *n != name);
        self.attributes.push((name, kind));
        Ok(self)
    }

    /// Register a relationship
    pub fn with_relationship(mut self, name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if is_reserved_member_name(&name) {
            return Err(ModelError::ReservedKey {
                key: name,
                location: "a relationship",
            });
        }
        if !self.relationships.contains(&name) {
            self.relationships.push(name);
        }
        Ok(self)
    }

    /// Resource type this schema describes
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Registered kind for an attribute
    pub fn attribute_kind(&self, name: &str) -> Option<&AttributeKind> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, k)| k)
    }

    /// Convert typed values into an attribute map, in schema order
    ///
    /// Registered attributes missing from `values` are left out; values for
    /// unregistered names are ignored.
    pub fn write_attributes(
        &self,
        values: &BTreeMap<String, AttributeValue>,
    ) -> Result<Map<String, Value>, AttributeError> {
        let mut out = Map::new();
        for (name, kind) in &self.attributes {
            if let Some(value) = values.get(name) {
                let json = kind.to_json(value).map_err(|source| AttributeError {
                    attribute: name.clone(),
                    source,
                })?;
                out.insert(name.clone(), json);
            }
        }
        Ok(out)
    }

    /// Convert an inbound resource's attributes into typed values
    ///
    /// Returns the values plus a mask of the registered attributes and
    /// relationships the resource actually carried. Unregistered members are
    /// ignored.
    pub fn read_attributes(
        &self,
        resource: &ResourceObject,
    ) -> Result<(BTreeMap<String, AttributeValue>, PresenceMask), AttributeError> {
        let mut values = BTreeMap::new();
        let mut presence = PresenceMask::new();

        for (name, kind) in &self.attributes {
            if let Some(json) = resource.attribute(name) {
                let value = kind.from_json(json).map_err(|source| AttributeError {
                    attribute: name.clone(),
                    source,
                })?;
                values.insert(name.clone(), value);
                presence.mark_attribute(name.clone());
            }
        }
        for (name, _) in resource.relationships() {
            if self.relationships.contains(name) {
                presence.mark_relationship(name.clone());
            }
        }

        Ok((values, presence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === Primitive ===

    #[test]
    fn test_primitive_numbers() {
        let kind = AttributeKind::Primitive;
        assert_eq!(kind.from_json(&json!(42)).unwrap(), AttributeValue::Int(42));
        assert_eq!(
            kind.from_json(&json!(9223372036854775808u64)).unwrap(),
            AttributeValue::UInt(9223372036854775808)
        );
        assert_eq!(kind.from_json(&json!(1.5)).unwrap(), AttributeValue::Float(1.5));
    }

    #[test]
    fn test_primitive_overflowing_float() {
        let json: Value = serde_json::from_str("1e400").unwrap();
        let err = AttributeKind::Primitive.from_json(&json).unwrap_err();
        assert_eq!(err, ConversionError::NonFiniteFloat);
    }

    #[test]
    fn test_primitive_rejects_object() {
        let err = AttributeKind::Primitive.from_json(&json!({"a": 1})).unwrap_err();
        assert_eq!(
            err,
            ConversionError::KindMismatch {
                expected: "Primitive",
                actual: "Object"
            }
        );
    }

    #[test]
    fn test_primitive_non_finite_float() {
        let err = AttributeKind::Primitive
            .to_json(&AttributeValue::Float(f64::NAN))
            .unwrap_err();
        assert_eq!(err, ConversionError::NonFiniteFloat);
    }

    #[test]
    fn test_null_accepted_by_every_kind() {
        for kind in [
            AttributeKind::Primitive,
            AttributeKind::Decimal,
            AttributeKind::Guid,
            AttributeKind::Enum { discriminants: vec![1] },
            AttributeKind::DateTime,
            AttributeKind::Object,
        ] {
            assert_eq!(kind.from_json(&Value::Null).unwrap(), AttributeValue::Null);
            assert_eq!(kind.to_json(&AttributeValue::Null).unwrap(), Value::Null);
        }
    }

    // === Decimal ===

    #[test]
    fn test_decimal_written_as_string() {
        let json = AttributeKind::Decimal
            .to_json(&AttributeValue::Decimal("-12.50".into()))
            .unwrap();
        assert_eq!(json, json!("-12.50"));
    }

    #[test]
    fn test_decimal_accepts_number() {
        let value = AttributeKind::Decimal.from_json(&json!(3)).unwrap();
        assert_eq!(value, AttributeValue::Decimal("3".into()));
    }

    #[test]
    fn test_decimal_keeps_numeral_as_received() {
        for numeral in ["10.50", "0.0000001", "123456789012345678901234567890.25", "-42.000"] {
            let json: Value = serde_json::from_str(numeral).unwrap();
            let value = AttributeKind::Decimal.from_json(&json).unwrap();
            assert_eq!(value, AttributeValue::Decimal(numeral.into()));
        }
    }

    #[test]
    fn test_decimal_accepts_exponent_form() {
        for literal in ["1e-7", "2.5E+30", "-3e400"] {
            let value = AttributeKind::Decimal.from_json(&json!(literal)).unwrap();
            assert_eq!(value, AttributeValue::Decimal(literal.into()));
        }
        // f64-built numbers render small magnitudes in exponent form
        let value = AttributeKind::Decimal.from_json(&json!(0.0000001)).unwrap();
        assert_eq!(value, AttributeValue::Decimal("1e-7".into()));
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        for bad in ["", "1.", ".5", "1e", "e5", "1e+", "1.5e-", "abc", "--1"] {
            assert!(AttributeKind::Decimal.from_json(&json!(bad)).is_err(), "{bad}");
        }
    }

    // === Guid ===

    #[test]
    fn test_guid_round_trip() {
        let id = Uuid::parse_str("6f1b8a4e-2c3d-4e5f-8a9b-0c1d2e3f4a5b").unwrap();
        let json = AttributeKind::Guid.to_json(&AttributeValue::Guid(id)).unwrap();
        assert_eq!(json, json!("6f1b8a4e-2c3d-4e5f-8a9b-0c1d2e3f4a5b"));
        assert_eq!(AttributeKind::Guid.from_json(&json).unwrap(), AttributeValue::Guid(id));
    }

    #[test]
    fn test_guid_invalid() {
        let err = AttributeKind::Guid.from_json(&json!("not-a-guid")).unwrap_err();
        assert_eq!(err, ConversionError::InvalidGuid("not-a-guid".into()));
    }

    // === Enum ===

    #[test]
    fn test_enum_checks_discriminants() {
        let kind = AttributeKind::Enum {
            discriminants: vec![0, 1, 2],
        };
        assert_eq!(kind.from_json(&json!(2)).unwrap(), AttributeValue::Enum(2));
        assert_eq!(kind.from_json(&json!(7)).unwrap_err(), ConversionError::UnknownEnumValue(7));
        assert_eq!(
            kind.to_json(&AttributeValue::Enum(9)).unwrap_err(),
            ConversionError::UnknownEnumValue(9)
        );
    }

    // === DateTime ===

    #[test]
    fn test_datetime_rfc3339() {
        let json = json!("2015-03-01T12:30:00+02:00");
        let value = AttributeKind::DateTime.from_json(&json).unwrap();
        match &value {
            AttributeValue::DateTime(dt) => assert_eq!(dt.offset().local_minus_utc(), 7200),
            other => panic!("Expected DateTime, got {other:?}"),
        }
        assert_eq!(AttributeKind::DateTime.to_json(&value).unwrap(), json);
    }

    #[test]
    fn test_datetime_invalid() {
        assert!(AttributeKind::DateTime.from_json(&json!("yesterday")).is_err());
    }

    // === Kind mismatch ===

    #[test]
    fn test_to_json_kind_mismatch() {
        let err = AttributeKind::Guid
            .to_json(&AttributeValue::String("x".into()))
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::KindMismatch {
                expected: "Guid",
                actual: "String"
            }
        );
    }

    // === Schema ===

    fn state_schema() -> ResourceSchema {
        ResourceSchema::new("states")
            .unwrap()
            .with_attribute("name", AttributeKind::Primitive)
            .unwrap()
            .with_attribute("area", AttributeKind::Decimal)
            .unwrap()
            .with_relationship("capital")
            .unwrap()
    }

    #[test]
    fn test_schema_rejects_reserved_names() {
        assert!(ResourceSchema::new("states")
            .unwrap()
            .with_attribute("id", AttributeKind::Primitive)
            .is_err());
        assert!(ResourceSchema::new("states")
            .unwrap()
            .with_relationship("type")
            .is_err());
        assert_eq!(ResourceSchema::new(""), Err(ModelError::EmptyType));
    }

    #[test]
    fn test_write_attributes_in_schema_order() {
        let mut values = BTreeMap::new();
        values.insert("area".to_string(), AttributeValue::Decimal("141.3".into()));
        values.insert("name".to_string(), AttributeValue::String("Ohio".into()));
        values.insert("unknown".to_string(), AttributeValue::Int(1));

        let map = state_schema().write_attributes(&values).unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["name", "area"]);
        assert_eq!(map["area"], json!("141.3"));
    }

    #[test]
    fn test_read_attributes_with_presence() {
        let resource = ResourceObject::builder("states", "1")
            .attribute("name", json!("Ohio"))
            .attribute("extra", json!(true))
            .relationship("capital", None)
            .build()
            .unwrap();

        let (values, presence) = state_schema().read_attributes(&resource).unwrap();
        assert_eq!(values.get("name"), Some(&AttributeValue::String("Ohio".into())));
        assert!(presence.has_attribute("name"));
        assert!(!presence.has_attribute("area"));
        assert!(!presence.has_attribute("extra"));
        assert!(presence.has_relationship("capital"));
    }

    #[test]
    fn test_read_attributes_error_pointer() {
        let resource = ResourceObject::builder("states", "1")
            .attribute("area", json!("big"))
            .build()
            .unwrap();

        let err = state_schema().read_attributes(&resource).unwrap_err();
        assert_eq!(err.attribute, "area");
        let de = err.to_deserialization_error("/data");
        assert_eq!(de.pointer(), "/data/attributes/area");
    }
}
