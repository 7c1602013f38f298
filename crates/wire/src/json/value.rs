//! Raw JSON values over the token stream
//!
//! Attributes and `meta` objects are opaque to the codec. They are read into
//! `serde_json::Value` token by token and written back the same way.
//!
//! ## Numbers
//!
//! Numbers keep the numeral they arrived with (`serde_json` is built with
//! `arbitrary_precision`), so `18446744073709551616`, `10.50` or `1e400`
//! are written back character for character. Numbers built in memory are
//! written in `serde_json`'s own rendering.

use super::codec::{CodecError, CodecResult};
use jsonapi_core::{pointer, DeserializationError};
use serde_json::{Map, Number, Value};
use struson::reader::{JsonReader, ValueType};
use struson::writer::JsonWriter;

/// Token kind name for error messages
pub fn token_kind(value_type: ValueType) -> &'static str {
    match value_type {
        ValueType::Array => "Array",
        ValueType::Object => "Object",
        ValueType::String => "String",
        ValueType::Number => "Number",
        ValueType::Boolean => "Boolean",
        ValueType::Null => "Null",
    }
}

/// Write any JSON value
pub fn write_value<W: JsonWriter>(value: &Value, writer: &mut W) -> CodecResult<()> {
    match value {
        Value::Null => writer.null_value()?,
        Value::Bool(b) => writer.bool_value(*b)?,
        Value::Number(n) => write_number(n, writer)?,
        Value::String(s) => writer.string_value(s)?,
        Value::Array(items) => {
            writer.begin_array()?;
            for item in items {
                write_value(item, writer)?;
            }
            writer.end_array()?;
        }
        Value::Object(map) => {
            writer.begin_object()?;
            for (name, item) in map {
                writer.name(name)?;
                write_value(item, writer)?;
            }
            writer.end_object()?;
        }
    }
    Ok(())
}

/// Write a number as its numeral
pub fn write_number<W: JsonWriter>(n: &Number, writer: &mut W) -> CodecResult<()> {
    writer
        .number_value_from_string(&n.to_string())
        .map_err(|e| CodecError::Number(e.to_string()))
}

/// Read any JSON value; `path` locates it for error reporting
pub fn read_value<R: JsonReader>(reader: &mut R, path: &str) -> CodecResult<Value> {
    match reader.peek()? {
        ValueType::Null => {
            reader.next_null()?;
            Ok(Value::Null)
        }
        ValueType::Boolean => Ok(Value::Bool(reader.next_bool()?)),
        ValueType::String => Ok(Value::String(reader.next_string()?)),
        ValueType::Number => {
            let raw = reader.next_number_as_string()?;
            parse_number(&raw, path)
        }
        ValueType::Array => {
            reader.begin_array()?;
            let mut items = Vec::new();
            while reader.has_next()? {
                let item_path = pointer::index(path, items.len());
                items.push(read_value(reader, &item_path)?);
            }
            reader.end_array()?;
            Ok(Value::Array(items))
        }
        ValueType::Object => {
            reader.begin_object()?;
            let mut map = Map::new();
            while reader.has_next()? {
                let name = reader.next_name()?.to_owned();
                let item = read_value(reader, &pointer::child(path, &name))?;
                map.insert(name, item);
            }
            reader.end_object()?;
            Ok(Value::Object(map))
        }
    }
}

fn parse_number(raw: &str, path: &str) -> CodecResult<Value> {
    serde_json::from_str::<Number>(raw)
        .map(Value::Number)
        .map_err(|_| DeserializationError::new(path, format!("Invalid number {}", raw)).into())
}

/// Begin an object, or fail at `path` naming what was expected
pub fn expect_object<R: JsonReader>(reader: &mut R, path: &str, what: &str) -> CodecResult<()> {
    match reader.peek()? {
        ValueType::Object => Ok(reader.begin_object()?),
        other => Err(DeserializationError::new(
            path,
            format!("Expected an object for {}, but got {}", what, token_kind(other)),
        )
        .into()),
    }
}

/// Begin an array, or fail at `path` naming what was expected
pub fn expect_array<R: JsonReader>(reader: &mut R, path: &str, what: &str) -> CodecResult<()> {
    match reader.peek()? {
        ValueType::Array => Ok(reader.begin_array()?),
        other => Err(DeserializationError::new(
            path,
            format!("Expected an array for {}, but got {}", what, token_kind(other)),
        )
        .into()),
    }
}

/// Read a string member, or fail at `path`
pub fn read_string<R: JsonReader>(reader: &mut R, path: &str, member: &str) -> CodecResult<String> {
    match reader.peek()? {
        ValueType::String => Ok(reader.next_string()?),
        other => Err(DeserializationError::new(
            path,
            format!("Expected a string for `{}`, but got {}", member, token_kind(other)),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use struson::reader::JsonStreamReader;
    use struson::writer::JsonStreamWriter;

    fn write(value: &Value) -> String {
        let mut out = Vec::new();
        let mut writer = JsonStreamWriter::new(&mut out);
        write_value(value, &mut writer).unwrap();
        writer.finish_document().unwrap();
        String::from_utf8(out).unwrap()
    }

    fn read(json: &str) -> CodecResult<Value> {
        let mut reader = JsonStreamReader::new(json.as_bytes());
        read_value(&mut reader, "/attributes/x")
    }

    #[test]
    fn test_write_nested_preserves_order() {
        let value = json!({"z": [1, true, null], "a": {"b": "c"}});
        assert_eq!(write(&value), r#"{"z":[1,true,null],"a":{"b":"c"}}"#);
    }

    #[test]
    fn test_write_u64_above_i64_max() {
        let value = json!(18446744073709551615u64);
        assert_eq!(write(&value), "18446744073709551615");
    }

    #[test]
    fn test_write_negative_and_float() {
        assert_eq!(write(&json!(-42)), "-42");
        assert_eq!(write(&json!(1.5)), "1.5");
    }

    #[test]
    fn test_read_numbers() {
        assert_eq!(read("12").unwrap(), json!(12));
        assert_eq!(read("-12").unwrap(), json!(-12));
        assert_eq!(read("9223372036854775808").unwrap(), json!(9223372036854775808u64));
        assert_eq!(read("2.5").unwrap(), json!(2.5));
    }

    #[test]
    fn test_wide_numerals_round_trip_exactly() {
        for numeral in [
            "18446744073709551616",
            "-123456789012345678901234567890",
            "123456789012345678901234567890.000001",
            "10.50",
            "1e400",
            "0.0000001",
        ] {
            let value = read(numeral).unwrap();
            assert!(value.is_number());
            assert_eq!(value.to_string(), numeral);
            assert_eq!(write(&value), numeral);
        }
    }

    #[test]
    fn test_wide_numerals_nested() {
        let json = r#"{"n":18446744073709551616,"m":[123456789012345678901234567890]}"#;
        assert_eq!(write(&read(json).unwrap()), json);
    }

    #[test]
    fn test_read_object_keeps_order() {
        let value = read(r#"{"b": 1, "a": 2}"#).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_token_kind_names() {
        assert_eq!(token_kind(ValueType::Boolean), "Boolean");
        assert_eq!(token_kind(ValueType::Null), "Null");
    }
}
