//! Converters from nullable column wrappers to plain values.
//!
//! Every converter is total: a null wrapper degrades to an empty string or
//! `None`, never to an error.

use crate::{
    nullable::{Bool, Float8, Int4, Text, Timestamptz, Uuid},
    NullableValue, Type, Value,
};

use chrono::SecondsFormat;

/// Canonical hyphenated text of a UUID column, or `""` when null.
pub fn uuid_to_string(id: &Uuid) -> String {
    match id.get() {
        Some(bytes) => uuid::Uuid::from_bytes(*bytes).to_string(),
        None => String::new(),
    }
}

pub fn text_to_option(text: &Text) -> Option<String> {
    text.get().cloned()
}

pub fn float8_to_option(f: &Float8) -> Option<f64> {
    f.get().copied()
}

pub fn int4_to_option(i: &Int4) -> Option<i32> {
    i.get().copied()
}

pub fn bool_to_option(b: &Bool) -> Option<bool> {
    b.get().copied()
}

/// RFC 3339 text of a timestamp column at second precision, or `""` when
/// null. The timestamp keeps its own offset; UTC is written as `Z`.
///
/// Years outside `0..=9999` have no RFC 3339 form. They are written with a
/// sign and as many digits as needed (`+10000-01-02T03:04:05Z`,
/// `-0044-03-15T00:00:00Z`).
pub fn timestamptz_to_string(ts: &Timestamptz) -> String {
    match ts.get() {
        Some(ts) => ts.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => String::new(),
    }
}

/// Converts a nullable wrapper for a field of type `ty`.
///
/// Returns `None` when the wrapper's converter does not produce `ty`. The
/// returned [`Value::Null`] means "absent" for optional targets and "zero"
/// otherwise.
pub fn convert(value: &NullableValue, ty: &Type) -> Option<Value> {
    let converted = match value {
        NullableValue::Uuid(id) if ty.is_string() => Value::String(uuid_to_string(id)),
        NullableValue::Text(text) if ty.is_option_of(&Type::String) => {
            Value::from(text_to_option(text))
        }
        NullableValue::Float8(f) if ty.is_option_of(&Type::F64) => {
            Value::from(float8_to_option(f))
        }
        NullableValue::Int4(i) if ty.is_option_of(&Type::I32) => Value::from(int4_to_option(i)),
        NullableValue::Bool(b) if ty.is_option_of(&Type::Bool) => Value::from(bool_to_option(b)),
        NullableValue::Timestamptz(ts) if ty.is_string() => {
            Value::String(timestamptz_to_string(ts))
        }
        NullableValue::Uuid(_)
        | NullableValue::Text(_)
        | NullableValue::Float8(_)
        | NullableValue::Int4(_)
        | NullableValue::Bool(_)
        | NullableValue::Timestamptz(_) => return None,
    };

    Some(converted)
}
