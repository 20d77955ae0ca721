use super::{Record, Value};
use crate::{Nullable, NullableValue};

use chrono::{DateTime, FixedOffset, Utc};

/// Types that can appear as fields of a source row.
///
/// Implemented for plain scalars, the nullable column wrappers, options,
/// sequences, records, and every `#[derive(Row)]` struct.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value_copy {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

impl_to_value_copy!(bool, i16, i32, i64, f32, f64, uuid::Uuid, DateTime<FixedOffset>);

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(self.fixed_offset())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

macro_rules! impl_to_value_nullable {
    ( $( $payload:ty ),+ $(,)? ) => {
        $(
            impl ToValue for Nullable<$payload> {
                fn to_value(&self) -> Value {
                    Value::Nullable(NullableValue::from(self.clone()))
                }
            }
        )+
    };
}

impl_to_value_nullable!(String, f64, i32, bool, DateTime<FixedOffset>, [u8; 16]);

impl ToValue for NullableValue {
    fn to_value(&self) -> Value {
        Value::Nullable(self.clone())
    }
}

impl ToValue for Record {
    fn to_value(&self) -> Value {
        Value::Record(self.clone())
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
