mod record;
pub use record::Record;

mod to_value;
pub use to_value::ToValue;

mod try_from;

use crate::{Nullable, NullableValue};

use chrono::{DateTime, FixedOffset};

/// A dynamically typed field value.
///
/// Source records carry these values; the mapping engine produces them again,
/// reshaped for the target model, before the model is loaded.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// A 128-bit unique identifier
    Uuid(uuid::Uuid),

    /// Timestamp with a fixed UTC offset
    Timestamp(DateTime<FixedOffset>),

    /// A nullable column wrapper, as handed out by a driver
    Nullable(NullableValue),

    /// A nested record with named fields
    Record(Record),

    /// A list of values
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the value's shape, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Uuid(_) => "Uuid",
            Self::Timestamp(_) => "Timestamp",
            Self::Nullable(value) => value.type_name(),
            Self::Record(_) => "Record",
            Self::List(_) => "List",
            Self::Null => "Null",
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

macro_rules! impl_from_scalar {
    ( $( $ty:ty => $variant:ident ),+ $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Self {
                    Self::$variant(src)
                }
            }
        )+
    };
}

impl_from_scalar! {
    bool => Bool,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    uuid::Uuid => Uuid,
    DateTime<FixedOffset> => Timestamp,
    NullableValue => Nullable,
    Record => Record,
    Vec<Value> => List,
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl<T> From<Nullable<T>> for Value
where
    NullableValue: From<Nullable<T>>,
{
    fn from(value: Nullable<T>) -> Self {
        Self::Nullable(value.into())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
