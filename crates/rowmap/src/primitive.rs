use crate::Result;

use chrono::{DateTime, FixedOffset, Utc};
use rowmap_core::{Type, Value};

/// A type that can be the declared type of a model field.
///
/// Nested models implement this through `#[derive(Model)]`.
pub trait Primitive: Sized {
    fn ty() -> Type;

    /// Loads a mapped value. `Null` loads as the type's zero value.
    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive_scalar {
    ( $( $ty:ty => $variant:ident ),+ $(,)? ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::Null => Ok(<$ty>::default()),
                        value => value.try_into(),
                    }
                }
            }
        )+
    };
}

impl_primitive_scalar! {
    bool => Bool,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    uuid::Uuid => Uuid,
    DateTime<FixedOffset> => Timestamp,
    DateTime<Utc> => Timestamp,
}

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        Type::option(T::ty())
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::List(items) => items.into_iter().map(T::load).collect(),
            value => Err(crate::Error::type_conversion(value, "Vec")),
        }
    }
}
