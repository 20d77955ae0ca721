use super::Value;
use crate::Error;

use chrono::{DateTime, FixedOffset, Utc};

macro_rules! impl_try_from_value {
    ( $( $ty:ty, $lit:literal => { $( $variant:ident ),+ } ),+ $(,)? ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        $( Value::$variant(v) => Ok(<$ty>::from(v)), )+
                        _ => Err(Error::type_conversion(value, $lit)),
                    }
                }
            }
        )+
    };
}

impl_try_from_value! {
    bool, "bool" => { Bool },
    i16, "i16" => { I16 },
    i32, "i32" => { I16, I32 },
    i64, "i64" => { I16, I32, I64 },
    f32, "f32" => { F32 },
    f64, "f64" => { F32, F64 },
    String, "String" => { String },
    uuid::Uuid, "Uuid" => { Uuid },
    DateTime<FixedOffset>, "DateTime<FixedOffset>" => { Timestamp },
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Timestamp(v) => Ok(v.with_timezone(&Utc)),
            _ => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}
