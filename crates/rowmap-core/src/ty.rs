use crate::{ModelRef, Value};

use std::fmt;

/// Declared type of a model field.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Bool,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    Uuid,
    Timestamp,

    /// An optional value of the inner type (`Option<T>`)
    Option(Box<Type>),

    /// A sequence of the inner type (`Vec<T>`)
    List(Box<Type>),

    /// A nested model
    Model(ModelRef),
}

impl Type {
    pub fn option(inner: Type) -> Type {
        Type::Option(Box::new(inner))
    }

    pub fn list(inner: Type) -> Type {
        Type::List(Box::new(inner))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Type::String)
    }

    /// Returns `true` if `self` is `Option<inner>`.
    pub fn is_option_of(&self, inner: &Type) -> bool {
        matches!(self, Type::Option(ty) if **ty == *inner)
    }

    /// Strips one level of `Option`, if any.
    pub fn unwrap_option(&self) -> &Type {
        match self {
            Type::Option(inner) => inner,
            ty => ty,
        }
    }

    /// Assigns a plain scalar value to a field of this type.
    ///
    /// Identical shapes are copied, integer and float values widen losslessly,
    /// and optional types additionally accept `Null`. Returns `None` when the
    /// value is not assignable. Records, lists and nullable wrappers are never
    /// assignable here; the mapping engine handles those structurally.
    pub fn assign(&self, value: &Value) -> Option<Value> {
        use Value::*;

        let assigned = match (self, value) {
            (Type::Option(_), Null) => Null,
            (Type::Option(inner), value) => return inner.assign(value),
            (Type::Bool, Bool(v)) => Bool(*v),
            (Type::I16, I16(v)) => I16(*v),
            (Type::I32, I16(v)) => I32(i32::from(*v)),
            (Type::I32, I32(v)) => I32(*v),
            (Type::I64, I16(v)) => I64(i64::from(*v)),
            (Type::I64, I32(v)) => I64(i64::from(*v)),
            (Type::I64, I64(v)) => I64(*v),
            (Type::F32, F32(v)) => F32(*v),
            (Type::F64, F32(v)) => F64(f64::from(*v)),
            (Type::F64, F64(v)) => F64(*v),
            (Type::String, String(v)) => String(v.clone()),
            (Type::Uuid, Uuid(v)) => Uuid(*v),
            (Type::Timestamp, Timestamp(v)) => Timestamp(*v),
            _ => return None,
        };

        Some(assigned)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => f.write_str("bool"),
            Type::I16 => f.write_str("i16"),
            Type::I32 => f.write_str("i32"),
            Type::I64 => f.write_str("i64"),
            Type::F32 => f.write_str("f32"),
            Type::F64 => f.write_str("f64"),
            Type::String => f.write_str("String"),
            Type::Uuid => f.write_str("Uuid"),
            Type::Timestamp => f.write_str("DateTime"),
            Type::Option(inner) => write!(f, "Option<{inner}>"),
            Type::List(inner) => write!(f, "Vec<{inner}>"),
            Type::Model(model) => f.write_str(model.schema().name),
        }
    }
}
