//! Nullable column wrappers.
//!
//! Database drivers distinguish SQL `NULL` from a present value by pairing the
//! payload with a validity flag. The aliases in this module name the six
//! shapes rowmap knows how to unwrap, using the Postgres type names drivers
//! expose them under.

use chrono::{DateTime, FixedOffset};

/// A column value paired with a validity flag.
///
/// `value` is only meaningful when `valid` is `true`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

/// Nullable `text` / `varchar` column.
pub type Text = Nullable<String>;

/// Nullable `float8` / `double precision` column.
pub type Float8 = Nullable<f64>;

/// Nullable `int4` / `integer` column.
pub type Int4 = Nullable<i32>;

/// Nullable `bool` column.
pub type Bool = Nullable<bool>;

/// Nullable `timestamptz` column.
pub type Timestamptz = Nullable<DateTime<FixedOffset>>;

/// Nullable `uuid` column, carried as its raw 16 bytes.
pub type Uuid = Nullable<[u8; 16]>;

impl<T> Nullable<T> {
    /// Creates a valid (non-null) value.
    pub const fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    /// Creates an invalid (null) value with a default payload.
    pub fn null() -> Self
    where
        T: Default,
    {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Returns the payload if the value is valid.
    pub fn get(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::null(),
        }
    }
}

/// One of the six known nullable shapes.
///
/// Adding a shape means adding a variant here, which forces every exhaustive
/// dispatch (see [`crate::convert::convert`]) to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum NullableValue {
    Text(Text),
    Float8(Float8),
    Int4(Int4),
    Bool(Bool),
    Timestamptz(Timestamptz),
    Uuid(Uuid),
}

impl NullableValue {
    /// Returns `true` if the wrapped value is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        match self {
            Self::Text(v) => v.is_null(),
            Self::Float8(v) => v.is_null(),
            Self::Int4(v) => v.is_null(),
            Self::Bool(v) => v.is_null(),
            Self::Timestamptz(v) => v.is_null(),
            Self::Uuid(v) => v.is_null(),
        }
    }

    /// Name of the wrapper shape, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Float8(_) => "Float8",
            Self::Int4(_) => "Int4",
            Self::Bool(_) => "Bool",
            Self::Timestamptz(_) => "Timestamptz",
            Self::Uuid(_) => "Uuid",
        }
    }
}

macro_rules! impl_nullable_conversions {
    ( $( $variant:ident => $payload:ty ),+ $(,)? ) => {
        $(
            impl From<Nullable<$payload>> for NullableValue {
                fn from(value: Nullable<$payload>) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_nullable_conversions! {
    Text => String,
    Float8 => f64,
    Int4 => i32,
    Bool => bool,
    Timestamptz => DateTime<FixedOffset>,
    Uuid => [u8; 16],
}
