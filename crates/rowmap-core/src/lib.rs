//! Core data model for rowmap: the dynamic [`Value`] and [`Record`] types that
//! carry database rows, the nullable column wrappers drivers hand out, the
//! converters that unwrap them, and the per-model schema descriptors the
//! mapping engine walks.

pub mod convert;

mod error;
pub use error::{Error, IntoError};

pub mod nullable;
pub use nullable::{Nullable, NullableValue};

pub mod schema;
pub use schema::{Field, ModelRef, ModelSchema};

mod ty;
pub use ty::Type;

pub mod value;
pub use value::{Record, ToValue, Value};

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
