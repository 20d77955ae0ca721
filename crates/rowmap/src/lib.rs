//! Map database rows onto application models.
//!
//! Rows come from a driver as structs of plain values and nullable column
//! wrappers ([`nullable::Text`], [`nullable::Uuid`], ...). Models are plain
//! structs. Deriving [`Row`] on the former and [`Model`] on the latter lets
//! [`map_one`] and [`map_many`] copy fields across by name, unwrapping
//! nullable columns, recursing into nested records and lists, and leaving any
//! field it cannot fill at its zero value.
//!
//! ```ignore
//! #[derive(rowmap::Row)]
//! struct UserRow {
//!     id: rowmap::nullable::Uuid,
//!     display_name: rowmap::nullable::Text,
//! }
//!
//! #[derive(rowmap::Model)]
//! struct User {
//!     id: String,
//!     #[row("display_name")]
//!     name: Option<String>,
//! }
//!
//! let user: User = rowmap::map_one(&row)?;
//! ```

mod engine;

mod fn_mapper;
pub use fn_mapper::FnMapper;

pub mod mapper;
pub use mapper::Mapper;

mod model;
pub use model::Model;

mod primitive;
pub use primitive::Primitive;

mod row;
pub use row::Row;

pub use rowmap_core::{
    convert, err, nullable, schema, Error, Nullable, NullableValue, Record, Result, ToValue,
    Type, Value,
};

pub use rowmap_macros::{Model, Row};

/// Maps one source row into a model using the default (lenient) [`Mapper`].
pub fn map_one<M: Model>(source: &(impl Row + ?Sized)) -> Result<M> {
    Mapper::new().map_one(source)
}

/// Maps every source row, in order, using the default (lenient) [`Mapper`].
///
/// Stops at the first failing row and returns its error; no partial output is
/// returned.
pub fn map_many<M: Model>(sources: impl IntoIterator<Item = impl Row>) -> Result<Vec<M>> {
    Mapper::new().map_many(sources)
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Model, Primitive, Result, Row};
    pub use rowmap_core::{
        err,
        schema::{Field, ModelRef, ModelSchema},
        Record, ToValue, Type, Value,
    };
    pub use std::{default::Default, sync::OnceLock, vec::Vec};
}
