use crate::Result;

use rowmap_core::{schema::ModelSchema, Record};

/// An application model that rows can be mapped into.
///
/// Implemented by `#[derive(Model)]`.
pub trait Model: Sized {
    /// Mapping descriptor for the model, built on first use.
    fn schema() -> &'static ModelSchema;

    /// Builds the model from a record keyed by the model's field names.
    ///
    /// Missing or `Null` fields load as their zero value.
    fn load(record: Record) -> Result<Self>;
}
