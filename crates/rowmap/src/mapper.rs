mod builder;
pub use builder::Builder;

use crate::{engine, Model, Result, Row};

use rowmap_core::{err, Record};

/// Maps rows into models.
///
/// A default mapper is lenient: source fields that are missing, or whose
/// shape does not fit the target field, leave the field at its zero value. A
/// strict mapper reports shape mismatches as errors instead. Missing source
/// fields are never an error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Mapper {
    strict: bool,
}

impl Mapper {
    /// Returns a lenient mapper.
    pub const fn new() -> Mapper {
        Mapper { strict: false }
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn map_one<M: Model>(&self, source: &(impl Row + ?Sized)) -> Result<M> {
        self.map_record(&source.to_record())
    }

    /// Maps every source row, in order.
    ///
    /// Stops at the first failing row; its error gains the row's index as
    /// context.
    pub fn map_many<M: Model>(&self, sources: impl IntoIterator<Item = impl Row>) -> Result<Vec<M>> {
        sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                self.map_one(&source)
                    .map_err(|e| e.context(err!("row {index}")))
            })
            .collect()
    }

    /// Maps a hand-built record.
    pub fn map_record<M: Model>(&self, record: &Record) -> Result<M> {
        let schema = M::schema();
        let mapped = engine::map_record(self, record, schema)?;
        M::load(mapped).map_err(|e| e.context(err!("loading {}", schema.name)))
    }
}
