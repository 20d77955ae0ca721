use super::Field;

use std::fmt;

/// Mapping descriptor for a model type.
///
/// Generated by `#[derive(Model)]` and built once per process. Fields are
/// listed in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    /// Model type name
    pub name: &'static str,

    /// Model fields
    pub fields: Vec<Field>,
}

/// Lazy reference to a model's schema.
///
/// Field types refer to nested models through this handle rather than by
/// value so that self-referential models (`Vec<Self>`) can be described.
#[derive(Clone, Copy)]
pub struct ModelRef(fn() -> &'static ModelSchema);

impl ModelRef {
    pub const fn new(schema: fn() -> &'static ModelSchema) -> ModelRef {
        ModelRef(schema)
    }

    pub fn schema(&self) -> &'static ModelSchema {
        (self.0)()
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema(), other.schema())
    }
}

impl fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelRef").field(&self.schema().name).finish()
    }
}
