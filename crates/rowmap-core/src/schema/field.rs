use crate::Type;

/// Mapping descriptor for one model field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name, as declared on the model
    pub name: &'static str,

    /// Source field name given by a `#[row("...")]` annotation
    pub source: Option<&'static str>,

    /// Declared field type
    pub ty: Type,
}

impl Field {
    pub fn new(name: &'static str, ty: Type) -> Field {
        Field {
            name,
            source: None,
            ty,
        }
    }

    pub fn with_source(mut self, source: &'static str) -> Field {
        self.source = Some(source);
        self
    }

    /// The name the field is looked up under in a source record: the
    /// annotation when present, the field name otherwise.
    pub fn source_name(&self) -> &'static str {
        self.source.unwrap_or(self.name)
    }
}
