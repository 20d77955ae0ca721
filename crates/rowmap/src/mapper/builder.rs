use super::Mapper;

/// Configures a [`Mapper`].
#[derive(Debug, Default)]
pub struct Builder {
    strict: bool,
}

impl Builder {
    /// Report source fields whose shape does not fit the target field as
    /// errors instead of leaving the field at its zero value.
    pub fn strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    pub fn build(&self) -> Mapper {
        Mapper {
            strict: self.strict,
        }
    }
}
