use super::Error;
use crate::{Type, Value};

/// Error when a resolved source field cannot be mapped into its target field.
///
/// This is only raised by a strict mapper. In the default lenient mode the
/// target field is left at its zero value instead.
#[derive(Debug)]
pub(super) struct IncompatibleFieldError {
    model: &'static str,
    field: &'static str,
    found: &'static str,
    expected: Type,
}

impl std::error::Error for IncompatibleFieldError {}

impl core::fmt::Display for IncompatibleFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "incompatible field {}.{}: cannot map {} into {}",
            self.model, self.field, self.found, self.expected
        )
    }
}

impl Error {
    /// Creates an incompatible field error for `model.field`, whose source
    /// value could not be converted to `expected`.
    pub fn incompatible_field(
        model: &'static str,
        field: &'static str,
        source: &Value,
        expected: &Type,
    ) -> Error {
        Error::from(super::ErrorKind::IncompatibleField(IncompatibleFieldError {
            model,
            field,
            found: source.type_name(),
            expected: expected.clone(),
        }))
    }

    /// Returns `true` if this error is an incompatible field error.
    pub fn is_incompatible_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IncompatibleField(_))
    }
}
