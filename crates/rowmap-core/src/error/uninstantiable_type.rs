use super::Error;

/// Error when a new instance of a mapped type cannot be created.
#[derive(Debug)]
pub(super) struct UninstantiableTypeError {
    type_name: Box<str>,
}

impl std::error::Error for UninstantiableTypeError {}

impl core::fmt::Display for UninstantiableTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type `{}` has no zero-argument constructor",
            self.type_name
        )
    }
}

impl Error {
    /// Creates an uninstantiable type error.
    pub fn uninstantiable_type(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UninstantiableType(
            UninstantiableTypeError {
                type_name: type_name.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an uninstantiable type error.
    pub fn is_uninstantiable_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UninstantiableType(_)))
    }
}
