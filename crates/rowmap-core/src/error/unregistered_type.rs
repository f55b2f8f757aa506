use super::Error;

/// Error when no type adapter is registered for a value type.
#[derive(Debug)]
pub(super) struct UnregisteredTypeError {
    type_name: Box<str>,

    /// The mapped field that required the adapter, if any
    field: Option<Box<str>>,
}

impl std::error::Error for UnregisteredTypeError {}

impl core::fmt::Display for UnregisteredTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no type adapter registered for `{}`", self.type_name)?;
        if let Some(ref field) = self.field {
            write!(f, " (field `{}`)", field)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a single-column read of an unregistered type.
    pub fn unregistered_type(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnregisteredType(UnregisteredTypeError {
            type_name: type_name.into().into(),
            field: None,
        }))
    }

    /// Creates an error for a mapped field whose value type has no adapter.
    pub fn unregistered_type_adapter(
        type_name: impl Into<String>,
        field: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnregisteredType(UnregisteredTypeError {
            type_name: type_name.into().into(),
            field: Some(field.into().into()),
        }))
    }

    /// Returns `true` if this error is an unregistered type error.
    pub fn is_unregistered_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnregisteredType(_)))
    }
}
