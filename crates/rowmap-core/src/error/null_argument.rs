use super::Error;

/// Error when a required argument is absent.
#[derive(Debug)]
pub(super) struct NullArgumentError {
    argument: &'static str,
}

impl std::error::Error for NullArgumentError {}

impl core::fmt::Display for NullArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "argument `{}` must not be null", self.argument)
    }
}

impl Error {
    /// Creates a null argument error.
    pub fn null_argument(argument: &'static str) -> Error {
        Error::from(super::ErrorKind::NullArgument(NullArgumentError { argument }))
    }

    /// Returns `true` if this error is a null argument error.
    pub fn is_null_argument(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NullArgument(_)))
    }
}
