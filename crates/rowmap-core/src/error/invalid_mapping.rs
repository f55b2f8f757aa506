use super::Error;

/// Error when a mapping declaration is contradictory.
///
/// This occurs when:
/// - A column is both `readonly` and `treat_null_as_default`
/// - `treat_null_as_default` is set on a field whose type can never be null
/// - A column name is empty
/// - A type embeds itself, directly or through other embedded types
///
/// These errors are raised while building a type's adapter, the first time the
/// type is used.
#[derive(Debug)]
pub(super) struct InvalidMappingError {
    message: Box<str>,
}

impl std::error::Error for InvalidMappingError {}

impl core::fmt::Display for InvalidMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid mapping declaration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid mapping declaration error.
    pub fn invalid_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMapping(InvalidMappingError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid mapping declaration error.
    pub fn is_invalid_mapping(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidMapping(_)))
    }
}
