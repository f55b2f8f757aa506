mod adhoc;
mod cursor_out_of_bounds;
mod duplicate_columns;
mod invalid_mapping;
mod missing_column;
mod null_argument;
mod type_conversion;
mod uninstantiable_type;
mod unregistered_type;

use adhoc::AdhocError;
use cursor_out_of_bounds::CursorOutOfBoundsError;
use duplicate_columns::DuplicateColumnsError;
use invalid_mapping::InvalidMappingError;
use missing_column::MissingColumnError;
use null_argument::NullArgumentError;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use uninstantiable_type::UninstantiableTypeError;
use unregistered_type::UnregisteredTypeError;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while building or running a row mapping.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    assert!(
                        inner.cause.is_none(),
                        "consequent error must not already have a cause"
                    );
                    inner.kind
                }
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut root = self;
        for err in self.chain() {
            root = err;
        }
        root
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// True if any error of the context chain matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidMapping(InvalidMappingError),
    UnregisteredType(UnregisteredTypeError),
    UninstantiableType(UninstantiableTypeError),
    DuplicateColumns(DuplicateColumnsError),
    MissingColumn(MissingColumnError),
    NullArgument(NullArgumentError),
    TypeConversion(TypeConversionError),
    CursorOutOfBounds(CursorOutOfBoundsError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidMapping(err) => core::fmt::Display::fmt(err, f),
            UnregisteredType(err) => core::fmt::Display::fmt(err, f),
            UninstantiableType(err) => core::fmt::Display::fmt(err, f),
            DuplicateColumns(err) => core::fmt::Display::fmt(err, f),
            MissingColumn(err) => core::fmt::Display::fmt(err, f),
            NullArgument(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            CursorOutOfBounds(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown rowmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(err: std::num::TryFromIntError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::missing_column("age");
        let chained = root
            .context(err!("reading Person"))
            .context(err!("list_from_rows"));

        assert_eq!(
            chained.to_string(),
            "list_from_rows: reading Person: column `age` does not exist in row"
        );
    }

    #[test]
    fn predicates_look_through_context() {
        let err = Error::duplicate_columns(vec!["_id".to_string()]).context(err!("writing"));

        assert!(err.is_duplicate_columns());
        assert!(!err.is_missing_column());
        assert_eq!(err.duplicate_columns_list(), Some(&["_id".to_string()][..]));
        assert!(err.root().is_duplicate_columns());
    }

    #[test]
    fn context_is_not_repeated_as_source() {
        use std::error::Error as _;

        let err = Error::missing_column("age").context(err!("reading Person"));

        assert!(err.source().is_none());
        assert_eq!(anyhow::Error::new(err).chain().count(), 1);
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("custom adapter failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "custom adapter failed");
    }

    #[test]
    fn invalid_mapping_message() {
        let err = Error::invalid_mapping("`Point::x` has an empty column name");
        assert!(err.is_invalid_mapping());
        assert_eq!(
            err.to_string(),
            "invalid mapping declaration: `Point::x` has an empty column name"
        );
    }

    #[test]
    fn unregistered_type_messages() {
        let err = Error::unregistered_type("BigDecimal");
        assert!(err.is_unregistered_type());
        assert_eq!(
            err.to_string(),
            "no type adapter registered for `BigDecimal`"
        );

        let err = Error::unregistered_type_adapter("BigDecimal", "Invoice::total");
        assert!(err.is_unregistered_type());
        assert_eq!(
            err.to_string(),
            "no type adapter registered for `BigDecimal` (field `Invoice::total`)"
        );
    }

    #[test]
    fn uninstantiable_type_message() {
        let err = Error::uninstantiable_type("Token");
        assert!(err.is_uninstantiable_type());
        assert_eq!(
            err.to_string(),
            "type `Token` has no zero-argument constructor"
        );
    }

    #[test]
    fn duplicate_columns_message() {
        let err = Error::duplicate_columns(vec!["_id".to_string(), "name".to_string()]);
        assert_eq!(
            err.to_string(),
            "duplicate column definitions: _id, name"
        );
    }

    #[test]
    fn type_conversion_error() {
        let err = Error::type_conversion(Value::String("x".into()), "i32");
        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert String to i32");
    }

    #[test]
    fn null_argument_message() {
        let err = Error::null_argument("column name");
        assert!(err.is_null_argument());
        assert_eq!(err.to_string(), "argument `column name` must not be null");
    }

    #[test]
    fn cursor_out_of_bounds_message() {
        let err = Error::cursor_out_of_bounds(3, 3);
        assert!(err.is_cursor_out_of_bounds());
        assert_eq!(
            err.to_string(),
            "cursor position 3 is out of bounds (3 records)"
        );
    }
}
