use super::Error;

/// Error when more than one writable field maps to the same column.
///
/// Duplicate columns are fine for reading, but writing them would leave the
/// winning value up to sink write order.
#[derive(Debug)]
pub(super) struct DuplicateColumnsError {
    pub(super) columns: Vec<String>,
}

impl std::error::Error for DuplicateColumnsError {}

impl core::fmt::Display for DuplicateColumnsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate column definitions: {}",
            self.columns.join(", ")
        )
    }
}

impl Error {
    /// Creates a duplicate column error naming the offending columns.
    pub fn duplicate_columns(columns: Vec<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateColumns(DuplicateColumnsError {
            columns,
        }))
    }

    /// Returns `true` if this error is a duplicate column error.
    pub fn is_duplicate_columns(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::DuplicateColumns(_)))
    }

    /// Returns the offending column names if this is a duplicate column error.
    pub fn duplicate_columns_list(&self) -> Option<&[String]> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::DuplicateColumns(err) => Some(&err.columns[..]),
            _ => None,
        })
    }
}
