use super::Error;

/// Error when a cursor is read while not positioned on a record.
#[derive(Debug)]
pub(super) struct CursorOutOfBoundsError {
    position: usize,
    len: usize,
}

impl std::error::Error for CursorOutOfBoundsError {}

impl core::fmt::Display for CursorOutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cursor position {} is out of bounds ({} records)",
            self.position, self.len
        )
    }
}

impl Error {
    /// Creates a cursor position error.
    pub fn cursor_out_of_bounds(position: usize, len: usize) -> Error {
        Error::from(super::ErrorKind::CursorOutOfBounds(CursorOutOfBoundsError {
            position,
            len,
        }))
    }

    /// Returns `true` if this error is a cursor position error.
    pub fn is_cursor_out_of_bounds(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::CursorOutOfBounds(_)))
    }
}
