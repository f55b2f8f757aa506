use crate::{Result, Value};

/// A source of named scalar values: one database record.
///
/// Rows are borrowed for the duration of a single conversion and never
/// retained.
pub trait Row {
    /// Returns the cell stored under `column`.
    ///
    /// Fails with a missing column error if the row has no such column.
    fn get(&self, column: &str) -> Result<&Value>;

    /// Returns `true` if the cell stored under `column` is null.
    fn is_null(&self, column: &str) -> Result<bool> {
        Ok(self.get(column)?.is_null())
    }
}

/// A [`Row`] that moves sequentially over a set of records.
pub trait Cursor: Row {
    /// Moves to the first record, returning `false` if there is none.
    fn move_to_first(&mut self) -> bool;

    /// Moves to the next record, returning `false` once past the last one.
    fn advance(&mut self) -> bool;
}

impl<R: Row + ?Sized> Row for &R {
    fn get(&self, column: &str) -> Result<&Value> {
        (**self).get(column)
    }

    fn is_null(&self, column: &str) -> Result<bool> {
        (**self).is_null(column)
    }
}

impl<R: Row + ?Sized> Row for &mut R {
    fn get(&self, column: &str) -> Result<&Value> {
        (**self).get(column)
    }

    fn is_null(&self, column: &str) -> Result<bool> {
        (**self).is_null(column)
    }
}
