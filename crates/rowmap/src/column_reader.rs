use crate::Mapper;

use rowmap_core::{Error, Result, Row, TypeAdapter};

use std::sync::Arc;

/// Picks the value type of a [`ColumnReader`].
///
/// Returned by [`Mapper::column`].
#[derive(Debug)]
pub struct ColumnReaderBuilder<'a> {
    mapper: &'a Mapper,
    column: String,
}

/// Reads one column of a row with a registered type adapter.
pub struct ColumnReader<T> {
    column: String,
    adapter: Arc<dyn TypeAdapter<T>>,
}

impl<'a> ColumnReaderBuilder<'a> {
    pub(crate) fn new(mapper: &'a Mapper, column: String) -> ColumnReaderBuilder<'a> {
        ColumnReaderBuilder { mapper, column }
    }

    /// Reads the column as a `T`. Fails if the mapper has no adapter for
    /// `T`.
    pub fn of<T: 'static>(&self) -> Result<ColumnReader<T>> {
        let Some(adapter) = self.mapper.type_adapters().get::<T>() else {
            return Err(Error::unregistered_type(std::any::type_name::<T>()));
        };

        Ok(ColumnReader {
            column: self.column.clone(),
            adapter,
        })
    }
}

impl<T: 'static> ColumnReader<T> {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn read(&self, row: &dyn Row) -> Result<T> {
        self.adapter.from_row(row, &self.column)
    }
}

impl<T> Clone for ColumnReader<T> {
    fn clone(&self) -> Self {
        ColumnReader {
            column: self.column.clone(),
            adapter: self.adapter.clone(),
        }
    }
}

impl<T> core::fmt::Debug for ColumnReader<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ColumnReader")
            .field("column", &self.column)
            .field("ty", &std::any::type_name::<T>())
            .finish()
    }
}
