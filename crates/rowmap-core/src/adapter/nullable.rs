use super::TypeAdapter;
use crate::{Result, Row, Sink};

/// Wraps the adapter of `T` into an adapter of `Option<T>`.
///
/// A null cell reads as `None` without consulting the wrapped adapter, and
/// `None` is written as an explicit null entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nullable<A>(pub A);

impl<T, A> TypeAdapter<Option<T>> for Nullable<A>
where
    A: TypeAdapter<T>,
{
    fn from_row(&self, row: &dyn Row, column: &str) -> Result<Option<T>> {
        if row.is_null(column)? {
            Ok(None)
        } else {
            self.0.from_row(row, column).map(Some)
        }
    }

    fn to_sink(&self, sink: &mut dyn Sink, column: &str, value: &Option<T>) -> Result<()> {
        match value {
            Some(value) => self.0.to_sink(sink, column, value),
            None => {
                sink.put_null(column);
                Ok(())
            }
        }
    }

    fn nullable(&self) -> bool {
        true
    }

    fn is_null(&self, value: &Option<T>) -> bool {
        value.is_none()
    }
}
