mod builtin;
pub use builtin::{
    BoolAdapter, F32Adapter, F64Adapter, I16Adapter, I32Adapter, I64Adapter, StringAdapter,
};

mod nullable;
pub use nullable::Nullable;

mod registry;
pub use registry::TypeAdapters;

use crate::{Result, Row, Sink};

/// Converts one value of type `T` from a row cell and into a sink entry.
///
/// Adapters are stateless and shared between every field of type `T`, so they
/// must be `Send + Sync`.
pub trait TypeAdapter<T>: Send + Sync + 'static {
    /// Reads the cell stored under `column` and converts it to `T`.
    fn from_row(&self, row: &dyn Row, column: &str) -> Result<T>;

    /// Converts `value` and stores it in `sink` under `column`.
    fn to_sink(&self, sink: &mut dyn Sink, column: &str, value: &T) -> Result<()>;

    /// Returns `true` if values of `T` can be null.
    ///
    /// Only columns backed by a nullable adapter may be declared with
    /// `treat_null_as_default`.
    fn nullable(&self) -> bool {
        false
    }

    /// Returns `true` if `value` is the null value of `T`.
    fn is_null(&self, _value: &T) -> bool {
        false
    }
}

impl<T, A> TypeAdapter<T> for std::sync::Arc<A>
where
    A: TypeAdapter<T> + ?Sized,
{
    fn from_row(&self, row: &dyn Row, column: &str) -> Result<T> {
        (**self).from_row(row, column)
    }

    fn to_sink(&self, sink: &mut dyn Sink, column: &str, value: &T) -> Result<()> {
        (**self).to_sink(sink, column, value)
    }

    fn nullable(&self) -> bool {
        (**self).nullable()
    }

    fn is_null(&self, value: &T) -> bool {
        (**self).is_null(value)
    }
}
