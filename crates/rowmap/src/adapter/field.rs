use super::{ColumnFieldAdapter, EmbeddedFieldAdapter};

use rowmap_core::{Result, Row, Sink};

/// Converts one mapped field between an object and a row.
pub enum FieldAdapter<M> {
    Column(ColumnFieldAdapter<M>),
    Embedded(EmbeddedFieldAdapter<M>),
}

impl<M: 'static> FieldAdapter<M> {
    /// The mapped field, as `Type::field`.
    pub fn field(&self) -> &str {
        match self {
            FieldAdapter::Column(adapter) => adapter.field(),
            FieldAdapter::Embedded(adapter) => adapter.field(),
        }
    }

    pub fn read_into(&self, row: &dyn Row, target: &mut M) -> Result<()> {
        match self {
            FieldAdapter::Column(adapter) => adapter.read_into(row, target),
            FieldAdapter::Embedded(adapter) => adapter.read_into(row, target),
        }
    }

    pub fn write_from(&self, source: &M, sink: &mut dyn Sink) -> Result<()> {
        match self {
            FieldAdapter::Column(adapter) => adapter.write_from(source, sink),
            FieldAdapter::Embedded(adapter) => adapter.write_from(source, sink),
        }
    }

    /// Writes a null for every writable column of the field. Columns that
    /// treat null as default are left out.
    pub fn write_nulls(&self, sink: &mut dyn Sink) {
        match self {
            FieldAdapter::Column(adapter) => adapter.write_nulls(sink),
            FieldAdapter::Embedded(adapter) => adapter.write_nulls(sink),
        }
    }

    /// Every column the field reads.
    pub fn column_names(&self) -> &[String] {
        match self {
            FieldAdapter::Column(adapter) => adapter.column_names(),
            FieldAdapter::Embedded(adapter) => adapter.column_names(),
        }
    }

    /// Every column the field may write.
    pub fn writable_column_names(&self) -> &[String] {
        match self {
            FieldAdapter::Column(adapter) => adapter.writable_column_names(),
            FieldAdapter::Embedded(adapter) => adapter.writable_column_names(),
        }
    }
}

impl<M> core::fmt::Debug for FieldAdapter<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            FieldAdapter::Column(adapter) => core::fmt::Debug::fmt(adapter, f),
            FieldAdapter::Embedded(adapter) => core::fmt::Debug::fmt(adapter, f),
        }
    }
}
