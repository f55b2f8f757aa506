use crate::schema::{Access, Column, Field};

use rowmap_core::{Error, Result, Row, Sink, TypeAdapter, TypeAdapters};

use std::sync::Arc;

/// Type-erased access to one column-mapped field of `M`.
pub(crate) trait ColumnOps<M>: Send + Sync {
    fn read(&self, row: &dyn Row, column: &str, target: &mut M) -> Result<()>;

    fn write(&self, source: &M, sink: &mut dyn Sink, column: &str) -> Result<()>;

    fn is_null(&self, source: &M) -> bool;

    fn nullable(&self) -> bool;
}

/// A field of `M` holding a `T`, converted with the adapter of `T`.
pub(crate) struct BoundColumn<M, T> {
    adapter: Arc<dyn TypeAdapter<T>>,
    access: Access<M, T>,
}

/// A column of the base `B` seen from the derived `M`.
pub(crate) struct LiftedColumn<M, B> {
    access: Access<M, B>,
    inner: Arc<dyn ColumnOps<B>>,
}

/// Reads and writes a single column-mapped field.
pub struct ColumnFieldAdapter<M> {
    field: String,
    column: String,
    readonly: bool,
    treat_null_as_default: bool,
    ops: Arc<dyn ColumnOps<M>>,
}

impl<M, T> BoundColumn<M, T> {
    pub(crate) fn new(adapter: Arc<dyn TypeAdapter<T>>, access: Access<M, T>) -> BoundColumn<M, T> {
        BoundColumn { adapter, access }
    }
}

impl<M: 'static, T: 'static> ColumnOps<M> for BoundColumn<M, T> {
    fn read(&self, row: &dyn Row, column: &str, target: &mut M) -> Result<()> {
        let value = self.adapter.from_row(row, column)?;
        *self.access.get_mut(target) = value;
        Ok(())
    }

    fn write(&self, source: &M, sink: &mut dyn Sink, column: &str) -> Result<()> {
        self.adapter.to_sink(sink, column, self.access.get(source))
    }

    fn is_null(&self, source: &M) -> bool {
        self.adapter.is_null(self.access.get(source))
    }

    fn nullable(&self) -> bool {
        self.adapter.nullable()
    }
}

impl<M, B> LiftedColumn<M, B> {
    pub(crate) fn new(access: Access<M, B>, inner: Arc<dyn ColumnOps<B>>) -> LiftedColumn<M, B> {
        LiftedColumn { access, inner }
    }
}

impl<M: 'static, B: 'static> ColumnOps<M> for LiftedColumn<M, B> {
    fn read(&self, row: &dyn Row, column: &str, target: &mut M) -> Result<()> {
        self.inner.read(row, column, self.access.get_mut(target))
    }

    fn write(&self, source: &M, sink: &mut dyn Sink, column: &str) -> Result<()> {
        self.inner.write(self.access.get(source), sink, column)
    }

    fn is_null(&self, source: &M) -> bool {
        self.inner.is_null(self.access.get(source))
    }

    fn nullable(&self) -> bool {
        self.inner.nullable()
    }
}

impl<M: 'static> ColumnFieldAdapter<M> {
    pub(crate) fn new(
        field: &Field<M>,
        column: &Column<M>,
        adapters: &TypeAdapters,
    ) -> Result<ColumnFieldAdapter<M>> {
        let attr = column.attr();
        let name = field.qualified_name();

        if attr.name.is_empty() {
            return Err(Error::invalid_mapping(format!(
                "`{name}` has an empty column name"
            )));
        }

        if attr.readonly && attr.treat_null_as_default {
            return Err(Error::invalid_mapping(format!(
                "`{name}` cannot be both readonly and treat_null_as_default"
            )));
        }

        let Some(ops) = column.bind(adapters) else {
            return Err(Error::unregistered_type_adapter(field.ty, name));
        };

        if attr.treat_null_as_default && !ops.nullable() {
            return Err(Error::invalid_mapping(format!(
                "`{name}` is treat_null_as_default but `{}` cannot be null",
                field.ty
            )));
        }

        Ok(ColumnFieldAdapter {
            field: name,
            column: attr.name.clone(),
            readonly: attr.readonly,
            treat_null_as_default: attr.treat_null_as_default,
            ops,
        })
    }

    /// The mapped field, as `Type::field`.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn treats_null_as_default(&self) -> bool {
        self.treat_null_as_default
    }

    pub(crate) fn read_into(&self, row: &dyn Row, target: &mut M) -> Result<()> {
        self.ops.read(row, &self.column, target)
    }

    pub(crate) fn write_from(&self, source: &M, sink: &mut dyn Sink) -> Result<()> {
        if self.readonly || (self.treat_null_as_default && self.ops.is_null(source)) {
            return Ok(());
        }

        self.ops.write(source, sink, &self.column)
    }

    pub(crate) fn write_nulls(&self, sink: &mut dyn Sink) {
        if !self.readonly && !self.treat_null_as_default {
            sink.put_null(&self.column);
        }
    }

    pub(crate) fn column_names(&self) -> &[String] {
        std::slice::from_ref(&self.column)
    }

    pub(crate) fn writable_column_names(&self) -> &[String] {
        if self.readonly {
            &[]
        } else {
            std::slice::from_ref(&self.column)
        }
    }
}

impl<M> core::fmt::Debug for ColumnFieldAdapter<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ColumnFieldAdapter")
            .field("field", &self.field)
            .field("column", &self.column)
            .field("readonly", &self.readonly)
            .field("treat_null_as_default", &self.treat_null_as_default)
            .finish()
    }
}
