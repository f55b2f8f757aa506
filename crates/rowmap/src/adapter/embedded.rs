use super::DaoAdapter;
use crate::schema::{Access, Field};

use rowmap_core::{Result, Row, Sink};

use std::sync::Arc;

/// Type-erased access to one embedded field of `M`.
pub(crate) trait EmbeddedOps<M>: Send + Sync {
    fn read(&self, row: &dyn Row, target: &mut M) -> Result<()>;

    fn write(&self, source: &M, sink: &mut dyn Sink) -> Result<()>;

    /// Writes a null for every column the embedded type would write.
    fn write_nulls(&self, sink: &mut dyn Sink);

    /// Makes sure the embedded value, and every embedded value below it, is
    /// present.
    fn initialize(&self, target: &mut M) -> Result<()>;

    fn model(&self) -> &'static str;

    fn columns(&self) -> &[String];

    fn writable_columns(&self) -> &[String];
}

/// An `E` field that is always present.
pub(crate) struct RequiredEmbedded<M, E> {
    adapter: Arc<DaoAdapter<E>>,
    access: Access<M, E>,
}

/// An `Option<E>` field.
pub(crate) struct OptionalEmbedded<M, E> {
    adapter: Arc<DaoAdapter<E>>,
    access: Access<M, Option<E>>,
}

/// An embedded field of the base `B` seen from the derived `M`.
pub(crate) struct LiftedEmbedded<M, B> {
    access: Access<M, B>,
    inner: Arc<dyn EmbeddedOps<B>>,
}

/// Reads and writes a field holding an embedded type, delegating to that
/// type's [`DaoAdapter`].
pub struct EmbeddedFieldAdapter<M> {
    field: String,
    ops: Arc<dyn EmbeddedOps<M>>,
}

/// Fills in an absent embedded value when an instance is created.
pub struct EmbeddedFieldInitializer<M> {
    ops: Arc<dyn EmbeddedOps<M>>,
}

impl<M, E> RequiredEmbedded<M, E> {
    pub(crate) fn new(adapter: Arc<DaoAdapter<E>>, access: Access<M, E>) -> RequiredEmbedded<M, E> {
        RequiredEmbedded { adapter, access }
    }
}

impl<M: 'static, E: 'static> EmbeddedOps<M> for RequiredEmbedded<M, E> {
    fn read(&self, row: &dyn Row, target: &mut M) -> Result<()> {
        self.adapter.read_row(row, self.access.get_mut(target))?;
        Ok(())
    }

    fn write(&self, source: &M, sink: &mut dyn Sink) -> Result<()> {
        self.adapter.write_fields(self.access.get(source), sink)
    }

    fn write_nulls(&self, sink: &mut dyn Sink) {
        self.adapter.write_nulls(sink);
    }

    fn initialize(&self, target: &mut M) -> Result<()> {
        self.adapter.initialize(self.access.get_mut(target))
    }

    fn model(&self) -> &'static str {
        self.adapter.name()
    }

    fn columns(&self) -> &[String] {
        self.adapter.projection_slice()
    }

    fn writable_columns(&self) -> &[String] {
        self.adapter.writable_columns_slice()
    }
}

impl<M, E: 'static> OptionalEmbedded<M, E> {
    pub(crate) fn new(
        adapter: Arc<DaoAdapter<E>>,
        access: Access<M, Option<E>>,
    ) -> OptionalEmbedded<M, E> {
        OptionalEmbedded { adapter, access }
    }

    /// True when the row holds what writing `None` produces: every column of
    /// the embedded type is null or left out, and at least one is a null.
    fn is_absent_in(&self, row: &dyn Row) -> bool {
        let mut saw_null = false;

        for column in self.adapter.projection_slice() {
            match row.is_null(column) {
                Ok(true) => saw_null = true,
                Ok(false) => return false,
                Err(err) if err.is_missing_column() => {}
                Err(_) => return false,
            }
        }

        saw_null
    }
}

impl<M: 'static, E: 'static> EmbeddedOps<M> for OptionalEmbedded<M, E> {
    fn read(&self, row: &dyn Row, target: &mut M) -> Result<()> {
        let slot = self.access.get_mut(target);

        if self.is_absent_in(row) {
            *slot = None;
        } else if let Some(nested) = slot {
            self.adapter.read_row(row, nested)?;
        } else {
            let mut nested = self.adapter.create_instance()?;
            self.adapter.read_row(row, &mut nested)?;
            *slot = Some(nested);
        }

        Ok(())
    }

    fn write(&self, source: &M, sink: &mut dyn Sink) -> Result<()> {
        match self.access.get(source) {
            Some(nested) => self.adapter.write_fields(nested, sink),
            None => {
                self.adapter.write_nulls(sink);
                Ok(())
            }
        }
    }

    fn write_nulls(&self, sink: &mut dyn Sink) {
        self.adapter.write_nulls(sink);
    }

    fn initialize(&self, target: &mut M) -> Result<()> {
        let slot = self.access.get_mut(target);

        if let Some(nested) = slot {
            self.adapter.initialize(nested)
        } else {
            *slot = Some(self.adapter.create_instance()?);
            Ok(())
        }
    }

    fn model(&self) -> &'static str {
        self.adapter.name()
    }

    fn columns(&self) -> &[String] {
        self.adapter.projection_slice()
    }

    fn writable_columns(&self) -> &[String] {
        self.adapter.writable_columns_slice()
    }
}

impl<M, B> LiftedEmbedded<M, B> {
    pub(crate) fn new(access: Access<M, B>, inner: Arc<dyn EmbeddedOps<B>>) -> LiftedEmbedded<M, B> {
        LiftedEmbedded { access, inner }
    }
}

impl<M: 'static, B: 'static> EmbeddedOps<M> for LiftedEmbedded<M, B> {
    fn read(&self, row: &dyn Row, target: &mut M) -> Result<()> {
        self.inner.read(row, self.access.get_mut(target))
    }

    fn write(&self, source: &M, sink: &mut dyn Sink) -> Result<()> {
        self.inner.write(self.access.get(source), sink)
    }

    fn write_nulls(&self, sink: &mut dyn Sink) {
        self.inner.write_nulls(sink);
    }

    fn initialize(&self, target: &mut M) -> Result<()> {
        self.inner.initialize(self.access.get_mut(target))
    }

    fn model(&self) -> &'static str {
        self.inner.model()
    }

    fn columns(&self) -> &[String] {
        self.inner.columns()
    }

    fn writable_columns(&self) -> &[String] {
        self.inner.writable_columns()
    }
}

impl<M: 'static> EmbeddedFieldAdapter<M> {
    pub(crate) fn new(field: &Field<M>, ops: Arc<dyn EmbeddedOps<M>>) -> EmbeddedFieldAdapter<M> {
        EmbeddedFieldAdapter {
            field: field.qualified_name(),
            ops,
        }
    }

    /// The mapped field, as `Type::field`.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Name of the embedded type.
    pub fn model(&self) -> &'static str {
        self.ops.model()
    }

    pub(crate) fn read_into(&self, row: &dyn Row, target: &mut M) -> Result<()> {
        self.ops.read(row, target)
    }

    pub(crate) fn write_from(&self, source: &M, sink: &mut dyn Sink) -> Result<()> {
        self.ops.write(source, sink)
    }

    pub(crate) fn write_nulls(&self, sink: &mut dyn Sink) {
        self.ops.write_nulls(sink);
    }

    pub(crate) fn column_names(&self) -> &[String] {
        self.ops.columns()
    }

    pub(crate) fn writable_column_names(&self) -> &[String] {
        self.ops.writable_columns()
    }

    pub(crate) fn initializer(&self) -> EmbeddedFieldInitializer<M> {
        EmbeddedFieldInitializer {
            ops: self.ops.clone(),
        }
    }
}

impl<M: 'static> EmbeddedFieldInitializer<M> {
    pub(crate) fn initialize(&self, target: &mut M) -> Result<()> {
        self.ops.initialize(target)
    }
}

impl<M> core::fmt::Debug for EmbeddedFieldAdapter<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("EmbeddedFieldAdapter")
            .field("field", &self.field)
            .field("model", &self.ops.model())
            .finish()
    }
}
