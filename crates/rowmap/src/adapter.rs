//! Compiled conversion plans.

mod column;
pub use column::ColumnFieldAdapter;
pub(crate) use column::{BoundColumn, ColumnOps, LiftedColumn};

mod embedded;
pub use embedded::{EmbeddedFieldAdapter, EmbeddedFieldInitializer};
pub(crate) use embedded::{EmbeddedOps, LiftedEmbedded, OptionalEmbedded, RequiredEmbedded};

mod field;
pub use field::FieldAdapter;

use crate::schema::{self, Mapping};
use crate::Mapper;

use indexmap::IndexSet;
use rowmap_core::{err, Error, Result, Row, Sink};
use tracing::debug;

use std::any::TypeId;
use std::collections::HashSet;

/// The conversion plan for one mapped type.
///
/// Built once per type by a [`Mapper`] and shared by every conversion of that
/// type afterwards.
pub struct DaoAdapter<M> {
    name: &'static str,

    constructor: Option<fn() -> M>,

    /// Mapped fields in discovery order
    fields: Vec<FieldAdapter<M>>,

    /// One per embedded field, run when an instance is created
    initializers: Vec<EmbeddedFieldInitializer<M>>,

    /// Every column read, in field order
    projection: Vec<String>,

    /// Every column written, in field order
    writable_columns: Vec<String>,

    /// Columns written by more than one field, in first-seen order
    writable_duplicates: IndexSet<String>,
}

/// Tracks the types being built so a type that embeds itself is reported
/// instead of recursing forever.
#[derive(Debug, Default)]
pub(crate) struct BuildCx {
    stack: Vec<(TypeId, &'static str)>,
}

impl<M: 'static> DaoAdapter<M> {
    pub(crate) fn build(
        mapper: &Mapper,
        cx: &mut BuildCx,
        schema: schema::Model<M>,
    ) -> Result<DaoAdapter<M>> {
        let mut fields = vec![];
        let mut initializers = vec![];

        for field in &schema.fields {
            match &field.mapping {
                Mapping::Column(column) => {
                    let adapter = ColumnFieldAdapter::new(field, column, mapper.type_adapters())?;
                    fields.push(FieldAdapter::Column(adapter));
                }
                Mapping::Embedded(embedded) => {
                    let ops = embedded.bind(mapper, cx).map_err(|cause| {
                        cause.context(err!("embedding `{}`", field.qualified_name()))
                    })?;
                    let adapter = EmbeddedFieldAdapter::new(field, ops);
                    initializers.push(adapter.initializer());
                    fields.push(FieldAdapter::Embedded(adapter));
                }
                Mapping::Unmapped => {}
            }
        }

        let projection: Vec<String> = fields
            .iter()
            .flat_map(|field| field.column_names())
            .cloned()
            .collect();

        let writable_columns: Vec<String> = fields
            .iter()
            .flat_map(|field| field.writable_column_names())
            .cloned()
            .collect();

        let mut seen = HashSet::with_capacity(writable_columns.len());
        let writable_duplicates: IndexSet<String> = writable_columns
            .iter()
            .filter(|column| !seen.insert(column.as_str()))
            .cloned()
            .collect();

        debug!(
            model = schema.name,
            fields = fields.len(),
            projection = projection.len(),
            writable_duplicates = ?writable_duplicates,
            "built DAO adapter"
        );

        Ok(DaoAdapter {
            name: schema.name,
            constructor: schema.constructor,
            fields,
            initializers,
            projection,
            writable_columns,
            writable_duplicates,
        })
    }

    /// Name of the mapped type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldAdapter<M>] {
        &self.fields
    }

    /// Creates an empty instance with every embedded value present, at any
    /// depth.
    pub fn create_instance(&self) -> Result<M> {
        let Some(constructor) = self.constructor else {
            return Err(Error::uninstantiable_type(self.name));
        };

        let mut instance = constructor();
        self.initialize(&mut instance)?;
        Ok(instance)
    }

    /// Sets every mapped field of `target` from `row`.
    ///
    /// Fields are read in order; on failure the fields read so far keep
    /// their new values.
    pub fn read_row<'a>(&self, row: &dyn Row, target: &'a mut M) -> Result<&'a mut M> {
        for field in &self.fields {
            field.read_into(row, target)?;
        }
        Ok(target)
    }

    /// Creates an instance and reads `row` into it.
    pub fn from_row(&self, row: &dyn Row) -> Result<M> {
        let mut instance = self.create_instance()?;
        self.read_row(row, &mut instance)?;
        Ok(instance)
    }

    /// Writes every writable column of `source` into `sink`.
    ///
    /// Fails if two fields write the same column, whatever their values.
    pub fn write_row(&self, source: &M, sink: &mut dyn Sink) -> Result<()> {
        if !self.writable_duplicates.is_empty() {
            return Err(Error::duplicate_columns(
                self.writable_duplicates.iter().cloned().collect(),
            ));
        }

        self.write_fields(source, sink)
    }

    /// Every column the type reads, in field order.
    pub fn projection(&self) -> Vec<String> {
        self.projection.clone()
    }

    /// Every column the type writes, in field order.
    pub fn writable_columns(&self) -> Vec<String> {
        self.writable_columns.clone()
    }

    /// Columns written by more than one field.
    pub fn writable_duplicates(&self) -> Vec<String> {
        self.writable_duplicates.iter().cloned().collect()
    }

    pub(crate) fn write_fields(&self, source: &M, sink: &mut dyn Sink) -> Result<()> {
        for field in &self.fields {
            field.write_from(source, sink)?;
        }
        Ok(())
    }

    pub(crate) fn write_nulls(&self, sink: &mut dyn Sink) {
        for field in &self.fields {
            field.write_nulls(sink);
        }
    }

    pub(crate) fn initialize(&self, target: &mut M) -> Result<()> {
        for initializer in &self.initializers {
            initializer.initialize(target)?;
        }
        Ok(())
    }

    pub(crate) fn projection_slice(&self) -> &[String] {
        &self.projection
    }

    pub(crate) fn writable_columns_slice(&self) -> &[String] {
        &self.writable_columns
    }
}

impl<M> core::fmt::Debug for DaoAdapter<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("DaoAdapter")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("projection", &self.projection)
            .field("writable_duplicates", &self.writable_duplicates)
            .finish()
    }
}

impl BuildCx {
    pub(crate) fn enter<M: 'static>(&mut self, name: &'static str) -> Result<()> {
        if self.stack.iter().any(|(id, _)| *id == TypeId::of::<M>()) {
            let chain = self
                .stack
                .iter()
                .map(|(_, name)| *name)
                .chain(std::iter::once(name))
                .collect::<Vec<_>>()
                .join(" -> ");

            return Err(Error::invalid_mapping(format!(
                "`{name}` embeds itself ({chain})"
            )));
        }

        self.stack.push((TypeId::of::<M>(), name));
        Ok(())
    }

    pub(crate) fn exit(&mut self) {
        self.stack.pop();
    }
}
