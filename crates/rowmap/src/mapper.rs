mod builder;
pub use builder::Builder;

use crate::adapter::{BuildCx, DaoAdapter};
use crate::{ColumnReaderBuilder, Model};

use rowmap_core::{err, Cursor, Error, Result, Row, Sink, TypeAdapters, Values};
use tracing::trace;

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Converts mapped types to and from rows.
///
/// A `Mapper` owns the type adapters it was built with and a cache of the
/// [`DaoAdapter`] of every type it has converted. It is `Send + Sync`; share
/// one instance rather than building a new one per conversion.
pub struct Mapper {
    adapters: TypeAdapters,

    /// `TypeId` of `M` to `Arc<DaoAdapter<M>>`
    cache: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Mapper {
    /// A mapper supporting the built-in value types only.
    pub fn new() -> Mapper {
        Mapper::from_type_adapters(TypeAdapters::default())
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn from_type_adapters(adapters: TypeAdapters) -> Mapper {
        Mapper {
            adapters,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn type_adapters(&self) -> &TypeAdapters {
        &self.adapters
    }

    /// Returns the conversion plan of `M`, building it on first use.
    pub fn adapter<M: Model>(&self) -> Result<Arc<DaoAdapter<M>>> {
        self.adapter_in::<M>(&mut BuildCx::default())
    }

    pub(crate) fn adapter_in<M: Model>(&self, cx: &mut BuildCx) -> Result<Arc<DaoAdapter<M>>> {
        if let Some(adapter) = self.cached::<M>() {
            trace!(model = adapter.name(), "DAO adapter cache hit");
            return Ok(adapter);
        }

        // The cache lock is not held while building: embedded types are
        // fetched through this same method.
        let schema = M::schema();
        cx.enter::<M>(schema.name)?;
        let built = DaoAdapter::build(self, cx, schema);
        cx.exit();

        Ok(self.insert(Arc::new(built?)))
    }

    fn cached<M: Model>(&self) -> Option<Arc<DaoAdapter<M>>> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(&TypeId::of::<M>())
            .cloned()
            .and_then(|adapter| adapter.downcast::<DaoAdapter<M>>().ok())
    }

    /// Caches `adapter` unless another thread got there first, returning the
    /// cached one either way.
    fn insert<M: Model>(&self, adapter: Arc<DaoAdapter<M>>) -> Arc<DaoAdapter<M>> {
        let cached = {
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            cache
                .entry(TypeId::of::<M>())
                .or_insert_with(|| adapter.clone() as Arc<dyn Any + Send + Sync>)
                .clone()
        };

        match cached.downcast::<DaoAdapter<M>>() {
            Ok(cached) => {
                if !Arc::ptr_eq(&cached, &adapter) {
                    trace!(model = adapter.name(), "discarding DAO adapter built concurrently");
                }
                cached
            }
            Err(_) => adapter,
        }
    }

    /// Creates an `M` from the current record of `row`.
    pub fn from_row<M: Model>(&self, row: &dyn Row) -> Result<M> {
        self.adapter::<M>()?.from_row(row)
    }

    /// Reads the current record of `row` into an existing instance.
    pub fn fill<'a, M: Model>(&self, row: &dyn Row, target: &'a mut M) -> Result<&'a mut M> {
        self.adapter::<M>()?.read_row(row, target)
    }

    /// Writes the writable columns of `source` into a new [`Values`].
    pub fn to_values<M: Model>(&self, source: &M) -> Result<Values> {
        let adapter = self.adapter::<M>()?;
        let mut values = Values::with_capacity(adapter.writable_columns_slice().len());
        adapter.write_row(source, &mut values)?;
        Ok(values)
    }

    /// Writes the writable columns of `source` into `sink`.
    pub fn write_into<M: Model>(&self, source: &M, sink: &mut dyn Sink) -> Result<()> {
        self.adapter::<M>()?.write_row(source, sink)
    }

    /// Converts every record of `cursor`, starting from the first one.
    ///
    /// The cursor is left positioned past its last record.
    pub fn list_from_rows<M, C>(&self, cursor: &mut C) -> Result<Vec<M>>
    where
        M: Model,
        C: Cursor + ?Sized,
    {
        let mut list = vec![];

        if !cursor.move_to_first() {
            return Ok(list);
        }

        let adapter = self.adapter::<M>()?;
        loop {
            let record = &*cursor;
            let instance = adapter.from_row(&record).map_err(|cause| {
                cause.context(err!("reading `{}` from record {}", adapter.name(), list.len()))
            })?;
            list.push(instance);

            if !cursor.advance() {
                break;
            }
        }

        Ok(list)
    }

    /// Returns a reusable conversion from a row to an `M`.
    pub fn function_for<M: Model>(
        &self,
    ) -> Result<impl Fn(&dyn Row) -> Result<M> + Send + Sync + 'static> {
        let adapter = self.adapter::<M>()?;
        Ok(move |row: &dyn Row| adapter.from_row(row))
    }

    /// Starts building a reader for the single column `name`.
    pub fn column(&self, name: impl Into<String>) -> Result<ColumnReaderBuilder<'_>> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::null_argument("column name"));
        }
        Ok(ColumnReaderBuilder::new(self, name))
    }

    /// Every column read when converting a row to an `M`.
    pub fn projection<M: Model>(&self) -> Result<Vec<String>> {
        Ok(self.adapter::<M>()?.projection())
    }

    /// Every column written when converting an `M` to a row.
    pub fn writable_columns<M: Model>(&self) -> Result<Vec<String>> {
        Ok(self.adapter::<M>()?.writable_columns())
    }
}

impl Default for Mapper {
    fn default() -> Mapper {
        Mapper::new()
    }
}

impl core::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let cached = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();

        f.debug_struct("Mapper")
            .field("adapters", &self.adapters)
            .field("cached", &cached)
            .finish()
    }
}
