use super::{
    BoolAdapter, F32Adapter, F64Adapter, I16Adapter, I32Adapter, I64Adapter, Nullable,
    StringAdapter, TypeAdapter,
};

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// An immutable map from value types to their [`TypeAdapter`].
///
/// Registering an adapter returns a new registry and leaves the original
/// untouched, so a base configuration can be shared freely between builders.
#[derive(Clone)]
pub struct TypeAdapters {
    adapters: Arc<HashMap<TypeId, Registered>>,
}

#[derive(Clone)]
struct Registered {
    type_name: &'static str,

    /// Always an `Arc<dyn TypeAdapter<T>>` for the keyed `T`
    adapter: Arc<dyn Any + Send + Sync>,
}

impl TypeAdapters {
    /// A registry with no adapters at all.
    pub fn empty() -> TypeAdapters {
        TypeAdapters {
            adapters: Arc::new(HashMap::new()),
        }
    }

    /// Returns a registry that also maps `T` to `adapter`, overriding any
    /// adapter previously registered for `T`.
    pub fn with<T: 'static>(&self, adapter: impl TypeAdapter<T>) -> TypeAdapters {
        let mut adapters = (*self.adapters).clone();
        insert::<T>(&mut adapters, Arc::new(adapter));
        TypeAdapters {
            adapters: Arc::new(adapters),
        }
    }

    /// Returns a registry that maps `T` to `adapter` and `Option<T>` to the
    /// nullable wrapper around it.
    pub fn with_nullable<T: 'static>(&self, adapter: impl TypeAdapter<T>) -> TypeAdapters {
        let adapter: Arc<dyn TypeAdapter<T>> = Arc::new(adapter);
        let mut adapters = (*self.adapters).clone();
        insert::<Option<T>>(&mut adapters, Arc::new(Nullable(adapter.clone())));
        insert::<T>(&mut adapters, adapter);
        TypeAdapters {
            adapters: Arc::new(adapters),
        }
    }

    /// Returns the adapter registered for `T`.
    pub fn get<T: 'static>(&self) -> Option<Arc<dyn TypeAdapter<T>>> {
        self.adapters
            .get(&TypeId::of::<T>())
            .and_then(|registered| registered.adapter.downcast_ref::<Arc<dyn TypeAdapter<T>>>())
            .cloned()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.adapters.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Names of every registered type, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.adapters.values().map(|r| r.type_name).collect();
        names.sort_unstable();
        names
    }
}

fn insert<T: 'static>(adapters: &mut HashMap<TypeId, Registered>, adapter: Arc<dyn TypeAdapter<T>>) {
    adapters.insert(
        TypeId::of::<T>(),
        Registered {
            type_name: std::any::type_name::<T>(),
            adapter: Arc::new(adapter),
        },
    );
}

impl Default for TypeAdapters {
    /// The built-in adapters: `i16`, `i32`, `i64`, `f32`, `f64`, `bool`,
    /// `String` and the `Option` of each.
    fn default() -> TypeAdapters {
        static DEFAULTS: OnceLock<TypeAdapters> = OnceLock::new();

        DEFAULTS
            .get_or_init(|| {
                TypeAdapters::empty()
                    .with_nullable::<i16>(I16Adapter)
                    .with_nullable::<i32>(I32Adapter)
                    .with_nullable::<i64>(I64Adapter)
                    .with_nullable::<f32>(F32Adapter)
                    .with_nullable::<f64>(F64Adapter)
                    .with_nullable::<bool>(BoolAdapter)
                    .with_nullable::<String>(StringAdapter)
            })
            .clone()
    }
}

impl core::fmt::Debug for TypeAdapters {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_set().entries(self.type_names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Result, Row, Sink, Value, Values};

    struct Cents;

    impl TypeAdapter<u32> for Cents {
        fn from_row(&self, row: &dyn Row, column: &str) -> Result<u32> {
            Ok(u32::try_from(row.get(column)?.to_i64()?)?)
        }

        fn to_sink(&self, sink: &mut dyn Sink, column: &str, value: &u32) -> Result<()> {
            sink.put(column, Value::I64(i64::from(*value)));
            Ok(())
        }
    }

    #[test]
    fn defaults_cover_scalars_and_options() {
        let adapters = TypeAdapters::default();

        assert!(adapters.contains::<i16>());
        assert!(adapters.contains::<Option<i16>>());
        assert!(adapters.contains::<bool>());
        assert!(adapters.contains::<Option<String>>());
        assert!(!adapters.contains::<u32>());
        assert_eq!(adapters.len(), 14);
    }

    #[test]
    fn with_does_not_mutate_the_original() {
        let base = TypeAdapters::default();
        let extended = base.with::<u32>(Cents);

        assert!(!base.contains::<u32>());
        assert!(extended.contains::<u32>());
        assert!(!extended.contains::<Option<u32>>());
    }

    #[test]
    fn with_nullable_registers_the_option() {
        let adapters = TypeAdapters::empty().with_nullable::<u32>(Cents);
        let adapter = adapters.get::<Option<u32>>().unwrap();

        assert!(adapter.nullable());
        assert!(!adapters.get::<u32>().unwrap().nullable());

        let row = Values::new().with("price", Value::Null);
        assert_eq!(adapter.from_row(&row, "price").unwrap(), None);
    }

    #[test]
    fn custom_adapter_overrides_default() {
        struct Negated;

        impl TypeAdapter<i32> for Negated {
            fn from_row(&self, row: &dyn Row, column: &str) -> Result<i32> {
                Ok(-row.get(column)?.to_i32()?)
            }

            fn to_sink(&self, sink: &mut dyn Sink, column: &str, value: &i32) -> Result<()> {
                sink.put(column, Value::I32(-*value));
                Ok(())
            }
        }

        let adapters = TypeAdapters::default().with::<i32>(Negated);
        let row = Values::new().with("n", 5_i32);

        assert_eq!(adapters.get::<i32>().unwrap().from_row(&row, "n").unwrap(), -5);
        assert_eq!(
            TypeAdapters::default()
                .get::<i32>()
                .unwrap()
                .from_row(&row, "n")
                .unwrap(),
            5
        );
    }
}
