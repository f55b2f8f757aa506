use super::Mapper;

use rowmap_core::{TypeAdapter, TypeAdapters};

/// Configures the type adapters of a [`Mapper`].
///
/// Starts from the built-in adapters. Registering an adapter for a type that
/// already has one replaces it.
#[derive(Debug, Default)]
pub struct Builder {
    adapters: TypeAdapters,
}

impl Builder {
    /// Converts fields of type `T` with `adapter`.
    pub fn register<T: 'static>(&mut self, adapter: impl TypeAdapter<T>) -> &mut Self {
        self.adapters = self.adapters.with::<T>(adapter);
        self
    }

    /// Converts fields of type `T` with `adapter`, and fields of type
    /// `Option<T>` with its nullable wrapper.
    pub fn register_nullable<T: 'static>(&mut self, adapter: impl TypeAdapter<T>) -> &mut Self {
        self.adapters = self.adapters.with_nullable::<T>(adapter);
        self
    }

    /// Creates a mapper with the adapters registered so far.
    ///
    /// The builder is left untouched and may be used to build more mappers.
    pub fn build(&self) -> Mapper {
        Mapper::from_type_adapters(self.adapters.clone())
    }
}
