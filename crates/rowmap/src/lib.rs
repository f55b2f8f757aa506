pub mod adapter;
pub use adapter::DaoAdapter;

mod column_reader;
pub use column_reader::{ColumnReader, ColumnReaderBuilder};

pub mod mapper;
pub use mapper::Mapper;

mod model;
pub use model::Model;

pub mod schema;

pub use rowmap_core::{
    adapter::{Nullable, TypeAdapter, TypeAdapters},
    bail, err, Cursor, Error, Result, Row, Rows, Sink, Type, Value, Values,
};

pub use rowmap_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        schema::{ColumnAttr, Field, Model as ModelSchema},
        Model,
    };
    pub use std::default::Default;
}
