pub mod adapter;
pub use adapter::{TypeAdapter, TypeAdapters};

mod error;
pub use error::{Error, IntoError};

mod row;
pub use row::{Cursor, Row};

mod rows;
pub use rows::Rows;

mod sink;
pub use sink::Sink;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod values;
pub use values::Values;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
