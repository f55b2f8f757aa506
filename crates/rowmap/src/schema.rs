//! Type descriptors.
//!
//! A descriptor lists every field of a mapped type in discovery order: the
//! type's own fields in declaration order, followed by the fields of its base
//! (recursively). Each field carries accessors that reach it from the root
//! value, so the adapters never need to know how the type is laid out.

mod access;
pub(crate) use access::Access;

mod field;
pub use field::{Column, ColumnAttr, Embedded, Field, Mapping};

mod model;
pub use model::{Model, ModelBuilder};
