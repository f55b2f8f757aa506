use crate::schema;

/// A struct whose fields map to row columns.
///
/// Usually implemented with `#[derive(Model)]`. A hand-written implementation
/// returns a descriptor assembled with [`schema::Model::builder`].
pub trait Model: Sized + 'static {
    /// Describes every field of the type, including the fields of its base.
    fn schema() -> schema::Model<Self>;
}
