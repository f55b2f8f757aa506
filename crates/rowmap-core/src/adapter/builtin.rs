use super::TypeAdapter;
use crate::{Result, Row, Sink, Value};

macro_rules! scalar_adapter {
    ( $( $(#[$attr:meta])* $name:ident : $ty:ty => $read:ident ; )+ ) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Default, Clone, Copy)]
            pub struct $name;

            impl TypeAdapter<$ty> for $name {
                fn from_row(&self, row: &dyn Row, column: &str) -> Result<$ty> {
                    row.get(column)?.$read()
                }

                fn to_sink(&self, sink: &mut dyn Sink, column: &str, value: &$ty) -> Result<()> {
                    sink.put(column, Value::from(*value));
                    Ok(())
                }
            }
        )+
    };
}

scalar_adapter! {
    /// Adapter for `i16` columns.
    I16Adapter: i16 => to_i16;
    /// Adapter for `i32` columns.
    I32Adapter: i32 => to_i32;
    /// Adapter for `i64` columns.
    I64Adapter: i64 => to_i64;
    /// Adapter for `f32` columns.
    F32Adapter: f32 => to_f32;
    /// Adapter for `f64` columns.
    F64Adapter: f64 => to_f64;
    /// Adapter for `bool` columns. Integer cells read as `value == 1`.
    BoolAdapter: bool => to_bool;
}

/// Adapter for `String` columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringAdapter;

impl TypeAdapter<String> for StringAdapter {
    fn from_row(&self, row: &dyn Row, column: &str) -> Result<String> {
        row.get(column)?.to_string_value()
    }

    fn to_sink(&self, sink: &mut dyn Sink, column: &str, value: &String) -> Result<()> {
        sink.put(column, Value::String(value.clone()));
        Ok(())
    }
}
