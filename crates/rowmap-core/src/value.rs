use crate::{Error, Result, Type};

/// A scalar cell of a row or sink.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit floating point number
    F32(f32),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Null => Type::Null,
        }
    }

    /// Reads the value as a boolean.
    ///
    /// Integer cells are accepted too: `1` is `true`, anything else is `false`.
    pub fn to_bool(&self) -> Result<bool> {
        match *self {
            Self::Bool(v) => Ok(v),
            Self::I16(v) => Ok(v == 1),
            Self::I32(v) => Ok(v == 1),
            Self::I64(v) => Ok(v == 1),
            _ => Err(Error::type_conversion(self.clone(), "bool")),
        }
    }

    pub fn to_i16(&self) -> Result<i16> {
        self.to_integer("i16")
    }

    pub fn to_i32(&self) -> Result<i32> {
        self.to_integer("i32")
    }

    pub fn to_i64(&self) -> Result<i64> {
        self.to_integer("i64")
    }

    fn to_integer<T>(&self, to_type: &'static str) -> Result<T>
    where
        T: TryFrom<i64>,
    {
        let wide = match *self {
            Self::I16(v) => i64::from(v),
            Self::I32(v) => i64::from(v),
            Self::I64(v) => v,
            _ => return Err(Error::type_conversion(self.clone(), to_type)),
        };
        T::try_from(wide).map_err(|_| Error::type_conversion(self.clone(), to_type))
    }

    pub fn to_f32(&self) -> Result<f32> {
        match *self {
            Self::F32(v) => Ok(v),
            Self::F64(v) => Ok(v as f32),
            Self::I16(v) => Ok(f32::from(v)),
            Self::I32(v) => Ok(v as f32),
            Self::I64(v) => Ok(v as f32),
            _ => Err(Error::type_conversion(self.clone(), "f32")),
        }
    }

    pub fn to_f64(&self) -> Result<f64> {
        match *self {
            Self::F32(v) => Ok(f64::from(v)),
            Self::F64(v) => Ok(v),
            Self::I16(v) => Ok(f64::from(v)),
            Self::I32(v) => Ok(f64::from(v)),
            Self::I64(v) => Ok(v as f64),
            _ => Err(Error::type_conversion(self.clone(), "f64")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_string_value(&self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v.clone()),
            _ => Err(Error::type_conversion(self.clone(), "String")),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i16> for Value {
    fn from(src: i16) -> Self {
        Self::I16(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F32(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
