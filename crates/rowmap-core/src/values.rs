use crate::{Error, Result, Row, Sink, Value};

use indexmap::IndexMap;

/// An insertion-ordered map of column values.
///
/// `Values` is the sink produced when writing an object, and it is also a
/// [`Row`], so a written object can be read straight back.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Values {
    entries: IndexMap<String, Value>,
}

impl Values {
    pub fn new() -> Values {
        Values::default()
    }

    pub fn with_capacity(capacity: usize) -> Values {
        Values {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builder-style insert, handy for assembling rows by hand.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Values {
        self.entries.insert(column.into(), value.into());
        self
    }
}

impl Sink for Values {
    fn put(&mut self, column: &str, value: Value) {
        if let Some(entry) = self.entries.get_mut(column) {
            *entry = value;
        } else {
            self.entries.insert(column.to_string(), value);
        }
    }

    fn contains_key(&self, column: &str) -> bool {
        self.entries.contains_key(column)
    }

    fn get(&self, column: &str) -> Option<&Value> {
        self.entries.get(column)
    }
}

impl Row for Values {
    fn get(&self, column: &str) -> Result<&Value> {
        self.entries
            .get(column)
            .ok_or_else(|| Error::missing_column(column))
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Values {
        Values {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
