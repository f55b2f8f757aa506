use crate::Value;

/// A write-only destination for named scalar values.
pub trait Sink {
    /// Stores `value` under `column`, replacing any previous entry.
    fn put(&mut self, column: &str, value: Value);

    /// Stores an explicit null under `column`.
    fn put_null(&mut self, column: &str) {
        self.put(column, Value::Null);
    }

    fn contains_key(&self, column: &str) -> bool;

    /// Returns the entry stored under `column`, if any.
    fn get(&self, column: &str) -> Option<&Value>;
}
