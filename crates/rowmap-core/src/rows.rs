use crate::{bail, Cursor, Error, Result, Row, Value};

use indexmap::IndexMap;

/// An in-memory cursor over a fixed set of records.
///
/// A freshly built `Rows` is positioned on its first record.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows {
    /// Column name to cell index
    columns: IndexMap<String, usize>,

    records: Vec<Vec<Value>>,

    position: usize,
}

impl Rows {
    pub fn new<I, S>(columns: I) -> Rows
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns
            .into_iter()
            .enumerate()
            .map(|(index, name)| (name.into(), index))
            .collect();

        Rows {
            columns,
            records: vec![],
            position: 0,
        }
    }

    /// Appends a record. Cells are matched to columns by position; missing
    /// trailing cells are null.
    ///
    /// Fails if the record has more cells than there are columns.
    pub fn record<I, V>(mut self, cells: I) -> Result<Rows>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut record: Vec<Value> = cells.into_iter().map(Into::into).collect();

        if record.len() > self.columns.len() {
            bail!(
                "record {} has {} cells but only {} columns",
                self.records.len(),
                record.len(),
                self.columns.len()
            );
        }

        record.resize(self.columns.len(), Value::Null);
        self.records.push(record);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }
}

impl Row for Rows {
    fn get(&self, column: &str) -> Result<&Value> {
        let Some(&index) = self.columns.get(column) else {
            return Err(Error::missing_column(column));
        };

        let record = self
            .records
            .get(self.position)
            .ok_or_else(|| Error::cursor_out_of_bounds(self.position, self.records.len()))?;

        Ok(&record[index])
    }
}

impl Cursor for Rows {
    fn move_to_first(&mut self) -> bool {
        self.position = 0;
        !self.records.is_empty()
    }

    fn advance(&mut self) -> bool {
        if self.position < self.records.len() {
            self.position += 1;
        }
        self.position < self.records.len()
    }
}
