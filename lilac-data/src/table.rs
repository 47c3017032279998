//! Column-oriented in-memory tables parsed from embedded CSV.

use crate::DataError;

/// A single table cell. Cells parse as numbers where possible and fall
/// back to text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// The numeric value, if this cell is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

/// A small immutable table of named columns.
///
/// Rows are stored row-major; every row has one cell per column. Tables are
/// built once from embedded CSV (or constructed programmatically by a
/// loader) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from pre-shaped columns and rows.
    ///
    /// Callers must pass one cell per column in every row; loaders in this
    /// crate construct rows positionally so the shapes always line up.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    /// Parse a headered CSV string into a table.
    ///
    /// Each cell is parsed as `f64` where possible, otherwise kept as text.
    pub fn from_csv(data: &str) -> Result<Self, DataError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let row: Vec<Value> = record
                .iter()
                .map(|cell| match cell.parse::<f64>() {
                    Ok(n) => Value::Number(n),
                    Err(_) => Value::Text(cell.to_string()),
                })
                .collect();
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Column names, in declaration order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Result<usize, DataError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// All values of a numeric column, top to bottom.
    pub fn numbers(&self, name: &str) -> Result<Vec<f64>, DataError> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .map(|row| {
                row[idx]
                    .as_number()
                    .ok_or_else(|| DataError::NotNumeric(name.to_string()))
            })
            .collect()
    }

    /// All values of a column rendered as labels, top to bottom.
    ///
    /// Numbers are rendered without a trailing `.0` so integer-valued cells
    /// read naturally as category labels.
    pub fn labels(&self, name: &str) -> Result<Vec<String>, DataError> {
        let idx = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| match &row[idx] {
                Value::Text(s) => s.clone(),
                Value::Number(n) => format_number(*n),
            })
            .collect())
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
