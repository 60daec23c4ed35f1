//! Workbook data structures

use serde::{Serialize, Serializer};

/// Largest magnitude at which an f64 still holds every integer exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A row of cells in sheet column order
pub type Row = Vec<CellValue>;

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Already rendered as `YYYY-MM-DD HH:MM:SS`
    DateTime(String),
    /// Spreadsheet error code such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Render the cell as a column label.
    ///
    /// Blank header cells are labelled `Unnamed: <index>` after their
    /// zero-based position in the row.
    pub fn header_label(&self, index: usize) -> String {
        match self {
            CellValue::Empty => format!("Unnamed: {}", index),
            CellValue::Number(n) => match as_exact_integer(*n) {
                Some(i) => i.to_string(),
                None => n.to_string(),
            },
            CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Error(s) => s.clone(),
            CellValue::Boolean(true) => "True".to_string(),
            CellValue::Boolean(false) => "False".to_string(),
        }
    }
}

/// Integral numbers are written without a fractional part
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Number(n) => match as_exact_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None if n.is_finite() => serializer.serialize_f64(*n),
                None => serializer.serialize_none(),
            },
            CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Error(s) => {
                serializer.serialize_str(s)
            }
            CellValue::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

fn as_exact_integer(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        Some(n as i64)
    } else {
        None
    }
}
