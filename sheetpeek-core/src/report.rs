//! JSON reports written once per invocation

use crate::error::ReadError;
use crate::lister::SheetColumns;
use crate::reader::Row;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use std::io::{self, Write};
use tracing::warn;

/// Marker placed before the message in row-shaped errors
pub const ERROR_MARKER: &str = "Error";

/// Message reported when required arguments are missing
pub const INVALID_ARGUMENTS: &str = "Invalid arguments";

/// Outcome of one invocation, in exactly one output shape
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// `[{"name": ..., "columns": [...]}, ...]`
    Sheets(Vec<SheetColumns>),
    /// `[[cell, ...], ...]`
    Rows(Vec<Row>),
    /// `[{"error": message}]`
    ListFailed(String),
    /// `[["Error", message]]`
    ReadFailed(String),
}

impl Report {
    pub fn invalid_arguments() -> Self {
        Report::ReadFailed(INVALID_ARGUMENTS.to_string())
    }

    /// Convert a sheet listing outcome
    pub fn from_listing(result: Result<Vec<SheetColumns>, ReadError>) -> Self {
        match result {
            Ok(sheets) => Report::Sheets(sheets),
            Err(e) => {
                warn!(error = %e, "sheet listing failed");
                Report::ListFailed(e.to_string())
            }
        }
    }

    /// Convert a page read outcome
    pub fn from_page(result: Result<Vec<Row>, ReadError>) -> Self {
        match result {
            Ok(rows) => Report::Rows(rows),
            Err(e) => {
                warn!(error = %e, "page read failed");
                Report::ReadFailed(e.to_string())
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Report::Sheets(_) | Report::Rows(_))
    }

    /// Process exit code: 0 on success, 1 on any failure
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Write the report as one line of compact JSON and return the exit code
    pub fn emit<W: Write>(&self, writer: &mut W) -> io::Result<i32> {
        serde_json::to_writer(&mut *writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(self.exit_code())
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Report::Sheets(sheets) => sheets.serialize(serializer),
            Report::Rows(rows) => rows.serialize(serializer),
            Report::ListFailed(message) => json!([{ "error": message }]).serialize(serializer),
            Report::ReadFailed(message) => {
                [[ERROR_MARKER, message.as_str()]].serialize(serializer)
            }
        }
    }
}
