//! Sheet listing with column headers

use crate::error::Result;
use crate::reader::{CalamineSource, Row, WorkbookSource};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Header row plus one data row is enough to tell whether a sheet has columns
const HEADER_SAMPLE_ROWS: usize = 2;

/// A sheet name with the labels of its header row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetColumns {
    pub name: String,
    pub columns: Vec<String>,
}

/// List every sheet of a workbook file with its columns
pub fn list_sheets_at<P: AsRef<Path>>(path: P) -> Result<Vec<SheetColumns>> {
    let mut source = CalamineSource::open(path)?;
    list_sheets(&mut source)
}

/// List every sheet with its columns, in the workbook's sheet order.
///
/// Only the leading rows of each sheet are decoded. A sheet without any row
/// below its header reports no columns. The first failing sheet aborts the
/// whole listing.
pub fn list_sheets<S: WorkbookSource + ?Sized>(source: &mut S) -> Result<Vec<SheetColumns>> {
    let mut sheets = Vec::new();

    for name in source.sheet_names() {
        let rows = source.read_rows(&name, HEADER_SAMPLE_ROWS)?;
        let columns = header_columns(&rows);
        debug!(sheet = %name, columns = columns.len(), "listed sheet");
        sheets.push(SheetColumns { name, columns });
    }

    Ok(sheets)
}

fn header_columns(rows: &[Row]) -> Vec<String> {
    match rows {
        [header, _, ..] => header
            .iter()
            .enumerate()
            .map(|(index, cell)| cell.header_label(index))
            .collect(),
        _ => Vec::new(),
    }
}
