//! Excel/ODS file reader using calamine

use crate::error::{ReadError, Result};
use calamine::{Data, DataRef, Range, Reader, Sheets, Xlsx, open_workbook_auto};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(test)]
pub(crate) mod memory;
pub mod workbook;

pub use workbook::{CellValue, Row};

/// Access to the sheets of an opened workbook
pub trait WorkbookSource {
    /// Sheet names in the workbook's declared order
    fn sheet_names(&self) -> Vec<String>;

    /// Read at most `limit` leading rows of a sheet's used range.
    ///
    /// The first row of the used range is returned as ordinary data. Every
    /// row spans the used range's full width whatever the limit.
    fn read_rows(&mut self, sheet: &str, limit: usize) -> Result<Vec<Row>>;
}

/// Workbook decoded by calamine, format chosen from the file extension
pub struct CalamineSource {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl CalamineSource {
    /// Open a workbook from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        std::fs::metadata(path).map_err(|source| ReadError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let workbook = open_workbook_auto(path)?;
        debug!(path = %path.display(), "opened workbook");

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }
}

impl WorkbookSource for CalamineSource {
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn read_rows(&mut self, sheet: &str, limit: usize) -> Result<Vec<Row>> {
        if !self.workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(ReadError::SheetNotFound {
                sheet: sheet.to_string(),
            });
        }

        let range = match &mut self.workbook {
            // Only the xlsx decoder can stream cells
            Sheets::Xlsx(xlsx) => leading_rows_xlsx(xlsx, sheet, limit)?,
            workbook => workbook.worksheet_range(sheet)?,
        };

        debug!(
            path = %self.path.display(),
            sheet,
            limit,
            rows = range.height(),
            cols = range.width(),
            "decoded sheet range"
        );

        Ok(range_to_rows(&range, limit))
    }
}

/// Stream cells, keeping values for the first `limit` non-empty rows.
///
/// The rest of the sheet is still scanned for its column span, so rows come
/// back exactly as wide as a full `worksheet_range` decode would make them.
fn leading_rows_xlsx<RS: Read + Seek>(
    xlsx: &mut Xlsx<RS>,
    sheet: &str,
    limit: usize,
) -> Result<Range<Data>> {
    let mut reader = xlsx
        .worksheet_cells_reader(sheet)
        .map_err(calamine::Error::from)?;

    let mut kept: Vec<((u32, u32), Data)> = Vec::new();
    let mut columns: Option<(u32, u32)> = None;
    let mut rows_seen = 0usize;
    let mut current_row = None;

    while let Some(cell) = reader.next_cell().map_err(calamine::Error::from)? {
        if matches!(cell.get_value(), DataRef::Empty) {
            continue;
        }

        let (row, col) = cell.get_position();
        columns = Some(match columns {
            Some((first, last)) => (first.min(col), last.max(col)),
            None => (col, col),
        });

        if current_row != Some(row) {
            current_row = Some(row);
            rows_seen += 1;
        }
        if rows_seen <= limit {
            kept.push(((row, col), Data::from(cell.get_value().clone())));
        }
    }

    let (Some((first_col, last_col)), Some(first), Some(last)) =
        (columns, kept.first(), kept.last())
    else {
        return Ok(Range::empty());
    };

    let mut range = Range::new((first.0.0, first_col), (last.0.0, last_col));
    for (position, value) in kept {
        range.set_value(position, value);
    }
    Ok(range)
}

fn range_to_rows(range: &Range<Data>, limit: usize) -> Vec<Row> {
    range
        .rows()
        .take(limit)
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect()
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::Empty => CellValue::Empty,
            Data::DateTime(dt) if dt.is_duration() => CellValue::Number(dt.as_f64()),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(datetime) => CellValue::DateTime(datetime.to_string()),
                None => CellValue::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}
