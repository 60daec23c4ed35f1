//! Paged row reads

use crate::error::{ReadError, Result};
use crate::reader::{CalamineSource, Row, WorkbookSource};
use std::path::Path;
use tracing::debug;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// A window of rows addressed by 1-based page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: usize,
    size: usize,
}

impl Page {
    /// Validate a page request; both values must be at least 1
    pub fn new(number: i64, size: i64) -> Result<Self> {
        match (usize::try_from(number), usize::try_from(size)) {
            (Ok(n), Ok(s)) if n >= 1 && s >= 1 => Ok(Self { number: n, size: s }),
            _ => Err(ReadError::InvalidPage { number, size }),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Zero-based index of the first row in the window
    pub fn offset(&self) -> usize {
        (self.number - 1).saturating_mul(self.size)
    }

    /// Exclusive end of the window
    pub fn end(&self) -> usize {
        self.offset().saturating_add(self.size)
    }
}

/// Read one page of a sheet in a workbook file
pub fn read_page_at<P: AsRef<Path>>(path: P, sheet: &str, page: Page) -> Result<Vec<Row>> {
    let mut source = CalamineSource::open(path)?;
    read_page(&mut source, sheet, page)
}

/// Read rows `[offset, offset + size)` of a sheet.
///
/// The header row counts as row 0. Windows running past the last row are
/// truncated, and a window starting past it yields no rows.
pub fn read_page<S: WorkbookSource + ?Sized>(
    source: &mut S,
    sheet: &str,
    page: Page,
) -> Result<Vec<Row>> {
    let rows = source.read_rows(sheet, page.end())?;
    let total = rows.len();

    let window: Vec<Row> = rows.into_iter().skip(page.offset()).take(page.size()).collect();
    debug!(
        sheet,
        page = page.number(),
        size = page.size(),
        decoded = total,
        returned = window.len(),
        "read page"
    );

    Ok(window)
}
