//! sheetpeek-core: sheet listing and paged reads for Excel/ODS workbooks
//!
//! Each operation opens the workbook, reads what it needs and drops the
//! file handle before returning. Results are turned into a single JSON
//! [`Report`] at the outermost boundary.

pub mod error;
pub mod lister;
pub mod pager;
pub mod reader;
pub mod report;

pub use error::ReadError;
pub use lister::{SheetColumns, list_sheets, list_sheets_at};
pub use pager::{DEFAULT_PAGE_SIZE, Page, read_page, read_page_at};
pub use reader::{CalamineSource, CellValue, Row, WorkbookSource};
pub use report::Report;
