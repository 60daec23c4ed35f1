//! In-memory workbook used by unit tests

use super::{Row, WorkbookSource};
use crate::error::{ReadError, Result};

#[derive(Debug, Default)]
pub(crate) struct MemorySource {
    sheets: Vec<(String, Vec<Row>)>,
    /// Sheet that fails to decode, to exercise error paths
    broken: Option<String>,
    /// Every `(sheet, limit)` requested so far
    pub(crate) requests: Vec<(String, usize)>,
}

impl MemorySource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_sheet(mut self, name: &str, rows: Vec<Row>) -> Self {
        self.sheets.push((name.to_string(), rows));
        self
    }

    pub(crate) fn with_broken_sheet(mut self, name: &str) -> Self {
        self.sheets.push((name.to_string(), Vec::new()));
        self.broken = Some(name.to_string());
        self
    }
}

impl WorkbookSource for MemorySource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn read_rows(&mut self, sheet: &str, limit: usize) -> Result<Vec<Row>> {
        self.requests.push((sheet.to_string(), limit));

        if self.broken.as_deref() == Some(sheet) {
            return Err(ReadError::Format(calamine::Error::Msg("corrupt sheet data")));
        }

        let (_, rows) = self
            .sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .ok_or_else(|| ReadError::SheetNotFound {
                sheet: sheet.to_string(),
            })?;

        Ok(rows.iter().take(limit).cloned().collect())
    }
}
