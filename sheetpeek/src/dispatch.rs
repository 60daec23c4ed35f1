//! Invocation selection and dispatch

use sheetpeek_core::{Page, Report, list_sheets_at, read_page_at};
use std::path::PathBuf;
use tracing::{info, warn};

/// What a single run was asked to do, fixed once arguments are parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    List {
        path: PathBuf,
    },
    Read {
        path: PathBuf,
        sheet: String,
        page: i64,
        size: i64,
    },
    /// Required arguments were missing or unparsable
    Invalid,
}

impl Invocation {
    /// Select the operation from the supplied flags.
    ///
    /// Only presence is checked here; empty strings count as absent.
    /// `--list-sheets` wins when both mode flags are given.
    pub fn select(
        list_sheets: bool,
        read: bool,
        path: Option<PathBuf>,
        sheet: Option<String>,
        page: i64,
        size: i64,
    ) -> Self {
        let path = path.filter(|p| !p.as_os_str().is_empty());
        let sheet = sheet.filter(|s| !s.is_empty());

        match (path, sheet) {
            (Some(path), _) if list_sheets => Invocation::List { path },
            (Some(path), Some(sheet)) if read => Invocation::Read {
                path,
                sheet,
                page,
                size,
            },
            _ => Invocation::Invalid,
        }
    }
}

/// Run the selected operation and fold its outcome into a report
pub fn dispatch(invocation: &Invocation) -> Report {
    match invocation {
        Invocation::List { path } => {
            info!(path = %path.display(), "listing sheets");
            Report::from_listing(list_sheets_at(path))
        }
        Invocation::Read {
            path,
            sheet,
            page,
            size,
        } => {
            info!(path = %path.display(), sheet, page, size, "reading page");
            let rows = Page::new(*page, *size).and_then(|page| read_page_at(path, sheet, page));
            Report::from_page(rows)
        }
        Invocation::Invalid => {
            warn!("invalid arguments");
            Report::invalid_arguments()
        }
    }
}
