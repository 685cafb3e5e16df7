use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::persist::PersistError;

/// Fatal spreadsheet failures: the session cannot start or cannot be saved.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("couldn't open spreadsheet {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },
    #[error("sheet {sheet:?} not found (available: {})", available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },
    #[error("couldn't read sheet {sheet:?}: {source}")]
    Read {
        sheet: String,
        #[source]
        source: calamine::XlsxError,
    },
    #[error("couldn't build workbook: {0}")]
    Encode(#[from] rust_xlsxwriter::XlsxError),
    #[error("couldn't save spreadsheet: {0}")]
    Persist(#[from] PersistError),
}

/// A sheet row that could not be turned into a record. The row is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row {row}: expected {expected} cells, found {found}")]
    Arity {
        /// 1-based row number as shown by spreadsheet programs.
        row: usize,
        found: usize,
        expected: usize,
    },
}

impl RowError {
    pub fn row(&self) -> usize {
        match self {
            RowError::Arity { row, .. } => *row,
        }
    }
}

/// Result of turning raw rows into records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedSheet {
    pub records: Vec<jobdesk_core::JobRecord>,
    pub rejected: Vec<RowError>,
}

impl fmt::Display for DecodedSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} rows rejected",
            self.records.len(),
            self.rejected.len()
        )
    }
}
