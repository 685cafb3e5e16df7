//! Jobdesk sheet: spreadsheet import and export for the record store.
mod export;
mod import;
mod persist;
mod types;

pub use export::{encode_workbook, export_records};
pub use import::{decode_rows, import_records, read_sheet_rows};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{DecodedSheet, RowError, SheetError};
