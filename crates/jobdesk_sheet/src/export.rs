use std::path::{Path, PathBuf};

use jobdesk_core::{Column, JobRecord};
use jobdesk_logging::jobdesk_info;
use rust_xlsxwriter::{ColNum, RowNum, Workbook};

use crate::persist::AtomicFileWriter;
use crate::types::SheetError;

/// Builds a single-sheet workbook: the header row, then one row per record in
/// store order, each cell placed by its `Column`.
pub fn encode_workbook(records: &[JobRecord], sheet: &str) -> Result<Vec<u8>, SheetError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet)?;

    for column in Column::ALL {
        worksheet.write_string(0, col_num(column), column.header())?;
    }
    for (position, record) in records.iter().enumerate() {
        // Out-of-range rows saturate and are refused by the writer.
        let row = RowNum::try_from(position + 1).unwrap_or(RowNum::MAX);
        for column in Column::ALL {
            worksheet.write_string(row, col_num(column), record.field(column))?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Rewrites the workbook at `path` with `records`, replacing whatever was there.
pub fn export_records(
    path: &Path,
    sheet: &str,
    records: &[JobRecord],
) -> Result<PathBuf, SheetError> {
    let content = encode_workbook(records, sheet)?;
    let (writer, filename) = AtomicFileWriter::for_path(path)?;
    let written = writer.write(&filename, &content)?;
    jobdesk_info!(
        "Exported {} records to sheet {:?} in {:?} ({} bytes)",
        records.len(),
        sheet,
        written,
        content.len()
    );
    Ok(written)
}

fn col_num(column: Column) -> ColNum {
    column.index() as ColNum
}
