use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use jobdesk_core::{Column, JobRecord, SalaryType};
use jobdesk_logging::{jobdesk_debug, jobdesk_info, jobdesk_warn};

use crate::types::{DecodedSheet, RowError, SheetError};

/// Reads every row of `sheet` as text cells, header included, in file order.
///
/// Rows start at the first used row of the sheet. When the used range does
/// not begin in column A the rows are left-padded with empty cells so that
/// cell positions always match sheet columns.
pub fn read_sheet_rows(path: &Path, sheet: &str) -> Result<Vec<Vec<String>>, SheetError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| SheetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(SheetError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| SheetError::Read {
            sheet: sheet.to_string(),
            source,
        })?;
    let pad = range.start().map_or(0, |(_, col)| col as usize);

    let rows = range
        .rows()
        .map(|cells| {
            let mut row = vec![String::new(); pad];
            row.extend(cells.iter().map(cell_text));
            row
        })
        .collect::<Vec<_>>();
    jobdesk_debug!("Read {} rows from sheet {:?} in {:?}", rows.len(), sheet, path);
    Ok(rows)
}

/// Maps rows to records by the fixed column order. The first row is the
/// header and is always skipped; blank rows are skipped; rows with fewer
/// than ten cells are rejected.
pub fn decode_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> DecodedSheet {
    let mut decoded = DecodedSheet::default();
    for (position, row) in rows.iter().enumerate().skip(1) {
        let row_number = position + 1;
        if row.iter().all(|cell| cell.as_ref().trim().is_empty()) {
            jobdesk_debug!("Skipping blank row {}", row_number);
            continue;
        }
        match JobRecord::from_cells(row.as_slice()) {
            Some(record) => {
                if SalaryType::parse(&record.salary_type).is_none() {
                    jobdesk_warn!(
                        "Row {}: unknown salary type {:?} kept as-is",
                        row_number,
                        record.salary_type
                    );
                }
                decoded.records.push(record);
            }
            None => {
                let err = RowError::Arity {
                    row: row_number,
                    found: row.len(),
                    expected: Column::COUNT,
                };
                jobdesk_warn!("Rejected {}", err);
                decoded.rejected.push(err);
            }
        }
    }
    decoded
}

/// Loads the records stored in `sheet` of the workbook at `path`.
pub fn import_records(path: &Path, sheet: &str) -> Result<DecodedSheet, SheetError> {
    let rows = read_sheet_rows(path, sheet)?;
    let decoded = decode_rows(&rows);
    jobdesk_info!(
        "Imported {:?} sheet {:?}: {} rows read, {}",
        path,
        sheet,
        rows.len(),
        decoded
    );
    Ok(decoded)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => unescape_ooxml(text),
        // Whole numbers (ids, epoch seconds, salaries) read back without ".0".
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", *value as i64)
        }
        other => other.to_string(),
    }
}

/// Reverses the `_xHHHH_` escape writers use for characters XML cannot hold
/// (`\r`, control characters) and for literal `_xHHHH_` text (`_x005F_` is `_`).
fn unescape_ooxml(text: &str) -> String {
    if !text.contains("_x") {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("_x") {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match decode_escape(candidate) {
            Some(ch) => {
                out.push(ch);
                rest = &candidate[7..];
            }
            None => {
                out.push('_');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes `_xHHHH_` at the start of `text`.
fn decode_escape(text: &str) -> Option<char> {
    let bytes = text.as_bytes();
    if bytes.len() < 7 || bytes[6] != b'_' {
        return None;
    }
    let hex = text.get(2..6)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
