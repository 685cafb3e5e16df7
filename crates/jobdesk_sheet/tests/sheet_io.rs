use std::fs;
use std::path::Path;

use jobdesk_core::{Column, JobRecord};
use jobdesk_sheet::{
    decode_rows, encode_workbook, export_records, import_records, read_sheet_rows, RowError,
    SheetError,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::TempDir;

const SHEET: &str = "Comp490 Jobs";

fn init_logging() {
    jobdesk_logging::initialize_for_tests();
}

fn record(company: &str, job_id: &str) -> JobRecord {
    JobRecord {
        company: company.to_string(),
        posting_date: "2024-03-30".to_string(),
        job_id: job_id.to_string(),
        country: "us".to_string(),
        location: "Bridgewater, MA".to_string(),
        published_at: "1711843200".to_string(),
        salary_max: "85000".to_string(),
        salary_min: "65000".to_string(),
        salary_type: "yearly".to_string(),
        job_title: "Software Engineer".to_string(),
    }
}

fn header() -> Vec<String> {
    Column::ALL.iter().map(|c| c.header().to_string()).collect()
}

fn write_workbook(dir: &Path, records: &[JobRecord]) -> std::path::PathBuf {
    let path = dir.join("Project2Data.xlsx");
    export_records(&path, SHEET, records).unwrap();
    path
}

#[test]
fn export_then_import_preserves_records_and_order() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let records = vec![
        record("Acme", "aaaaaaaaaaaaaaaaaaaa"),
        record("Bolt", "bbbbbbbbbbbbbbbbbbbb"),
        JobRecord {
            salary_type: "N/A".to_string(),
            salary_max: String::new(),
            salary_min: String::new(),
            ..record("Crux", "cccccccccccccccccccc")
        },
    ];
    let path = write_workbook(temp.path(), &records);

    let decoded = import_records(&path, SHEET).unwrap();
    assert_eq!(decoded.records, records);
    assert!(decoded.rejected.is_empty());
}

#[test]
fn export_writes_fixed_header_first() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = write_workbook(temp.path(), &[record("Acme", "abc")]);

    let rows = read_sheet_rows(&path, SHEET).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], header());
    assert_eq!(rows[1][Column::JobId.index()], "abc");
    assert_eq!(rows[1][Column::JobTitle.index()], "Software Engineer");
}

#[test]
fn header_only_sheet_imports_empty_store() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = write_workbook(temp.path(), &[]);

    let decoded = import_records(&path, SHEET).unwrap();
    assert!(decoded.records.is_empty());
    assert!(decoded.rejected.is_empty());
}

#[test]
fn first_record_is_not_dropped() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = write_workbook(temp.path(), &[record("Only", "x")]);

    let decoded = import_records(&path, SHEET).unwrap();
    assert_eq!(decoded.records.len(), 1);
    assert_eq!(decoded.records[0].company, "Only");
}

#[test]
fn export_overwrites_previous_contents() {
    init_logging();
    let temp = TempDir::new().unwrap();
    write_workbook(temp.path(), &[record("Old", "1"), record("Older", "2")]);
    let path = write_workbook(temp.path(), &[record("New", "3")]);

    let decoded = import_records(&path, SHEET).unwrap();
    assert_eq!(decoded.records, vec![record("New", "3")]);
}

#[test]
fn missing_file_is_open_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let err = import_records(&temp.path().join("absent.xlsx"), SHEET).unwrap_err();
    assert!(matches!(err, SheetError::Open { .. }), "{err}");
}

#[test]
fn missing_sheet_is_reported_with_available_names() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = write_workbook(temp.path(), &[]);

    let err = import_records(&path, "Other Sheet").unwrap_err();
    match err {
        SheetError::SheetNotFound { sheet, available } => {
            assert_eq!(sheet, "Other Sheet");
            assert_eq!(available, vec![SHEET.to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn garbage_file_is_open_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.xlsx");
    fs::write(&path, b"not a zip archive").unwrap();

    let err = import_records(&path, SHEET).unwrap_err();
    assert!(matches!(err, SheetError::Open { .. }), "{err}");
}

#[test]
fn short_rows_are_rejected_and_reported() {
    init_logging();
    let full: Vec<String> = record("Acme", "a").to_cells().map(str::to_string).to_vec();
    let short: Vec<String> = full[..7].to_vec();
    let rows = vec![header(), full.clone(), short, full];

    let decoded = decode_rows(&rows);
    assert_eq!(decoded.records.len(), 2);
    assert_eq!(
        decoded.rejected,
        vec![RowError::Arity {
            row: 3,
            found: 7,
            expected: Column::COUNT,
        }]
    );
    assert_eq!(decoded.rejected[0].row(), 3);
}

#[test]
fn blank_rows_are_skipped_and_extra_cells_ignored() {
    init_logging();
    let mut wide: Vec<String> = record("Wide", "w").to_cells().map(str::to_string).to_vec();
    wide.push("ignored".to_string());
    let rows = vec![header(), vec![String::new(); Column::COUNT], wide];

    let decoded = decode_rows(&rows);
    assert!(decoded.rejected.is_empty());
    assert_eq!(decoded.records, vec![record("Wide", "w")]);
}

#[test]
fn header_row_is_skipped_even_if_it_looks_like_data() {
    init_logging();
    let row: Vec<String> = record("Acme", "a").to_cells().map(str::to_string).to_vec();
    let decoded = decode_rows(&[row.clone(), row]);
    assert_eq!(decoded.records.len(), 1);
}

#[test]
fn awkward_text_survives_a_round_trip() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let values = [
        "  padded  ",
        "   ",
        "line\nbreak",
        "tab\there",
        "a\r\nb",
        "_x000D_",
        "_x005F_x000D_",
        "Zürich, Genève",
        "=1+1",
        "0012",
        "1.50",
        "TRUE",
        "bell\u{7}",
    ];
    let records: Vec<JobRecord> = values
        .iter()
        .enumerate()
        .map(|(i, value)| JobRecord {
            location: value.to_string(),
            job_title: value.to_string(),
            ..record("Edge", &format!("edge{i}"))
        })
        .collect();
    let path = write_workbook(temp.path(), &records);

    let first = import_records(&path, SHEET).unwrap().records;
    assert_eq!(first, records);

    // A second save of the imported records must not grow the escapes.
    export_records(&path, SHEET, &first).unwrap();
    let second = import_records(&path, SHEET).unwrap().records;
    assert_eq!(second, records);
}

#[test]
fn encode_rejects_invalid_sheet_name() {
    init_logging();
    let err = encode_workbook(&[], "bad/name").unwrap_err();
    assert!(matches!(err, SheetError::Encode(_)), "{err}");
}

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9]([a-zA-Z0-9 ,./$-]{0,14}[a-zA-Z0-9])?",
        "[ a-zA-Z\t\r\n\u{7}_]{1,12}",
        "(_x[0-9A-F]{4}_|_x005F_|[a-z ])+",
        "\\PC{0,10}",
    ]
}

prop_compose! {
    fn arb_record()(
        company in cell(),
        posting_date in cell(),
        job_id in "[a-zA-Z]{20}",
        country in cell(),
        location in cell(),
        published_at in "[0-9]{0,10}",
        salary_max in cell(),
        salary_min in cell(),
        salary_type in prop::sample::select(vec!["hourly", "yearly", "N/A", "weekly", ""]),
        job_title in cell(),
    ) -> JobRecord {
        JobRecord {
            company,
            posting_date,
            job_id,
            country,
            location,
            published_at,
            salary_max,
            salary_min,
            salary_type: salary_type.to_string(),
            job_title,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Exporting any store and importing it again yields the same records in the same order.
    #[test]
    fn round_trip_is_field_for_field(records in prop::collection::vec(arb_record(), 0..40)) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Project2Data.xlsx");
        export_records(&path, SHEET, &records).unwrap();

        let decoded = import_records(&path, SHEET).unwrap();
        prop_assert!(decoded.rejected.is_empty());
        prop_assert_eq!(decoded.records, records);
    }
}
