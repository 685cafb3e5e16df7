use std::path::PathBuf;

use anyhow::Context;
use jobdesk_core::JobRecord;
use jobdesk_logging::{jobdesk_info, jobdesk_warn};
use jobdesk_sheet::{export_records, import_records};

use super::config::AppConfig;

/// Loads the session's records. Any failure to open or read the workbook is
/// fatal; rejected rows are only logged.
pub(crate) fn load_records(config: &AppConfig) -> anyhow::Result<Vec<JobRecord>> {
    let decoded = import_records(&config.data_file, &config.sheet_name).with_context(|| {
        format!(
            "couldn't load jobs from {:?} sheet {:?}",
            config.data_file, config.sheet_name
        )
    })?;

    if !decoded.rejected.is_empty() {
        jobdesk_warn!(
            "{} rows in {:?} were skipped",
            decoded.rejected.len(),
            config.data_file
        );
    }
    jobdesk_info!("Loaded {} jobs from {:?}", decoded.records.len(), config.data_file);
    Ok(decoded.records)
}

/// Rewrites the workbook with `records`. Failure is fatal.
pub(crate) fn save_records(config: &AppConfig, records: &[JobRecord]) -> anyhow::Result<PathBuf> {
    export_records(&config.data_file, &config.sheet_name, records)
        .with_context(|| format!("Error saving jobs to {:?}", config.data_file))
}
