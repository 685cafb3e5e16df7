#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Rewrite the spreadsheet with the full store, in store order.
    ExportRecords { records: Vec<crate::JobRecord> },
    Quit,
}
