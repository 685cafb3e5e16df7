use crate::{FormFields, StatusMessage};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub rows: Vec<RecordRowView>,
    pub record_count: usize,
    pub selection: Option<usize>,
    pub form: FormFields,
    pub status: Option<StatusMessage>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRowView {
    pub index: usize,
    pub label: String,
    pub selected: bool,
}
