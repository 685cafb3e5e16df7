use crate::view_model::{AppViewModel, RecordRowView};
use crate::{FormFields, JobStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

/// One-line feedback shown under the form after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }
}

/// Session state: the record store, the edit form and the selection slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    store: JobStore,
    form: FormFields,
    selection: Option<usize>,
    status: Option<StatusMessage>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: JobStore::new(),
            form: FormFields::new(),
            selection: None,
            status: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            rows: self
                .store
                .iter()
                .enumerate()
                .map(|(index, record)| RecordRowView {
                    index,
                    label: record.list_label(),
                    selected: self.selection == Some(index),
                })
                .collect(),
            record_count: self.store.len(),
            selection: self.selection,
            form: self.form.clone(),
            status: self.status.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn store_mut(&mut self) -> &mut JobStore {
        &mut self.store
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormFields {
        &mut self.form
    }

    pub(crate) fn set_selection(&mut self, selection: Option<usize>) {
        self.selection = selection;
    }

    pub(crate) fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub(crate) fn replace_store(&mut self, store: JobStore) {
        self.store = store;
        self.selection = None;
        self.form.clear();
    }

    /// Selection only if it still points at a record.
    pub(crate) fn valid_selection(&self) -> Option<usize> {
        self.selection.filter(|&index| index < self.store.len())
    }
}
