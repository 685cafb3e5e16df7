use jobdesk_logging::{jobdesk_debug, jobdesk_info, jobdesk_warn};

use crate::{
    AppState, CreationStamp, Effect, JobRecord, JobStore, Msg, StatusMessage,
    DEFAULT_COUNTRY, MAX_CELL_CHARS,
};

const NOTHING_SELECTED: &str = "Nothing selected: choose a record from the list first.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RecordsLoaded(records) => {
            jobdesk_info!("Loaded {} records into the store", records.len());
            state.replace_store(JobStore::from_records(records));
            state.mark_dirty();
            Vec::new()
        }
        Msg::FieldEdited { field, value } => {
            let length = value.chars().count();
            if length > MAX_CELL_CHARS {
                jobdesk_warn!(
                    "Rejected {} edit of {} characters (limit {})",
                    field.label(),
                    length,
                    MAX_CELL_CHARS
                );
                reject(
                    &mut state,
                    format!(
                        "{} is too long: {} characters, a cell holds at most {}.",
                        field.label(),
                        length,
                        MAX_CELL_CHARS
                    ),
                );
            } else if state.form().get(field) != value {
                state.form_mut().set(field, value);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SalaryTypeChosen(kind) => {
            if state.form().salary_type != kind.as_str() {
                state.form_mut().salary_type = kind.as_str().to_string();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RecordSelected { index } => {
            select_record(&mut state, index);
            Vec::new()
        }
        Msg::SaveClicked { stamp } => {
            create_record(&mut state, stamp);
            Vec::new()
        }
        Msg::UpdateClicked => {
            update_selected(&mut state);
            Vec::new()
        }
        Msg::DeleteClicked => {
            delete_selected(&mut state);
            Vec::new()
        }
        Msg::CloseRequested => {
            jobdesk_info!("Close requested with {} records", state.store().len());
            vec![
                Effect::ExportRecords {
                    records: state.store().records().to_vec(),
                },
                Effect::Quit,
            ]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn select_record(state: &mut AppState, index: usize) {
    let Some(record) = state.store().get(index).cloned() else {
        jobdesk_warn!(
            "Ignoring selection of position {} in a store of {} records",
            index,
            state.store().len()
        );
        reject(state, format!("No record at position {}.", index + 1));
        return;
    };
    jobdesk_debug!("Selected position {} job_id={}", index, record.job_id);
    state.form_mut().load(&record);
    state.set_selection(Some(index));
    state.mark_dirty();
}

fn create_record(state: &mut AppState, stamp: CreationStamp) {
    let form = state.form();
    let record = JobRecord {
        company: form.company.clone(),
        posting_date: stamp.posting_date,
        job_id: stamp.job_id.to_string(),
        country: DEFAULT_COUNTRY.to_string(),
        location: form.location.clone(),
        published_at: stamp.published_at,
        salary_max: form.salary_max.clone(),
        salary_min: form.salary_min.clone(),
        salary_type: form.salary_type.clone(),
        job_title: form.job_title.clone(),
    };
    let label = record.list_label();
    let job_id = record.job_id.clone();
    let position = state.store_mut().push(record);
    jobdesk_info!("Created record at position {} job_id={}", position, job_id);
    state.set_status(StatusMessage::info(format!("Saved new job \"{label}\".")));
    state.mark_dirty();
}

fn update_selected(state: &mut AppState) {
    let Some(index) = state.valid_selection() else {
        jobdesk_warn!("Update rejected: selection {:?} is not valid", state.selection());
        reject(state, NOTHING_SELECTED);
        return;
    };
    let form = state.form().clone();
    let Some(record) = state.store_mut().get_mut(index) else {
        return;
    };
    form.apply_to(record);
    let job_id = record.job_id.clone();
    let label = record.list_label();
    jobdesk_info!("Updated record at position {} job_id={}", index, job_id);
    state.set_status(StatusMessage::info(format!("Updated \"{label}\".")));
    state.mark_dirty();
}

fn delete_selected(state: &mut AppState) {
    let Some(index) = state.valid_selection() else {
        jobdesk_warn!("Delete rejected: selection {:?} is not valid", state.selection());
        reject(state, NOTHING_SELECTED);
        return;
    };
    let Some(removed) = state.store_mut().remove(index) else {
        return;
    };
    jobdesk_info!("Deleted record at position {} job_id={}", index, removed.job_id);

    // Selection snaps back to the first record; the form is emptied rather
    // than showing it. Salary type returns to N/A with the cleared form.
    let next = (!state.store().is_empty()).then_some(0);
    state.set_selection(next);
    state.form_mut().clear();
    let text = match next {
        Some(position) => format!(
            "Deleted \"{}\". Selection moved to job {}; the form is cleared.",
            removed.list_label(),
            position + 1
        ),
        None => format!("Deleted \"{}\". No jobs left.", removed.list_label()),
    };
    state.set_status(StatusMessage::info(text));
    state.mark_dirty();
}

fn reject(state: &mut AppState, text: impl Into<String>) {
    state.set_status(StatusMessage::warning(text));
    state.mark_dirty();
}
