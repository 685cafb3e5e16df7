//! Jobdesk core: record store, edit form and the pure session state machine.
mod effect;
mod form;
mod msg;
mod record;
mod state;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use form::{FormField, FormFields};
pub use msg::Msg;
pub use record::{
    Column, CreationStamp, JobId, JobRecord, SalaryType, DEFAULT_COUNTRY, JOB_ID_LEN,
    MAX_CELL_CHARS,
};
pub use state::{AppState, StatusKind, StatusMessage};
pub use store::JobStore;
pub use update::update;
pub use view_model::{AppViewModel, RecordRowView};
