#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Records imported from the spreadsheet at launch.
    RecordsLoaded(Vec<crate::JobRecord>),
    /// User edited one of the form's text fields.
    FieldEdited {
        field: crate::FormField,
        value: String,
    },
    /// User picked a salary type.
    SalaryTypeChosen(crate::SalaryType),
    /// User chose a record from the listing.
    RecordSelected { index: usize },
    /// User clicked Save: append a new record built from the form.
    SaveClicked { stamp: crate::CreationStamp },
    /// User clicked Update: overwrite the selected record from the form.
    UpdateClicked,
    /// User clicked Delete: remove the selected record.
    DeleteClicked,
    /// User closed the form.
    CloseRequested,
    /// Fallback for input that maps to nothing.
    NoOp,
}
