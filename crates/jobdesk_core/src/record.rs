use std::fmt;

use chrono::{Local, Utc};
use rand::Rng;

/// Number of characters in a generated job id.
pub const JOB_ID_LEN: usize = 20;

/// Longest text a spreadsheet cell can hold, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Country stamped on records created from the form.
pub const DEFAULT_COUNTRY: &str = "us";

const JOB_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Spreadsheet columns in their fixed order.
///
/// Import and export both walk `Column::ALL`, so a field can never land in a
/// different column on the way out than it came in on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Company,
    PostingDate,
    JobId,
    Country,
    Location,
    PublishedAt,
    SalaryMax,
    SalaryMin,
    SalaryType,
    JobTitle,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Company,
        Column::PostingDate,
        Column::JobId,
        Column::Country,
        Column::Location,
        Column::PublishedAt,
        Column::SalaryMax,
        Column::SalaryMin,
        Column::SalaryType,
        Column::JobTitle,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based column index in the sheet.
    pub fn index(self) -> usize {
        match self {
            Column::Company => 0,
            Column::PostingDate => 1,
            Column::JobId => 2,
            Column::Country => 3,
            Column::Location => 4,
            Column::PublishedAt => 5,
            Column::SalaryMax => 6,
            Column::SalaryMin => 7,
            Column::SalaryType => 8,
            Column::JobTitle => 9,
        }
    }

    /// Header text written to the first row on export.
    pub fn header(self) -> &'static str {
        match self {
            Column::Company => "Company Name",
            Column::PostingDate => "Posting Age",
            Column::JobId => "Job Id",
            Column::Country => "Country",
            Column::Location => "Location",
            Column::PublishedAt => "Publication Date",
            Column::SalaryMax => "Salary Max",
            Column::SalaryMin => "Salary Min",
            Column::SalaryType => "Salary Type",
            Column::JobTitle => "Job Title",
        }
    }
}

/// Randomly generated alphabetic identifier of a job listing.
///
/// Uniqueness is not checked; collisions are left to probability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JobId(String);

impl JobId {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let id = (0..JOB_ID_LEN)
            .map(|_| char::from(JOB_ID_ALPHABET[rng.random_range(0..JOB_ID_ALPHABET.len())]))
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Salary types offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalaryType {
    Hourly,
    Yearly,
    #[default]
    NotApplicable,
}

impl SalaryType {
    pub const ALL: [SalaryType; 3] = [
        SalaryType::Hourly,
        SalaryType::Yearly,
        SalaryType::NotApplicable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SalaryType::Hourly => "hourly",
            SalaryType::Yearly => "yearly",
            SalaryType::NotApplicable => "N/A",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == text)
    }
}

impl fmt::Display for SalaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One job listing. Every field is free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobRecord {
    pub company: String,
    pub posting_date: String,
    pub job_id: String,
    pub country: String,
    pub location: String,
    /// Seconds since the Unix epoch, as text.
    pub published_at: String,
    pub salary_max: String,
    pub salary_min: String,
    pub salary_type: String,
    pub job_title: String,
}

impl JobRecord {
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Company => &self.company,
            Column::PostingDate => &self.posting_date,
            Column::JobId => &self.job_id,
            Column::Country => &self.country,
            Column::Location => &self.location,
            Column::PublishedAt => &self.published_at,
            Column::SalaryMax => &self.salary_max,
            Column::SalaryMin => &self.salary_min,
            Column::SalaryType => &self.salary_type,
            Column::JobTitle => &self.job_title,
        }
    }

    pub fn field_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Company => &mut self.company,
            Column::PostingDate => &mut self.posting_date,
            Column::JobId => &mut self.job_id,
            Column::Country => &mut self.country,
            Column::Location => &mut self.location,
            Column::PublishedAt => &mut self.published_at,
            Column::SalaryMax => &mut self.salary_max,
            Column::SalaryMin => &mut self.salary_min,
            Column::SalaryType => &mut self.salary_type,
            Column::JobTitle => &mut self.job_title,
        }
    }

    /// Builds a record from one sheet row. Returns `None` when the row has
    /// fewer than `Column::COUNT` cells; extra cells are ignored.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Option<Self> {
        if cells.len() < Column::COUNT {
            return None;
        }
        let mut record = JobRecord::default();
        for column in Column::ALL {
            *record.field_mut(column) = cells[column.index()].as_ref().to_owned();
        }
        Some(record)
    }

    /// Cells in column order, ready to be written as one sheet row.
    pub fn to_cells(&self) -> [&str; Column::COUNT] {
        Column::ALL.map(|column| self.field(column))
    }

    /// Text shown for this record in the listing.
    pub fn list_label(&self) -> String {
        format!("{} : {}", self.company, self.job_title)
    }
}

/// Values stamped on a record at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationStamp {
    pub posting_date: String,
    pub published_at: String,
    pub job_id: JobId,
}

impl CreationStamp {
    /// Stamp for a record created right now: today's local date, the current
    /// epoch seconds and a fresh job id.
    pub fn now() -> Self {
        Self {
            posting_date: Local::now().format("%Y-%m-%d").to_string(),
            published_at: Utc::now().timestamp().to_string(),
            job_id: JobId::generate(&mut rand::rng()),
        }
    }
}
