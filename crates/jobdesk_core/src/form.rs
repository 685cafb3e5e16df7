use crate::{JobRecord, SalaryType};

/// Editable text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Company,
    JobTitle,
    Location,
    SalaryMin,
    SalaryMax,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Company,
        FormField::JobTitle,
        FormField::Location,
        FormField::SalaryMin,
        FormField::SalaryMax,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Company => "Company",
            FormField::JobTitle => "Job Title",
            FormField::Location => "Job Location",
            FormField::SalaryMin => "Min Salary",
            FormField::SalaryMax => "Max Salary",
        }
    }
}

/// Current contents of the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub company: String,
    pub job_title: String,
    pub location: String,
    pub salary_min: String,
    pub salary_max: String,
    /// Kept as text: a selected record may carry a salary type outside
    /// `SalaryType::ALL`.
    pub salary_type: String,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            salary_type: SalaryType::default().as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Company => &self.company,
            FormField::JobTitle => &self.job_title,
            FormField::Location => &self.location,
            FormField::SalaryMin => &self.salary_min,
            FormField::SalaryMax => &self.salary_max,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Company => &mut self.company,
            FormField::JobTitle => &mut self.job_title,
            FormField::Location => &mut self.location,
            FormField::SalaryMin => &mut self.salary_min,
            FormField::SalaryMax => &mut self.salary_max,
        };
        *slot = value;
    }

    pub fn load(&mut self, record: &JobRecord) {
        self.company.clone_from(&record.company);
        self.job_title.clone_from(&record.job_title);
        self.location.clone_from(&record.location);
        self.salary_min.clone_from(&record.salary_min);
        self.salary_max.clone_from(&record.salary_max);
        self.salary_type.clone_from(&record.salary_type);
    }

    /// Overwrites the six form-backed fields of `record`. Job id, posting
    /// date, publication timestamp and country are left alone.
    pub fn apply_to(&self, record: &mut JobRecord) {
        record.job_title.clone_from(&self.job_title);
        record.salary_max.clone_from(&self.salary_max);
        record.salary_min.clone_from(&self.salary_min);
        record.company.clone_from(&self.company);
        record.location.clone_from(&self.location);
        record.salary_type.clone_from(&self.salary_type);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
