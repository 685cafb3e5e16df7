use jobdesk_core::{AppViewModel, FormField, SalaryType, StatusKind};

const LABEL_WIDTH: usize = 14;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = render_list(view);
    lines.push(String::new());
    lines.extend(render_form(view));
    lines.extend(render_status(view));
    lines
}

pub fn render_list(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 1);
    lines.push(format!("Jobs ({}):", view.record_count));
    if view.rows.is_empty() {
        lines.push("  (none)".to_string());
    }
    for row in &view.rows {
        let marker = if row.selected { '>' } else { ' ' };
        lines.push(format!("{marker} {:>3}. {}", row.index + 1, row.label));
    }
    lines
}

pub fn render_form(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(FormField::ALL.len() + 1);
    for field in FormField::ALL {
        lines.push(format!(
            "{:<width$}{}",
            format!("{}:", field.label()),
            view.form.get(field),
            width = LABEL_WIDTH
        ));
    }
    let choices = SalaryType::ALL
        .iter()
        .map(|kind| {
            if kind.as_str() == view.form.salary_type {
                format!("(*) {kind}")
            } else {
                format!("( ) {kind}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!(
        "{:<width$}{}",
        "Salary type:",
        choices,
        width = LABEL_WIDTH
    ));
    lines
}

fn render_status(view: &AppViewModel) -> Option<String> {
    view.status.as_ref().map(|status| match status.kind {
        StatusKind::Info => status.text.clone(),
        StatusKind::Warning => format!("! {}", status.text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdesk_core::{update, AppState, JobRecord, Msg};

    fn view_with_two() -> AppViewModel {
        let records = vec![
            JobRecord {
                company: "Acme".to_string(),
                job_title: "Engineer".to_string(),
                salary_type: "yearly".to_string(),
                ..JobRecord::default()
            },
            JobRecord {
                company: "Bolt".to_string(),
                job_title: "Analyst".to_string(),
                ..JobRecord::default()
            },
        ];
        let (state, _) = update(AppState::new(), Msg::RecordsLoaded(records));
        let (state, _) = update(state, Msg::RecordSelected { index: 0 });
        state.view()
    }

    #[test]
    fn list_marks_selected_row() {
        let lines = render_list(&view_with_two());
        assert_eq!(lines[0], "Jobs (2):");
        assert_eq!(lines[1], ">   1. Acme : Engineer");
        assert_eq!(lines[2], "    2. Bolt : Analyst");
    }

    #[test]
    fn form_shows_fields_and_salary_choice() {
        let lines = render_form(&view_with_two());
        assert_eq!(lines[0], "Company:      Acme");
        assert!(lines[5].contains("(*) yearly"));
        assert!(lines[5].contains("( ) hourly"));
    }

    #[test]
    fn warnings_are_flagged() {
        let (state, _) = update(AppState::new(), Msg::DeleteClicked);
        let lines = render(&state.view());
        assert!(lines.last().unwrap().starts_with("! Nothing selected"));
    }
}
