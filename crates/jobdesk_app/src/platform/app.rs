use std::io::{self, BufRead, Write};

use anyhow::Context;
use jobdesk_core::{update, AppState, AppViewModel, Msg};
use jobdesk_logging::{jobdesk_info, jobdesk_warn};

use super::config::AppConfig;
use super::effects::{EffectRunner, Flow};
use super::persistence;
use super::ui;
use super::ui::input::{parse_command, Command};

/// Loads the workbook, runs the form on stdin/stdout and saves on exit.
pub fn run_app(config: &AppConfig) -> anyhow::Result<()> {
    let records = persistence::load_records(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(config, records, stdin.lock(), stdout.lock())
}

/// Runs one session over arbitrary input and output. End of input is
/// treated as a close request, so the store is always exported on the way out.
pub fn run_session<R: BufRead, W: Write>(
    config: &AppConfig,
    records: Vec<jobdesk_core::JobRecord>,
    input: R,
    output: W,
) -> anyhow::Result<()> {
    let mut handler = AppEventHandler::new(config.clone(), output);
    handler.write_lines([ui::constants::WINDOW_TITLE.to_string()])?;
    handler.dispatch_msg(Msg::RecordsLoaded(records))?;

    handler.prompt()?;
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if handler.handle_line(&line)? == Flow::Quit {
            return Ok(());
        }
        handler.prompt()?;
    }

    jobdesk_info!("Input closed, saving and exiting");
    handler.dispatch_msg(Msg::CloseRequested)?;
    Ok(())
}

struct AppEventHandler<W: Write> {
    state: AppState,
    effects: EffectRunner,
    output: W,
}

impl<W: Write> AppEventHandler<W> {
    fn new(config: AppConfig, output: W) -> Self {
        Self {
            state: AppState::new(),
            effects: EffectRunner::new(config),
            output,
        }
    }

    fn handle_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                jobdesk_warn!("Rejected input {:?}: {}", line, err);
                self.write_lines([format!("! {err}")])?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::List => {
                let view = self.state.view();
                self.write_lines(ui::render::render_list(&view))?;
                Ok(Flow::Continue)
            }
            Command::Show => {
                let view = self.state.view();
                self.write_lines(ui::render::render(&view))?;
                Ok(Flow::Continue)
            }
            Command::Help => {
                self.write_lines([ui::constants::HELP_TEXT.to_string()])?;
                Ok(Flow::Continue)
            }
            other => match other.to_msg() {
                Some(msg) => self.dispatch_msg(msg),
                None => Ok(Flow::Continue),
            },
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) -> anyhow::Result<Flow> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let maybe_view = state.consume_dirty().then(|| state.view());
        self.state = state;

        if let Some(view) = maybe_view {
            self.enqueue_render(&view)?;
        }
        self.effects.run(effects)
    }

    fn enqueue_render(&mut self, view: &AppViewModel) -> anyhow::Result<()> {
        self.write_lines(ui::render::render(view))
    }

    fn prompt(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", ui::constants::PROMPT)?;
        self.output.flush()?;
        Ok(())
    }

    fn write_lines<I: IntoIterator<Item = String>>(&mut self, lines: I) -> anyhow::Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use jobdesk_core::JobRecord;
    use jobdesk_sheet::{export_records, import_records};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn record(company: &str, title: &str) -> JobRecord {
        JobRecord {
            company: company.to_string(),
            posting_date: "2024-03-30".to_string(),
            job_id: format!("{company}Identifier"),
            country: "us".to_string(),
            location: "Boston".to_string(),
            published_at: "1711843200".to_string(),
            salary_max: "10".to_string(),
            salary_min: "5".to_string(),
            salary_type: "hourly".to_string(),
            job_title: title.to_string(),
        }
    }

    fn config_in(temp: &TempDir) -> AppConfig {
        AppConfig {
            data_file: temp.path().join("Project2Data.xlsx"),
            ..AppConfig::default()
        }
    }

    fn session(config: &AppConfig, script: &str) -> String {
        let records = persistence::load_records(config).unwrap();
        let mut output = Vec::new();
        run_session(config, records, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn edits_are_saved_on_quit() {
        jobdesk_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let seed = vec![record("Acme", "Engineer"), record("Bolt", "Analyst"), record("Crux", "Designer")];
        export_records(&config.data_file, &config.sheet_name, &seed).unwrap();

        let script = "\
select 2
set title Senior Analyst
update
select 1
delete
set company Delta
set title Tester
type yearly
save
quit
";
        let output = session(&config, script);
        assert!(output.contains("Updated \"Bolt : Senior Analyst\"."));

        let saved = import_records(&config.data_file, &config.sheet_name)
            .unwrap()
            .records;
        let labels: Vec<String> = saved.iter().map(JobRecord::list_label).collect();
        assert_eq!(
            labels,
            vec!["Bolt : Senior Analyst", "Crux : Designer", "Delta : Tester"]
        );
        assert_eq!(saved[0].job_id, "BoltIdentifier");
        assert_eq!(saved[2].salary_type, "yearly");
        assert_eq!(saved[2].country, "us");
        assert_eq!(saved[2].job_id.len(), jobdesk_core::JOB_ID_LEN);
    }

    #[test]
    fn end_of_input_saves_like_quit() {
        jobdesk_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        export_records(&config.data_file, &config.sheet_name, &[record("Acme", "Engineer")])
            .unwrap();

        session(&config, "select 1\ndelete\n");

        let saved = import_records(&config.data_file, &config.sheet_name).unwrap();
        assert!(saved.records.is_empty());
    }

    #[test]
    fn bad_input_does_not_touch_store() {
        jobdesk_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        export_records(&config.data_file, &config.sheet_name, &[record("Acme", "Engineer")])
            .unwrap();

        let output = session(&config, "bogus\nselect 9\nupdate\ndelete\nquit\n");
        assert!(output.contains("! unknown command \"bogus\""));
        assert!(output.contains("! No record at position 9."));
        assert!(output.contains("! Nothing selected"));

        let saved = import_records(&config.data_file, &config.sheet_name).unwrap();
        assert_eq!(saved.records, vec![record("Acme", "Engineer")]);
    }

    #[test]
    fn missing_workbook_is_fatal() {
        jobdesk_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);

        let err = run_app(&config).unwrap_err();
        assert!(format!("{err:#}").contains("couldn't load jobs"));
    }

    #[test]
    fn failed_save_is_fatal() {
        jobdesk_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let config = AppConfig {
            data_file: blocker.join("Project2Data.xlsx"),
            ..AppConfig::default()
        };

        let mut output = Vec::new();
        let result = run_session(&config, Vec::new(), Cursor::new("quit\n"), &mut output);
        assert!(format!("{:#}", result.unwrap_err()).contains("Error saving jobs"));
    }
}
