//! Logging initialization for the jobdesk binary.
//!
//! The form owns stdout, so logs go to `./jobdesk.log` unless the config
//! asks for stderr as well or instead.

use std::fs::File;

use log::LevelFilter;
use serde::Deserialize;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./jobdesk.log";
const LEVEL: LevelFilter = LevelFilter::Info;

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogDestination {
    #[default]
    File,
    Terminal,
    Both,
}

impl LogDestination {
    fn writes_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }

    fn writes_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }
}

/// Installs the global logger. The log file is truncated on every start.
pub fn initialize(destination: LogDestination) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.writes_terminal() {
        loggers.push(TermLogger::new(
            LEVEL,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.writes_file() {
        if let Some(file_logger) = file_logger(config) {
            loggers.push(file_logger);
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}

fn file_logger(config: Config) -> Option<Box<WriteLogger<File>>> {
    match File::create(LOG_FILENAME) {
        Ok(file) => Some(WriteLogger::new(LEVEL, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file {LOG_FILENAME}: {err}");
            None
        }
    }
}
