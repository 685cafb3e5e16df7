mod platform;

use std::path::Path;
use std::process::ExitCode;

use jobdesk_logging::{jobdesk_error, jobdesk_info, jobdesk_warn};

use platform::config::{load_config, AppConfig, CONFIG_FILENAME};

fn main() -> ExitCode {
    let (config, config_error) = match load_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    platform::logging::initialize(config.log_destination);
    if let Some(err) = config_error {
        jobdesk_warn!("Using default configuration: {}", err);
    }
    jobdesk_info!(
        "Starting with {:?} sheet {:?}",
        config.data_file,
        config.sheet_name
    );

    match platform::run_app(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            jobdesk_error!("{:#}", err);
            eprintln!("jobdesk: {err:#}");
            ExitCode::FAILURE
        }
    }
}
