use jobdesk_core::Effect;
use jobdesk_logging::jobdesk_info;

use super::config::AppConfig;
use super::persistence;

/// Whether the session keeps reading input after a batch of effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct EffectRunner {
    config: AppConfig,
}

impl EffectRunner {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Runs effects in order. An export failure stops the batch and is returned.
    pub fn run(&self, effects: Vec<Effect>) -> anyhow::Result<Flow> {
        let mut flow = Flow::Continue;
        for effect in effects {
            match effect {
                Effect::ExportRecords { records } => {
                    let path = persistence::save_records(&self.config, &records)?;
                    jobdesk_info!("Saved {} jobs to {:?}", records.len(), path);
                }
                Effect::Quit => {
                    flow = Flow::Quit;
                }
            }
        }
        Ok(flow)
    }
}
