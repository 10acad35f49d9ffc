//! Optional TOML configuration file for simulation runs.
//!
//! Every field is optional; missing fields keep the `RunConfig` defaults,
//! and CLI flags override both.

use serde::Deserialize;

use crate::runner::RunConfig;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimFile {
    pub rounds: Option<u32>,
    pub fairness: Option<u32>,
    pub slots: Option<usize>,
    pub seed: Option<u64>,
    pub record_every: Option<u32>,
}

impl SimFile {
    /// Load a config file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Apply the file's settings on top of `config`.
    pub fn apply(&self, config: &mut RunConfig) {
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(fairness) = self.fairness {
            config.fairness = fairness;
        }
        if let Some(slots) = self.slots {
            config.num_slots = slots;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(record_every) = self.record_every {
            config.record_every = record_every;
        }
    }
}
