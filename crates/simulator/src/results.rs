//! Simulation results storage and reporting

use ladder_core::SlotPosition;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::runner::{RunConfig, RunSummary};

/// A complete, persistable record of one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResults {
    /// Name/description of the run
    pub name: String,
    /// Configuration used
    pub config: RunConfig,
    /// Outcome, including the sampled history
    pub summary: RunSummary,
}

impl SimulationResults {
    pub fn new(name: &str, config: RunConfig, summary: RunSummary) -> Self {
        Self {
            name: name.to_string(),
            config,
            summary,
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Simulation: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Config: {} slots, {} rounds, fairness {}\n",
            self.config.num_slots, self.config.rounds, self.config.fairness
        ));
        if let Some(seed) = self.config.seed {
            report.push_str(&format!("Seed: {}\n", seed));
        }
        report.push_str(&format!(
            "Final: {} inversions, sortedness {:.3}\n",
            self.summary.final_inversions, self.summary.final_sortedness
        ));
        match self.summary.first_sorted_round() {
            Some(round) => {
                report.push_str(&format!("First fully sorted at round {}\n\n", round))
            }
            None => report.push_str("Never fully sorted\n\n"),
        }

        report.push_str("Final arrangement (rankings):\n");
        report.push_str(&format!("{:>6} {:>6} {:>8}\n", "Slot", "Top", "Bottom"));
        report.push_str(&"-".repeat(24));
        report.push('\n');

        let num_slots = self
            .summary
            .final_arrangement
            .iter()
            .map(|p| p.slot + 1)
            .max()
            .unwrap_or(0);
        let mut rows: Vec<(Option<u8>, Option<u8>)> = vec![(None, None); num_slots];
        for p in &self.summary.final_arrangement {
            match p.position {
                SlotPosition::Top => rows[p.slot].0 = Some(p.ranking),
                SlotPosition::Bottom => rows[p.slot].1 = Some(p.ranking),
            }
        }
        for (slot, (top, bottom)) in rows.into_iter().enumerate() {
            let fmt = |r: Option<u8>| r.map_or("-".to_string(), |r| r.to_string());
            report.push_str(&format!(
                "{:>6} {:>6} {:>8}\n",
                slot,
                fmt(top),
                fmt(bottom)
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
