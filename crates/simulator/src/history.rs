//! Convergence tracking across rounds

use ladder_core::{Ladder, inversions, mean_slot_displacement, sortedness};
use serde::{Deserialize, Serialize};

/// Metrics for the arrangement as it stood after a given round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoundSample {
    pub round: u32,
    pub inversions: u64,
    pub sortedness: f64,
    pub mean_displacement: f64,
}

impl RoundSample {
    pub fn measure(round: u32, ladder: &Ladder) -> Self {
        Self {
            round,
            inversions: inversions(ladder),
            sortedness: sortedness(ladder),
            mean_displacement: mean_slot_displacement(ladder),
        }
    }
}

/// Sampled metric history of a single run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvergenceHistory {
    /// Samples in round order (round 0 is the starting arrangement)
    pub samples: Vec<RoundSample>,
    /// First round at which the ladder had zero inversions, if any
    pub first_sorted_round: Option<u32>,
}

impl ConvergenceHistory {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            first_sorted_round: None,
        }
    }

    /// Measure the ladder and append the sample.
    pub fn record(&mut self, round: u32, ladder: &Ladder) -> RoundSample {
        let sample = RoundSample::measure(round, ladder);
        self.samples.push(sample);
        sample
    }

    /// Note that the ladder was fully sorted at `round`. Only the first
    /// such round is kept.
    pub fn mark_sorted(&mut self, round: u32) {
        if self.first_sorted_round.is_none() {
            self.first_sorted_round = Some(round);
        }
    }

    pub fn last(&self) -> Option<&RoundSample> {
        self.samples.last()
    }

    /// Load history from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Save history to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Print the sampled metrics to stdout
    pub fn print_table(&self) {
        println!("\n=== Convergence ===");
        println!(
            "{:>8} {:>12} {:>12} {:>14}",
            "Round", "Inversions", "Sortedness", "Displacement"
        );
        println!("{}", "-".repeat(50));
        for sample in &self.samples {
            println!(
                "{:>8} {:>12} {:>12.3} {:>14.2}",
                sample.round, sample.inversions, sample.sortedness, sample.mean_displacement
            );
        }
        match self.first_sorted_round {
            Some(round) => println!("First fully sorted at round {}", round),
            None => println!("Never fully sorted"),
        }
        println!();
    }
}
