//! Round runner: drives the ladder through many rounds and samples metrics

use ladder_core::{Ladder, Participant, is_slot_sorted, play_round};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::history::ConvergenceHistory;

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of rounds to play
    pub rounds: u32,
    /// Fairness bias added to both rankings in every contest
    pub fairness: u32,
    /// Number of slots (two participants each)
    pub num_slots: usize,
    /// RNG seed (None = fresh entropy each run)
    pub seed: Option<u64>,
    /// Sample metrics every this many rounds
    pub record_every: u32,
    /// Print progress during the run
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            fairness: 100,
            num_slots: 10,
            seed: None,
            record_every: 10,
            verbose: true,
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub rounds_played: u32,
    /// Participants in id order, with their final slot and position
    pub final_arrangement: Vec<Participant>,
    pub final_inversions: u64,
    pub final_sortedness: f64,
    pub history: ConvergenceHistory,
}

impl RunSummary {
    pub fn first_sorted_round(&self) -> Option<u32> {
        self.history.first_sorted_round
    }
}

/// Runs rounds of the ladder dynamics according to a `RunConfig`.
pub struct RoundRunner {
    config: RunConfig,
}

impl RoundRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Run from a freshly randomized ladder.
    pub fn run(&self) -> Result<RunSummary, String> {
        let mut rng = self.rng();
        let ladder = Ladder::random(self.config.num_slots, &mut rng)?;
        self.play(ladder, &mut rng)
    }

    /// Run from a caller-supplied starting arrangement.
    pub fn run_from(&self, ladder: Ladder) -> Result<RunSummary, String> {
        let mut rng = self.rng();
        self.play(ladder, &mut rng)
    }

    fn play(&self, mut ladder: Ladder, rng: &mut StdRng) -> Result<RunSummary, String> {
        let every = self.config.record_every.max(1);
        let mut history = ConvergenceHistory::new();

        history.record(0, &ladder);
        if is_slot_sorted(&ladder) {
            history.mark_sorted(0);
        }

        for round in 1..=self.config.rounds {
            ladder = play_round(&ladder, self.config.fairness, rng)?;
            if is_slot_sorted(&ladder) {
                history.mark_sorted(round);
            }
            if round % every == 0 || round == self.config.rounds {
                let sample = history.record(round, &ladder);
                if self.config.verbose {
                    println!(
                        "Round {}/{}: {} inversions (sortedness {:.3})",
                        round, self.config.rounds, sample.inversions, sample.sortedness
                    );
                }
            }
        }

        let last = history
            .last()
            .copied()
            .ok_or_else(|| "run produced no samples".to_string())?;
        Ok(RunSummary {
            rounds_played: self.config.rounds,
            final_arrangement: ladder.participants().to_vec(),
            final_inversions: last.inversions,
            final_sortedness: last.sortedness,
            history,
        })
    }
}

/// Quick utility to run a single silent simulation
pub fn quick_run(
    num_slots: usize,
    rounds: u32,
    fairness: u32,
    seed: Option<u64>,
) -> Result<RunSummary, String> {
    let config = RunConfig {
        num_slots,
        rounds,
        fairness,
        seed,
        verbose: false,
        ..Default::default()
    };
    RoundRunner::new(config).run()
}
