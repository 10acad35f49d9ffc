//! Ladder Simulation Runner
//!
//! This crate provides infrastructure for:
//! - Running many rounds of the ladder dynamics from `ladder_core`
//! - Tracking convergence metrics (inversions, sortedness) over time
//! - Persisting and reporting results for comparing fairness settings
//!
//! # Usage
//!
//! ```bash
//! # Run 500 rounds on a 10-slot ladder with the default fairness
//! cargo run -p simulator -- run --rounds 500
//!
//! # Sweep fairness values to see how fast each setting sorts
//! cargo run -p simulator -- sweep --trials 20 --fairness-values 0,100,10000
//! ```

mod config;
mod history;
mod results;
mod runner;

pub use config::*;
pub use history::*;
pub use results::*;
pub use runner::*;
