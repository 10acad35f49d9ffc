//! Simulation CLI
//!
//! Run ladder simulations and fairness sweeps from the command line.

use simulator::{RoundRunner, RunConfig, SimFile, SimulationResults, quick_run};
use std::env;
use std::path::Path;

fn print_usage() {
    println!("Ladder Tournament Simulator");
    println!();
    println!("Usage:");
    println!("  simulator run [--rounds N] [--fairness F] [--slots S] [--seed X]");
    println!("                [--config FILE] [--out FILE] [--quiet]");
    println!("  simulator sweep [--rounds N] [--trials T] [--slots S] [--seed X]");
    println!("                  [--fairness-values a,b,c]");
    println!("  simulator report <results.json>");
    println!();
    println!("Fairness is a bias added to both rankings before each contest:");
    println!("  0      - outcomes purely proportional to ranking");
    println!("  large  - every contest approaches a coin flip");
    println!();
    println!("Examples:");
    println!("  simulator run --rounds 500 --fairness 0 --seed 42");
    println!("  simulator sweep --trials 20 --fairness-values 0,100,10000");
}

fn run_sim(args: &[String]) {
    let mut rounds: Option<u32> = None;
    let mut fairness: Option<u32> = None;
    let mut slots: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut config_file: Option<String> = None;
    let mut out: Option<String> = None;
    let mut quiet = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--rounds" | "-r" => {
                if i + 1 < args.len() {
                    rounds = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--fairness" | "-f" => {
                if i + 1 < args.len() {
                    fairness = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--slots" | "-s" => {
                if i + 1 < args.len() {
                    slots = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_file = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--quiet" | "-q" => quiet = true,
            _ => {}
        }
        i += 1;
    }

    // Config file first, flags on top
    let mut config = RunConfig::default();
    if let Some(path) = &config_file {
        match SimFile::load(path) {
            Ok(file) => file.apply(&mut config),
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        }
    }
    if let Some(v) = rounds {
        config.rounds = v;
    }
    if let Some(v) = fairness {
        config.fairness = v;
    }
    if let Some(v) = slots {
        config.num_slots = v;
    }
    if let Some(v) = seed {
        config.seed = Some(v);
    }
    config.verbose = !quiet;

    println!(
        "=== Run: {} slots, {} rounds, fairness {} ===",
        config.num_slots, config.rounds, config.fairness
    );
    println!();

    let runner = RoundRunner::new(config.clone());
    let summary = match runner.run() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    summary.history.print_table();

    let name = format!(
        "{} slots, fairness {}",
        config.num_slots, config.fairness
    );
    let results = SimulationResults::new(&name, config, summary);
    results.print_report();

    let out_path = out.unwrap_or_else(|| "ladder_results.json".to_string());
    if let Err(e) = results.save(Path::new(&out_path)) {
        eprintln!("Warning: Failed to save results: {}", e);
    } else {
        println!("Saved results to {}", out_path);
    }
}

fn run_sweep(args: &[String]) {
    let mut rounds: u32 = 200;
    let mut trials: u32 = 10;
    let mut slots: usize = 10;
    let mut seed: Option<u64> = None;
    let mut fairness_values: Vec<u32> = vec![0, 10, 100, 1000, 10000];

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--rounds" | "-r" => {
                if i + 1 < args.len() {
                    rounds = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--trials" | "-t" => {
                if i + 1 < args.len() {
                    trials = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--slots" | "-s" => {
                if i + 1 < args.len() {
                    slots = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--fairness-values" => {
                if i + 1 < args.len() {
                    fairness_values = args[i + 1]
                        .split(',')
                        .filter_map(|v| v.trim().parse().ok())
                        .collect();
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if trials == 0 || fairness_values.is_empty() {
        eprintln!("Error: sweep needs at least one trial and one fairness value");
        return;
    }

    println!(
        "=== Fairness sweep: {} trials x {} rounds, {} slots ===",
        trials, rounds, slots
    );
    println!();
    println!(
        "{:>10} {:>16} {:>16} {:>18}",
        "Fairness", "Mean sortedness", "Sorted finishes", "Mean sorted round"
    );
    println!("{}", "-".repeat(64));

    for fairness in fairness_values {
        let mut total_sortedness = 0.0;
        let mut sorted_finishes = 0;
        let mut first_sorted_rounds = Vec::new();

        for trial in 0..trials {
            // Offset the seed so trials differ but the sweep stays reproducible
            let trial_seed = seed.map(|s| s + trial as u64);
            match quick_run(slots, rounds, fairness, trial_seed) {
                Ok(summary) => {
                    total_sortedness += summary.final_sortedness;
                    if summary.final_inversions == 0 {
                        sorted_finishes += 1;
                    }
                    if let Some(round) = summary.first_sorted_round() {
                        first_sorted_rounds.push(round);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return;
                }
            }
        }

        let mean_sortedness = total_sortedness / trials as f64;
        let mean_first = if first_sorted_rounds.is_empty() {
            "-".to_string()
        } else {
            format!(
                "{:.0}",
                first_sorted_rounds.iter().sum::<u32>() as f64 / first_sorted_rounds.len() as f64
            )
        };
        println!(
            "{:>10} {:>16.3} {:>13}/{:<2} {:>18}",
            fairness, mean_sortedness, sorted_finishes, trials, mean_first
        );
    }
    println!();
}

fn show_report(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: report requires a results file");
        print_usage();
        return;
    }

    match SimulationResults::load(Path::new(&args[0])) {
        Ok(results) => {
            results.print_report();
            results.summary.history.print_table();
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => run_sim(&args[2..]),
        "sweep" => run_sweep(&args[2..]),
        "report" => show_report(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
