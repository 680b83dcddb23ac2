//! Transaction-level co-simulator CLI.
//!
//! This binary is the reporting surface over `cosim-core`: it loads a scenario
//! and configuration, runs the simulator, and renders the verification report.
//! 1. **Default run:** Execute the built-in reference scenario.
//! 2. **Custom run:** Load a scenario and/or latency configuration from JSON.
//! 3. **JSON output:** Emit the report as JSON for downstream tooling.

use std::fs;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cosim_core::config::Config;
use cosim_core::initiator::Scenario;
use cosim_core::sim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "cosim",
    version,
    about = "Transaction-level hardware/software co-simulator",
    long_about = "Run a verification scenario against the simulated hardware target.\n\nWithout arguments, `cosim run` executes the built-in ten-transaction reference\nscenario with default latencies.\n\nExamples:\n  cosim run\n  cosim run --scenario scenarios/smoke.json --json\n  cosim run --config latency.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scenario and print the verification report.
    Run {
        /// Scenario file (JSON array of transaction records); defaults to the
        /// built-in reference scenario.
        #[arg(short, long)]
        scenario: Option<String>,

        /// Configuration file (JSON); defaults to the built-in latency table.
        #[arg(short, long)]
        config: Option<String>,

        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            scenario,
            config,
            json,
        } => cmd_run(scenario.as_deref(), config.as_deref(), json),
    }
}

fn cmd_run(scenario_path: Option<&str>, config_path: Option<&str>, json: bool) -> ExitCode {
    let scenario = match scenario_path.map(load_scenario).transpose() {
        Ok(s) => s.unwrap_or_else(Scenario::reference),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = match config_path.map(load_config).transpose() {
        Ok(c) => c.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut sim = Simulator::new(scenario, &config);
    let report = match sim.run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: run aborted: {e}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(doc) => println!("{doc}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn load_scenario(path: &str) -> Result<Scenario, String> {
    let doc = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    Scenario::from_json(&doc).map_err(|e| format!("{path}: {e}"))
}

fn load_config(path: &str) -> Result<Config, String> {
    let doc = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    Config::from_json(&doc).map_err(|e| format!("{path}: {e}"))
}
