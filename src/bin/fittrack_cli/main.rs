// ABOUTME: Fittrack CLI - derived fitness metrics from exported profile and log records
// ABOUTME: Computes BMI, trend classification and aggregates, printing JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # BMI from measurements
//! fittrack-cli bmi --weight 70 --height 175 --age 34 --sex female
//!
//! # BMI from an exported profile row
//! fittrack-cli bmi --profile profile.json
//!
//! # Trend per exercise, newest entry against the previous one
//! fittrack-cli trend exercises --input exercises.json
//!
//! # Running trend against the mean of the last 5 runs
//! fittrack-cli trend runs --input runs.json --window 5
//!
//! # Training volume and per-exercise rollups for the last 30 days
//! fittrack-cli aggregate exercises --input exercises.json --days 30
//!
//! # Running summary read from stdin
//! cat runs.json | fittrack-cli aggregate runs --input -
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use fittrack::{
    aggregation::VolumePolicy, config::IntelligenceConfig, errors::AppResult,
    logging::LoggingConfig, models::BiologicalSex, sample_metrics::Metric,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "Fittrack derived fitness metrics",
    long_about = "Compute BMI, trends and aggregates from exported profile, exercise and run records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON configuration file (defaults plus FITTRACK_* environment when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Derive BMI, category, advisory text and healthy weight range
    Bmi {
        /// Body weight in kilograms
        #[arg(long, required_unless_present = "profile")]
        weight: Option<f64>,

        /// Height in centimeters
        #[arg(long, required_unless_present = "profile")]
        height: Option<f64>,

        /// Age in years
        #[arg(long)]
        age: Option<u32>,

        /// Biological sex (male, female)
        #[arg(long)]
        sex: Option<BiologicalSex>,

        /// Read a single profile record from a JSON file instead
        #[arg(long, conflicts_with_all = ["weight", "height", "age", "sex"])]
        profile: Option<PathBuf>,
    },

    /// Classify the newest entry against earlier ones
    Trend {
        #[command(subcommand)]
        action: TrendCommand,
    },

    /// Summarize logged entries
    Aggregate {
        #[command(subcommand)]
        action: AggregateCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TrendCommand {
    /// Trend per exercise name
    Exercises {
        /// JSON array of exercise records, `-` for stdin
        #[arg(long)]
        input: PathBuf,

        /// Only analyze this exercise
        #[arg(long)]
        exercise: Option<String>,

        /// Metrics to compare (defaults to the configured exercise metrics)
        #[arg(long, value_delimiter = ',')]
        metrics: Vec<Metric>,

        /// Compare against the mean of N earlier entries (configured N when bare)
        #[arg(long, num_args = 0..=1)]
        window: Option<Option<usize>>,
    },

    /// Trend across runs
    Runs {
        /// JSON array of run records, `-` for stdin
        #[arg(long)]
        input: PathBuf,

        /// Metrics to compare (defaults to the configured run metrics)
        #[arg(long, value_delimiter = ',')]
        metrics: Vec<Metric>,

        /// Compare against the mean of N earlier runs (configured N when bare)
        #[arg(long, num_args = 0..=1)]
        window: Option<Option<usize>>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AggregateCommand {
    /// Training volume and per-exercise rollups
    Exercises {
        /// JSON array of exercise records, `-` for stdin
        #[arg(long)]
        input: PathBuf,

        /// Only include this exercise
        #[arg(long)]
        exercise: Option<String>,

        /// Only include entries from the last N days (defaults to the configured window)
        #[arg(long, conflicts_with = "all")]
        days: Option<u32>,

        /// Include every entry regardless of age
        #[arg(long)]
        all: bool,

        /// Override the configured volume policy
        #[arg(long)]
        volume_policy: Option<VolumePolicy>,

        /// Additional metric to summarize
        #[arg(long)]
        metric: Option<Metric>,
    },

    /// Distance, duration and pace summary
    Runs {
        /// JSON array of run records, `-` for stdin
        #[arg(long)]
        input: PathBuf,

        /// Only include runs from the last N days (defaults to the configured window)
        #[arg(long, conflicts_with = "all")]
        days: Option<u32>,

        /// Include every run regardless of age
        #[arg(long)]
        all: bool,

        /// Additional metric to summarize
        #[arg(long)]
        metric: Option<Metric>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<IntelligenceConfig> {
    let config = match path {
        Some(path) => IntelligenceConfig::from_json_file(path)?,
        None => IntelligenceConfig::load()?,
    };
    debug!(?config, "Loaded intelligence configuration");
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Bmi {
            weight,
            height,
            age,
            sex,
            profile,
        } => commands::bmi::derive(&config, weight, height, age, sex, profile.as_deref()),
        Command::Trend { action } => match action {
            TrendCommand::Exercises {
                input,
                exercise,
                metrics,
                window,
            } => commands::trend::exercises(&config, &input, exercise.as_deref(), &metrics, window),
            TrendCommand::Runs {
                input,
                metrics,
                window,
            } => commands::trend::runs(&config, &input, &metrics, window),
        },
        Command::Aggregate { action } => match action {
            AggregateCommand::Exercises {
                input,
                exercise,
                days,
                all,
                volume_policy,
                metric,
            } => {
                let filter = commands::aggregate::window_filter(&config, exercise, days, all);
                commands::aggregate::exercises(&config, &input, &filter, volume_policy, metric)
            }
            AggregateCommand::Runs {
                input,
                days,
                all,
                metric,
            } => {
                let filter = commands::aggregate::window_filter(&config, None, days, all);
                commands::aggregate::runs(&input, &filter, metric)
            }
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            helpers::output::print_error(e);
            ExitCode::FAILURE
        }
    }
}
