//! CLI argument parsing for Medir

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::classify::ErrorMode;
use crate::filter::ExclusionPreset;

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console summary (default)
    Text,
    /// JSON for machine parsing
    Json,
    /// CSV summary and processed-records sheets
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "medir")]
#[command(version)]
#[command(about = "Batch performance report analyzer for job lifecycle records", long_about = None)]
pub struct Cli {
    /// Input CSV file with status, created and updated columns
    pub input: PathBuf,

    /// Arrival rate λ in requests per second for the Little's Law estimate
    #[arg(
        short = 'r',
        long = "arrival-rate",
        value_name = "RATE",
        default_value = "0.0"
    )]
    pub arrival_rate: f32,

    /// Statuses excluded from the completed subset
    #[arg(long = "exclude", value_enum, default_value = "stability")]
    pub exclude: ExclusionPreset,

    /// Which error definition is the headline success/error split
    #[arg(long = "error-mode", value_enum, default_value = "combined")]
    pub error_mode: ErrorMode,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print only the summary, not the processed records
    #[arg(long = "summary-only")]
    pub summary_only: bool,
}
