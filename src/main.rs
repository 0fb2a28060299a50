use anyhow::Result;
use clap::Parser;
use medir::cli::{Cli, OutputFormat};
use medir::report::{analyze, Analysis, AnalyzerConfig, Report};
use medir::{csv_input, csv_output, duration, json_output};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; verbosity via RUST_LOG
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Print the console summary, mirroring the summary sheet
fn print_summary(report: &Report) {
    println!("Total Requests: {}", report.total_valid);
    println!("Completed Requests: {}", report.completed);
    println!("Completed Requests %: {:.2}%", report.completed_pct);
    println!(
        "Error Rate (Status): {} → {:.2}%",
        report.errors.status_count, report.errors.status_rate_pct
    );
    println!(
        "Error Rate (Timeout > 5min): {} → {:.2}%",
        report.errors.timeout_count, report.errors.timeout_rate_pct
    );
    println!(
        "Error Rate (Combined): {} → {:.2}%",
        report.errors.combined_count, report.errors.combined_rate_pct
    );
    println!(
        "Headline {}: {} → {:.2}%",
        report.error_mode.label(),
        report.errors.count_for(report.error_mode),
        report.errors.rate_pct_for(report.error_mode)
    );
    println!("Requests > 300s: {}", report.completed_exceeding_timeout);

    match &report.stats {
        Some(stats) => {
            println!("Average Response Time (seconds): {:.2}", stats.mean_secs);
            println!(
                "Average Response Time (MM:SS.s): {}",
                duration::format_mm_ss(stats.mean_secs)
            );
            println!("Variance (σ²): {:.2}", stats.variance);
            println!("Standard Deviation (σ): {:.2}", stats.stddev);
            match stats.cv {
                Some(cv) => println!("Coefficient of Variation (CV): {:.3}", cv),
                None => println!("Coefficient of Variation (CV): N/A"),
            }
        }
        None => {
            println!("Average Response Time (seconds): N/A");
            println!("Variance (σ²): N/A");
            println!("Standard Deviation (σ): N/A");
            println!("Coefficient of Variation (CV): N/A");
        }
    }
    println!("System Stability: {}", report.stability);
    match report.littles_law {
        Some(l) => println!("Little's Law (L = λ × W): {:.2}", l),
        None => println!("Little's Law (L = λ × W): N/A"),
    }

    if let Some(stats) = &report.stats {
        println!();
        println!("Job Process Time Percentiles (Completed Requests):");
        for p in &stats.percentiles {
            println!("  {:>4}: {:.2}s", p.label, p.value);
        }
    }
}

fn render(analysis: &Analysis, format: OutputFormat, summary_only: bool) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_summary(&analysis.report);
            let dropped = analysis.normalize_stats;
            if dropped.total_dropped() > 0 {
                eprintln!(
                    "Dropped {} invalid record(s): {} timestamp parse failure(s), {} negative duration(s)",
                    dropped.total_dropped(),
                    dropped.parse_failures,
                    dropped.negative_durations
                );
            }
        }
        OutputFormat::Json => {
            let json = if summary_only {
                json_output::JsonAnalysis::summary_only(analysis)
            } else {
                json_output::JsonAnalysis::new(analysis)
            };
            println!("{}", json.to_json_pretty()?);
        }
        OutputFormat::Csv => {
            print!("{}", csv_output::summary_csv(&analysis.report));
            if !summary_only {
                println!();
                print!("{}", csv_output::records_csv(&analysis.records));
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let records = csv_input::read_csv_file(&cli.input)?;
    let config = AnalyzerConfig {
        arrival_rate: cli.arrival_rate,
        preset: cli.exclude,
        error_mode: cli.error_mode,
    };
    let analysis = analyze(records, &config)?;
    render(&analysis, cli.format, cli.summary_only)
}
