//! Pipeline orchestration and report assembly
//!
//! `analyze` runs the whole batch pipeline: normalize, tag errors,
//! filter to the completed subset, compute statistics, derive the
//! stability verdict and the Little's Law estimate, and package
//! everything into an immutable [`Report`]. Each stage consumes the
//! previous stage's output and produces a fresh collection; nothing is
//! recomputed after a later stage has read it.
//!
//! Per-record problems (unparseable timestamps, negative durations)
//! and per-statistic degeneracy (empty completed subset, zero mean)
//! stay inside a successful report as drop counts and `None` markers.
//! Only batch-level problems — empty input, no valid records, a bad
//! arrival rate — fail the run.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::classify::{tag_errors, ErrorMode, TaggedRecord, TIMEOUT_THRESHOLD_SECS};
use crate::filter::{completed_subset, ExclusionPreset};
use crate::queueing::littles_law;
use crate::record::{normalize, NormalizeStats, RawRecord};
use crate::stability::Stability;
use crate::stats::DurationStats;

/// Errors that fail the whole run
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("input batch is empty")]
    EmptyBatch,

    #[error("no valid records after normalization ({parse_failures} timestamp parse failures, {negative_durations} negative durations)")]
    NoValidRecords {
        parse_failures: usize,
        negative_durations: usize,
    },

    #[error("arrival rate must be a finite value >= 0 req/s, got {0}")]
    InvalidArrivalRate(f32),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// One run's configuration
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Arrival rate λ in requests per second for the Little's Law estimate
    pub arrival_rate: f32,
    /// Statuses excluded from the completed subset
    pub preset: ExclusionPreset,
    /// Which error definition is the headline split
    pub error_mode: ErrorMode,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            arrival_rate: 0.0,
            preset: ExclusionPreset::default(),
            error_mode: ErrorMode::Combined,
        }
    }
}

/// Error counts and rates over all valid records
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ErrorRates {
    pub status_count: usize,
    pub status_rate_pct: f32,
    pub timeout_count: usize,
    pub timeout_rate_pct: f32,
    pub combined_count: usize,
    pub combined_rate_pct: f32,
}

impl ErrorRates {
    /// Count for the configured headline error mode
    pub fn count_for(&self, mode: ErrorMode) -> usize {
        match mode {
            ErrorMode::Status => self.status_count,
            ErrorMode::Timeout => self.timeout_count,
            ErrorMode::Combined => self.combined_count,
        }
    }

    pub fn rate_pct_for(&self, mode: ErrorMode) -> f32 {
        match mode {
            ErrorMode::Status => self.status_rate_pct,
            ErrorMode::Timeout => self.timeout_rate_pct,
            ErrorMode::Combined => self.combined_rate_pct,
        }
    }
}

/// The assembled performance report; immutable after creation
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Valid records after normalization (every percentage denominator)
    pub total_valid: usize,
    pub completed: usize,
    pub completed_pct: f32,
    pub errors: ErrorRates,
    pub error_mode: ErrorMode,
    /// Completed-subset records over the 300 s threshold (distinct
    /// from `errors.timeout_count`, which ranges over all valid records)
    pub completed_exceeding_timeout: usize,
    pub exclusion_preset: ExclusionPreset,
    pub arrival_rate: f32,
    /// Absent when the completed subset is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DurationStats>,
    pub stability: Stability,
    /// L = λ × W; absent when the mean duration is not applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub littles_law: Option<f32>,
}

/// A completed run: the report plus the cleaned/annotated records and
/// the normalization drop counts, for the rendering/export boundary.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: Report,
    pub records: Vec<TaggedRecord>,
    pub normalize_stats: NormalizeStats,
}

/// Run the full pipeline over one batch.
pub fn analyze(records: Vec<RawRecord>, config: &AnalyzerConfig) -> Result<Analysis> {
    if !config.arrival_rate.is_finite() || config.arrival_rate < 0.0 {
        return Err(AnalyzerError::InvalidArrivalRate(config.arrival_rate));
    }
    if records.is_empty() {
        return Err(AnalyzerError::EmptyBatch);
    }

    let (normalized, normalize_stats) = normalize(records);
    if normalized.is_empty() {
        return Err(AnalyzerError::NoValidRecords {
            parse_failures: normalize_stats.parse_failures,
            negative_durations: normalize_stats.negative_durations,
        });
    }

    // Classification runs on the full valid set, before filtering, so
    // error rates are denominators over all valid records.
    let tagged = tag_errors(normalized);
    let total_valid = tagged.len();
    let errors = count_errors(&tagged, total_valid);

    let completed = completed_subset(&tagged, config.preset);
    let durations: Vec<f32> = completed.iter().map(|r| r.duration_secs()).collect();
    let completed_exceeding_timeout = durations
        .iter()
        .filter(|d| **d > TIMEOUT_THRESHOLD_SECS)
        .count();

    debug!(
        total_valid,
        completed = completed.len(),
        dropped = normalize_stats.total_dropped(),
        "batch normalized and filtered"
    );

    let stats = DurationStats::from_durations(&durations);
    let stability = Stability::from_cv(stats.as_ref().and_then(|s| s.cv));
    let littles_law = littles_law(config.arrival_rate, stats.as_ref().map(|s| s.mean_secs));

    let report = Report {
        total_valid,
        completed: completed.len(),
        completed_pct: percentage(completed.len(), total_valid),
        errors,
        error_mode: config.error_mode,
        completed_exceeding_timeout,
        exclusion_preset: config.preset,
        arrival_rate: config.arrival_rate,
        stats,
        stability,
        littles_law,
    };

    Ok(Analysis {
        report,
        records: tagged,
        normalize_stats,
    })
}

fn count_errors(records: &[TaggedRecord], total_valid: usize) -> ErrorRates {
    let status_count = records.iter().filter(|r| r.tags.status_error).count();
    let timeout_count = records.iter().filter(|r| r.tags.timeout_error).count();
    let combined_count = records.iter().filter(|r| r.tags.combined_error).count();
    ErrorRates {
        status_count,
        status_rate_pct: percentage(status_count, total_valid),
        timeout_count,
        timeout_rate_pct: percentage(timeout_count, total_valid),
        combined_count,
        combined_rate_pct: percentage(combined_count, total_valid),
    }
}

fn percentage(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        0.0
    } else {
        (part as f32 / whole as f32) * 100.0
    }
}
