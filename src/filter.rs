//! Completion filtering for timing statistics
//!
//! The statistics engine only sees records that actually finished.
//! Which statuses disqualify a record is a preset: the stricter
//! default also drops ERROR records so latency figures are not
//! polluted by failure paths, while the duration-only preset keeps
//! them for pure duration studies.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::classify::TaggedRecord;

/// Which statuses are excluded from the completed subset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionPreset {
    /// Exclude only in-flight records: {IN_PROGRESS, ACCEPTED}
    DurationOnly,
    /// Also exclude failures: {IN_PROGRESS, ACCEPTED, ERROR}
    #[default]
    Stability,
}

impl ExclusionPreset {
    pub fn excluded_statuses(self) -> &'static [&'static str] {
        match self {
            ExclusionPreset::DurationOnly => &["IN_PROGRESS", "ACCEPTED"],
            ExclusionPreset::Stability => &["IN_PROGRESS", "ACCEPTED", "ERROR"],
        }
    }

    /// Unknown statuses count as completed; only listed statuses are excluded.
    pub fn is_completed(self, status: &str) -> bool {
        !self.excluded_statuses().contains(&status)
    }
}

/// Produce the completed subset as a fresh collection. Error tags on
/// the input were computed over the full set and are carried along
/// unchanged.
pub fn completed_subset(records: &[TaggedRecord], preset: ExclusionPreset) -> Vec<TaggedRecord> {
    records
        .iter()
        .filter(|r| preset.is_completed(r.status()))
        .cloned()
        .collect()
}
