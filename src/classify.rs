//! Error classification for normalized records
//!
//! Three independent error definitions coexist: status-based
//! (`status == "ERROR"`), timeout-based (duration over 300 s), and
//! their logical OR. Tags are computed once over the full normalized
//! set — before the completion filter runs — so every error rate uses
//! all valid records as its denominator.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::record::NormalizedRecord;

/// Status value that marks a record as a status error
pub const ERROR_STATUS: &str = "ERROR";

/// Duration above which a record counts as a timeout error (seconds)
pub const TIMEOUT_THRESHOLD_SECS: f32 = 300.0;

/// Per-record error tags; computed once, read-only thereafter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTags {
    pub status_error: bool,
    pub timeout_error: bool,
    /// Logical OR of the two predicates: a record satisfying both
    /// still counts once.
    pub combined_error: bool,
}

impl ErrorTags {
    pub fn classify(status: &str, duration_secs: f32) -> Self {
        let status_error = status == ERROR_STATUS;
        let timeout_error = duration_secs > TIMEOUT_THRESHOLD_SECS;
        Self {
            status_error,
            timeout_error,
            combined_error: status_error || timeout_error,
        }
    }
}

/// A normalized record with its error tags attached
#[derive(Debug, Clone)]
pub struct TaggedRecord {
    pub record: NormalizedRecord,
    pub tags: ErrorTags,
}

impl TaggedRecord {
    pub fn status(&self) -> &str {
        self.record.status()
    }

    pub fn duration_secs(&self) -> f32 {
        self.record.duration_secs
    }
}

/// Tag every normalized record. Consumes the normalized set and
/// produces a fresh collection; tags are never recomputed downstream.
pub fn tag_errors(records: Vec<NormalizedRecord>) -> Vec<TaggedRecord> {
    records
        .into_iter()
        .map(|record| {
            let tags = ErrorTags::classify(record.status(), record.duration_secs);
            TaggedRecord { record, tags }
        })
        .collect()
}

/// Which error definition is the headline success/error split
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Status equals "ERROR"
    Status,
    /// Duration exceeds the 300 s threshold
    Timeout,
    /// Either condition
    Combined,
}

impl ErrorMode {
    pub fn label(self) -> &'static str {
        match self {
            ErrorMode::Status => "Error (Status)",
            ErrorMode::Timeout => "Error (Timeout >5min)",
            ErrorMode::Combined => "Error (Combined)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{normalize, RawRecord};

    fn tagged(status: &str, created: &str, updated: &str) -> TaggedRecord {
        let raw = RawRecord::from_pairs([
            ("status", status),
            ("created", created),
            ("updated", updated),
        ]);
        let (normalized, _) = normalize(vec![raw]);
        tag_errors(normalized).remove(0)
    }

    #[test]
    fn test_status_error_only() {
        let t = tagged("ERROR", "0:00", "1:40").tags;
        assert!(t.status_error);
        assert!(!t.timeout_error);
        assert!(t.combined_error);
    }

    #[test]
    fn test_timeout_error_only() {
        let t = tagged("COMPLETED", "0:00", "5:10").tags;
        assert!(!t.status_error);
        assert!(t.timeout_error);
        assert!(t.combined_error);
    }

    #[test]
    fn test_both_conditions_count_once() {
        let t = tagged("ERROR", "0:00", "6:00").tags;
        assert!(t.status_error);
        assert!(t.timeout_error);
        assert!(t.combined_error);
    }

    #[test]
    fn test_no_error() {
        let t = tagged("COMPLETED", "0:00", "1:40").tags;
        assert_eq!(t, ErrorTags::default());
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        // exactly 300 s is not a timeout
        let t = tagged("COMPLETED", "0:00", "5:00").tags;
        assert!(!t.timeout_error);
    }

    #[test]
    fn test_status_match_is_exact() {
        assert!(!ErrorTags::classify("error", 10.0).status_error);
        assert!(!ErrorTags::classify("ERRORED", 10.0).status_error);
        assert!(ErrorTags::classify("ERROR", 10.0).status_error);
    }

    #[test]
    fn test_combined_le_sum_of_parts() {
        let batch = [
            ErrorTags::classify("ERROR", 400.0),
            ErrorTags::classify("ERROR", 10.0),
            ErrorTags::classify("COMPLETED", 400.0),
            ErrorTags::classify("COMPLETED", 10.0),
        ];
        let status: usize = batch.iter().filter(|t| t.status_error).count();
        let timeout: usize = batch.iter().filter(|t| t.timeout_error).count();
        let combined: usize = batch.iter().filter(|t| t.combined_error).count();
        let both: usize = batch
            .iter()
            .filter(|t| t.status_error && t.timeout_error)
            .count();
        assert_eq!(combined, status + timeout - both);
        assert!(combined <= status + timeout);
    }

    #[test]
    fn test_error_mode_labels() {
        assert_eq!(ErrorMode::Status.label(), "Error (Status)");
        assert_eq!(ErrorMode::Timeout.label(), "Error (Timeout >5min)");
        assert_eq!(ErrorMode::Combined.label(), "Error (Combined)");
    }
}
