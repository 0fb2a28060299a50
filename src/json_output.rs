//! JSON output format for the analysis
//!
//! Dedicated serialization structs so the wire shape is explicit and
//! stable regardless of internal refactors. Optional statistics are
//! omitted, not nulled, when not applicable.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::classify::{ErrorTags, TaggedRecord};
use crate::record::NormalizeStats;
use crate::report::{Analysis, Report};

/// A processed record: original fields plus derived timing and tags
#[derive(Debug, Clone, Serialize)]
pub struct JsonRecord {
    /// Original input fields
    pub fields: BTreeMap<String, String>,
    pub created_secs: f32,
    pub updated_secs: f32,
    pub duration_secs: f32,
    pub tags: ErrorTags,
}

impl JsonRecord {
    fn from_tagged(record: &TaggedRecord) -> Self {
        Self {
            fields: record
                .record
                .raw
                .fields()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            created_secs: record.record.created_secs,
            updated_secs: record.record.updated_secs,
            duration_secs: record.record.duration_secs,
            tags: record.tags,
        }
    }
}

/// Records dropped during normalization, by cause
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JsonDropped {
    pub parse_failures: usize,
    pub negative_durations: usize,
}

impl From<NormalizeStats> for JsonDropped {
    fn from(stats: NormalizeStats) -> Self {
        Self {
            parse_failures: stats.parse_failures,
            negative_durations: stats.negative_durations,
        }
    }
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonAnalysis<'a> {
    pub report: &'a Report,
    pub dropped: JsonDropped,
    pub records: Vec<JsonRecord>,
}

impl<'a> JsonAnalysis<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            report: &analysis.report,
            dropped: analysis.normalize_stats.into(),
            records: analysis
                .records
                .iter()
                .map(JsonRecord::from_tagged)
                .collect(),
        }
    }

    /// Summary only, without the record sequence
    pub fn summary_only(analysis: &'a Analysis) -> Self {
        Self {
            report: &analysis.report,
            dropped: analysis.normalize_stats.into(),
            records: Vec::new(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
