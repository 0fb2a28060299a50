//! Raw and normalized job records
//!
//! Normalization derives the numeric timing fields from the raw
//! `created`/`updated` text and discards records the rest of the
//! pipeline cannot use: either timestamp unparseable, or a negative
//! derived duration (a data-quality signal, dropped rather than
//! clamped). Drop counts are kept per cause so a caller can see why
//! records disappeared.

use tracing::debug;

use crate::duration::parse_mm_ss;

/// Field names the analyzer consumes from each record
pub const STATUS_FIELD: &str = "status";
pub const CREATED_FIELD: &str = "created";
pub const UPDATED_FIELD: &str = "updated";

/// A raw input record: ordered field-name → text mapping, exactly as
/// the ingestion boundary produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from (name, value) pairs; test and ingestion helper.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Fields in their original column order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn status(&self) -> &str {
        self.get(STATUS_FIELD).unwrap_or("")
    }
}

/// A record that survived normalization, carrying its derived timing
/// fields. Invariant: `duration_secs >= 0`.
#[derive(Debug, Clone)]
pub struct NormalizedRecord {
    pub raw: RawRecord,
    pub created_secs: f32,
    pub updated_secs: f32,
    pub duration_secs: f32,
}

impl NormalizedRecord {
    pub fn status(&self) -> &str {
        self.raw.status()
    }
}

/// Per-cause counts of records dropped during normalization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Records with an unparseable `created` or `updated` timestamp
    pub parse_failures: usize,
    /// Records whose derived duration was negative
    pub negative_durations: usize,
}

impl NormalizeStats {
    pub fn total_dropped(&self) -> usize {
        self.parse_failures + self.negative_durations
    }
}

/// Normalize a batch: derive seconds fields, drop unusable records.
///
/// Consumes the raw batch and produces a fresh collection; no partial
/// record survives into the output.
pub fn normalize(records: Vec<RawRecord>) -> (Vec<NormalizedRecord>, NormalizeStats) {
    let mut stats = NormalizeStats::default();
    let mut normalized = Vec::with_capacity(records.len());

    for raw in records {
        let created = raw.get(CREATED_FIELD).unwrap_or("");
        let updated = raw.get(UPDATED_FIELD).unwrap_or("");

        let (created_secs, updated_secs) = match (parse_mm_ss(created), parse_mm_ss(updated)) {
            (Ok(c), Ok(u)) => (c, u),
            (created_res, updated_res) => {
                debug!(
                    ?created_res,
                    ?updated_res,
                    status = raw.status(),
                    "dropping record with unparseable timestamp"
                );
                stats.parse_failures += 1;
                continue;
            }
        };

        let duration_secs = updated_secs - created_secs;
        if duration_secs < 0.0 {
            debug!(
                created_secs,
                updated_secs,
                status = raw.status(),
                "dropping record with negative duration"
            );
            stats.negative_durations += 1;
            continue;
        }

        normalized.push(NormalizedRecord {
            raw,
            created_secs,
            updated_secs,
            duration_secs,
        });
    }

    (normalized, stats)
}
