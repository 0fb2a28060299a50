//! Property-based tests for the analyzer core
//!
//! Covers the duration parser contract, percentile behavior, the
//! combined-error identity, and the no-panic guarantee across the
//! analyze boundary.

use proptest::prelude::*;

use medir::classify::ErrorTags;
use medir::duration::parse_mm_ss;
use medir::record::RawRecord;
use medir::report::{analyze, AnalyzerConfig};
use medir::stats::{percentile_of_sorted, DurationStats};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_parse_valid_mm_ss(minutes in 0u32..1000, seconds in 0u32..60) {
        // Property: parse("M:S") == M*60 + S for all valid inputs
        let parsed = parse_mm_ss(&format!("{minutes}:{seconds}")).unwrap();
        let expected = (minutes * 60 + seconds) as f32;
        prop_assert!((parsed - expected).abs() < 1e-3);
    }

    #[test]
    fn prop_parse_without_colon_fails(text in "[^:]*") {
        prop_assert!(parse_mm_ss(&text).is_err());
    }

    #[test]
    fn prop_parse_never_panics(text in ".*") {
        // Property: arbitrary input is Ok or Err, never a panic
        let _ = parse_mm_ss(&text);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_percentile_within_data_range(
        mut durations in prop::collection::vec(0.0f32..10_000.0, 1..200),
        percentile in 0.0f32..=100.0,
    ) {
        durations.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let value = percentile_of_sorted(&durations, percentile);
        prop_assert!(value >= durations[0] - 1e-3);
        prop_assert!(value <= durations[durations.len() - 1] + 1e-3);
    }

    #[test]
    fn prop_percentile_ladder_monotonic(
        durations in prop::collection::vec(0.0f32..10_000.0, 1..200),
    ) {
        let stats = DurationStats::from_durations(&durations).unwrap();
        for pair in stats.percentiles.windows(2) {
            prop_assert!(pair[0].value <= pair[1].value);
        }
    }

    #[test]
    fn prop_population_variance_nonnegative(
        durations in prop::collection::vec(0.0f32..10_000.0, 1..200),
    ) {
        let stats = DurationStats::from_durations(&durations).unwrap();
        prop_assert!(stats.variance >= 0.0);
        prop_assert!(stats.stddev >= 0.0);
        prop_assert!(stats.min_secs <= stats.mean_secs + 1e-2);
        prop_assert!(stats.mean_secs <= stats.max_secs + 1e-2);
    }

    #[test]
    fn prop_combined_error_identity(
        records in prop::collection::vec(
            (prop::sample::select(vec!["COMPLETED", "ERROR", "IN_PROGRESS", "ACCEPTED"]),
             0.0f32..600.0),
            1..100,
        ),
    ) {
        let tags: Vec<ErrorTags> = records
            .iter()
            .map(|&(status, duration)| ErrorTags::classify(status, duration))
            .collect();
        let status = tags.iter().filter(|t| t.status_error).count();
        let timeout = tags.iter().filter(|t| t.timeout_error).count();
        let combined = tags.iter().filter(|t| t.combined_error).count();
        let both = tags
            .iter()
            .filter(|t| t.status_error && t.timeout_error)
            .count();
        prop_assert_eq!(combined, status + timeout - both);
    }

    #[test]
    fn prop_analyze_never_panics(
        rows in prop::collection::vec((".{0,12}", ".{0,8}", ".{0,8}"), 0..40),
        arrival_rate in 0.0f32..100.0,
    ) {
        // Property: arbitrary record text yields a Report or a typed
        // error, never a panic crossing the boundary
        let batch: Vec<RawRecord> = rows
            .iter()
            .map(|(status, created, updated)| {
                RawRecord::from_pairs([
                    ("status", status.as_str()),
                    ("created", created.as_str()),
                    ("updated", updated.as_str()),
                ])
            })
            .collect();
        let config = AnalyzerConfig { arrival_rate, ..Default::default() };
        let _ = analyze(batch, &config);
    }
}
