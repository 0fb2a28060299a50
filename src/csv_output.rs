//! CSV output for the report and the processed records
//!
//! Two "sheets" as CSV text: a metric/value summary and the processed
//! records with their derived timing fields and error tags. Pure
//! formatting; everything here was computed upstream.

use crate::classify::TaggedRecord;
use crate::report::Report;

/// Escape a CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row(output: &mut String, metric: &str, value: &str) {
    output.push_str(&escape_field(metric));
    output.push(',');
    output.push_str(&escape_field(value));
    output.push('\n');
}

fn fmt_opt(value: Option<f32>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "N/A".to_string(),
    }
}

/// Render the summary sheet: one metric,value row per report figure.
pub fn summary_csv(report: &Report) -> String {
    let mut out = String::from("Metric,Value\n");
    push_row(&mut out, "Total Requests", &report.total_valid.to_string());
    push_row(&mut out, "Completed Requests", &report.completed.to_string());
    push_row(
        &mut out,
        "Completed Requests (%)",
        &format!("{:.2}%", report.completed_pct),
    );
    push_row(
        &mut out,
        "Error Requests (Status)",
        &report.errors.status_count.to_string(),
    );
    push_row(
        &mut out,
        "Error Rate (Status) (%)",
        &format!("{:.2}%", report.errors.status_rate_pct),
    );
    push_row(
        &mut out,
        "Error Requests (Timeout >5min)",
        &report.errors.timeout_count.to_string(),
    );
    push_row(
        &mut out,
        "Error Rate (Timeout) (%)",
        &format!("{:.2}%", report.errors.timeout_rate_pct),
    );
    push_row(
        &mut out,
        "Error Requests (Combined)",
        &report.errors.combined_count.to_string(),
    );
    push_row(
        &mut out,
        "Error Rate (Combined) (%)",
        &format!("{:.2}%", report.errors.combined_rate_pct),
    );
    push_row(
        &mut out,
        "Requests > 300s",
        &report.completed_exceeding_timeout.to_string(),
    );
    let stats = report.stats.as_ref();
    push_row(
        &mut out,
        "Average Response Time (s)",
        &fmt_opt(stats.map(|s| s.mean_secs), 2),
    );
    push_row(
        &mut out,
        "Variance (σ²)",
        &fmt_opt(stats.map(|s| s.variance), 2),
    );
    push_row(
        &mut out,
        "Standard Deviation (σ)",
        &fmt_opt(stats.map(|s| s.stddev), 2),
    );
    push_row(
        &mut out,
        "Coefficient of Variation (CV)",
        &fmt_opt(stats.and_then(|s| s.cv), 3),
    );
    push_row(&mut out, "System Stability", report.stability.as_str());
    push_row(
        &mut out,
        "Little's Law (L = λ × W)",
        &fmt_opt(report.littles_law, 2),
    );
    if let Some(stats) = stats {
        for p in &stats.percentiles {
            push_row(
                &mut out,
                &format!("Percentile ({})", p.label),
                &format!("{:.2}", p.value),
            );
        }
    }
    out
}

/// Render the processed-records sheet: original fields in their column
/// order, then the derived seconds fields and error tags.
pub fn records_csv(records: &[TaggedRecord]) -> String {
    let mut out = String::new();

    let original_columns: Vec<String> = records
        .first()
        .map(|r| {
            r.record
                .raw
                .fields()
                .map(|(name, _)| name.to_string())
                .collect()
        })
        .unwrap_or_default();

    let mut headers: Vec<String> = original_columns.clone();
    headers.extend(
        [
            "created_secs",
            "updated_secs",
            "duration_secs",
            "status_error",
            "timeout_error",
            "combined_error",
        ]
        .map(String::from),
    );
    out.push_str(
        &headers
            .iter()
            .map(|h| escape_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push('\n');

    for record in records {
        let mut fields: Vec<String> = original_columns
            .iter()
            .map(|name| escape_field(record.record.raw.get(name).unwrap_or("")))
            .collect();
        fields.push(format!("{:.2}", record.record.created_secs));
        fields.push(format!("{:.2}", record.record.updated_secs));
        fields.push(format!("{:.2}", record.record.duration_secs));
        fields.push(record.tags.status_error.to_string());
        fields.push(record.tags.timeout_error.to_string());
        fields.push(record.tags.combined_error.to_string());
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}
