// src/analysis/ranker.rs
//! Turns finished per-path statistics into the ranked report rows.
//!
//! Percentages are taken against totals over every path, before truncation,
//! so the kept rows show their share of the whole file.

use crate::types::{PathStats, ReportRow};

const DECIMALS: f64 = 1000.0;

/// Builds, sorts and truncates report rows.
///
/// Rows are ordered by `time_sum` descending, ties broken by path ascending.
#[must_use]
pub fn rank(stats: Vec<PathStats>, report_size: usize) -> Vec<ReportRow> {
    let total_count: usize = stats.iter().map(|s| s.request_count).sum();
    let total_time: f64 = stats.iter().map(|s| s.time_sum).sum();

    let mut rows: Vec<ReportRow> = stats
        .into_iter()
        .map(|s| build_row(s, total_count, total_time))
        .collect();

    rows.sort_by(|a, b| {
        b.time_sum
            .total_cmp(&a.time_sum)
            .then_with(|| a.path.cmp(&b.path))
    });
    rows.truncate(report_size);
    rows
}

#[allow(clippy::cast_precision_loss)]
fn build_row(stats: PathStats, total_count: usize, total_time: f64) -> ReportRow {
    let count = stats.request_count;
    let time_perc = if total_time > 0.0 {
        100.0 * stats.time_sum / total_time
    } else {
        0.0
    };
    ReportRow {
        count,
        count_perc: round(100.0 * count as f64 / total_count as f64),
        time_sum: round(stats.time_sum),
        time_perc: round(time_perc),
        time_avg: round(stats.time_sum / count as f64),
        time_max: round(stats.time_max),
        time_med: round(median(&stats.time_samples)),
        path: stats.path,
    }
}

/// Median of the samples; the mean of the two middle values for even lengths.
/// Zero for an empty slice.
#[must_use]
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn round(value: f64) -> f64 {
    (value * DECIMALS).round() / DECIMALS
}
