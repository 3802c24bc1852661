//! Stay-duration report rendering
//!
//! Produces the classic tabulator layout: a header, one space-separated row
//! per distinct duration in first-seen order, and a grand total line.

use super::{DurationHistogram, CLIENTS_PER_AGENT};
use crate::render::float_cell;
use std::fmt::Write;

/// Render the duration distribution as a plain-text report.
///
/// Each row carries the duration, its count, the share of all windows as a
/// percentage, and the expected number of guests on that duration assuming
/// [`CLIENTS_PER_AGENT`] clients.
pub fn render_report(histogram: &DurationHistogram) -> String {
    let total = histogram.total();
    let mut out = String::new();

    out.push_str("Day, Cnt, Possibility, Average Guests\n");
    for (duration, count) in histogram.iter() {
        let possibility = count as f64 * 100.0 / total as f64;
        let avg_guests = count as f64 * CLIENTS_PER_AGENT / total as f64;
        let _ = writeln!(
            out,
            "{} {} {} {}",
            duration,
            count,
            float_cell(possibility),
            float_cell(avg_guests)
        );
    }
    let _ = writeln!(out, "Total: {}", total);

    out
}
