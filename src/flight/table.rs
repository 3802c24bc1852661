//! Perturbation sweep table rendering
//!
//! One semicolon-terminated row per sampled `t`, one column per upper bound.
//! Every field keeps its trailing semicolon, matching the classic sweep
//! output.

use super::{perturbation_band, SWEEP_STEPS, UPPER_BOUNDS};
use crate::render::float_cell;
use std::fmt::Write;

/// Render the full sweep: a header row plus one row per `t` in
/// 0.000..=1.000, each cell the band width for that column's upper bound.
pub fn render_table() -> String {
    let mut out = String::new();

    out.push('t');
    out.push(';');
    for upper_bound in UPPER_BOUNDS {
        let _ = write!(out, "ub={};", upper_bound);
    }
    out.push('\n');

    for step in 0..=SWEEP_STEPS {
        let t = step as f64 / SWEEP_STEPS as f64;
        let _ = write!(out, "{};", float_cell(t));
        for upper_bound in UPPER_BOUNDS {
            let width = perturbation_band(t, upper_bound).width();
            let _ = write!(out, "{};", float_cell(width));
        }
        out.push('\n');
    }

    out
}
