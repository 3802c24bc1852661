//! Float-to-text rendering shared by the report and table writers.

/// Format an `f64` the way the original reports stringify floats: shortest
/// round-trip decimal, keeping a trailing `.0` on whole values so a float
/// column never collapses into an integer one (`20` vs `20.0`).
pub fn float_cell(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{s}.0")
    }
}
