//! Integration tests for the perturbation sweep table

use tac_analytics::flight::{perturbation_band, render_table, SWEEP_STEPS, UPPER_BOUNDS};

#[test]
fn test_table_shape() {
    let table = render_table();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "t;ub=-10;ub=-5;ub=0;ub=5;ub=10;ub=15;ub=20;ub=25;ub=30;");
    assert_eq!(lines.len() as u32, SWEEP_STEPS + 2);

    for line in &lines[1..] {
        assert!(line.ends_with(';'));
        assert_eq!(line.matches(';').count(), UPPER_BOUNDS.len() + 1);
    }
}

#[test]
fn test_cells_match_band_widths() {
    let table = render_table();
    for (row, line) in table.lines().skip(1).enumerate() {
        let t = row as f64 / SWEEP_STEPS as f64;
        let cells: Vec<f64> = line
            .split(';')
            .skip(1)
            .take(UPPER_BOUNDS.len())
            .map(|cell| cell.parse().unwrap())
            .collect();
        for (col, ub) in UPPER_BOUNDS.iter().enumerate() {
            assert_eq!(cells[col], perturbation_band(t, *ub).width());
        }
    }
}

#[test]
fn test_open_row_independent_of_upper_bound() {
    let table = render_table();
    let open_row = table.lines().nth(1).unwrap();
    let cells: Vec<&str> = open_row.split(';').skip(1).take(9).collect();
    assert!(cells.iter().all(|cell| *cell == "20.0"));
}

#[test]
fn test_close_row_spans_bound_range() {
    let table = render_table();
    let close_row = table.lines().last().unwrap();
    let cells: Vec<f64> = close_row
        .split(';')
        .skip(1)
        .take(9)
        .map(|cell| cell.parse().unwrap())
        .collect();
    assert_eq!(cells[0], 20.0); // ub = -10: band (-10, 10)
    assert_eq!(cells[8], 40.0); // ub = 30: band (-10, 30)
}
