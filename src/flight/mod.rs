//! Flight price perturbation model
//!
//! Flight quotes in the classic game drift by a random step drawn from a
//! band that tightens around a hidden linear trend. The trend starts at 10
//! and interpolates toward a per-auction upper bound as game time elapses.
//! This module computes the band and its width for any point in the game.

pub mod table;

pub use table::render_table;

/// Trend upper bounds swept by the `flight-sweep` binary, in column order.
/// The auction draws its bound uniformly from [-10, 30]; the sweep samples
/// the range at 5-unit spacing.
pub const UPPER_BOUNDS: [i32; 9] = [-10, -5, 0, 5, 10, 15, 20, 25, 30];

/// Number of steps the sweep divides game time into (inclusive of both ends,
/// so 1001 sampled values of `t`).
pub const SWEEP_STEPS: u32 = 1000;

/// Bounds of the random price step at one point in the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbationBand {
    /// Lowest step the auction can draw
    pub low: f64,
    /// Highest step the auction can draw
    pub high: f64,
}

impl PerturbationBand {
    /// Width of the band; the magnitude the sweep tabulates
    pub fn width(&self) -> f64 {
        (self.low - self.high).abs()
    }
}

/// Hidden trend value at elapsed-time fraction `t` in [0, 1].
///
/// `x(t) = 10 + t * (upper_bound - 10)`: 10 at the open, the upper bound at
/// the close.
pub fn trend(t: f64, upper_bound: i32) -> f64 {
    10.0 + t * (upper_bound as f64 - 10.0)
}

/// Perturbation band at elapsed-time fraction `t`.
///
/// The band straddles zero on the side the trend points to: a negative
/// trend pins the high end at 10, a positive trend pins the low end at -10,
/// and a zero trend leaves the full (-10, 10) band. The trend-side bound is
/// the trend rounded toward positive infinity, matching the auction's
/// ceiling of `x(t)`; truncation toward zero would widen the band for
/// negative trends.
pub fn perturbation_band(t: f64, upper_bound: i32) -> PerturbationBand {
    let xt = trend(t, upper_bound);
    if xt < 0.0 {
        PerturbationBand {
            low: xt.ceil(),
            high: 10.0,
        }
    } else if xt > 0.0 {
        PerturbationBand {
            low: -10.0,
            high: xt.ceil(),
        }
    } else {
        PerturbationBand {
            low: -10.0,
            high: 10.0,
        }
    }
}
