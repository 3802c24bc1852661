//! Stay window enumeration
//!
//! A client stay in the classic game is an (arrival, departure) pair of day
//! indices on the 6-point day grid 0..=5, arrival strictly before departure.
//! This module enumerates every valid pair and tabulates the distribution of
//! stay durations.

pub mod report;

pub use report::render_report;

/// First day a client may arrive.
pub const FIRST_ARRIVAL: u8 = 0;
/// Last day a client may arrive (departure must still fit on the grid).
pub const LAST_ARRIVAL: u8 = 4;
/// Last day a client may depart.
pub const LAST_DEPARTURE: u8 = 5;
/// Clients per agent in the classic game; scales counts into expected guests.
pub const CLIENTS_PER_AGENT: f64 = 8.0;

/// Duration histogram preserving first-seen key order.
///
/// The key domain is tiny (durations 1..=5) and enumeration order matters
/// for the report, so this is a plain insertion-ordered vec rather than a
/// map.
#[derive(Debug, Clone, Default)]
pub struct DurationHistogram {
    counts: Vec<(u8, u32)>,
}

impl DurationHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one stay of the given duration
    pub fn record(&mut self, duration: u8) {
        match self.counts.iter_mut().find(|(d, _)| *d == duration) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((duration, 1)),
        }
    }

    /// Count of stays with the given duration, zero if never seen
    pub fn count(&self, duration: u8) -> u32 {
        self.counts
            .iter()
            .find(|(d, _)| *d == duration)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Total number of recorded stays
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Iterate (duration, count) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts.iter().copied()
    }
}

/// Enumerate every valid (arrival, departure) pair on the day grid and
/// tabulate the duration of each.
pub fn enumerate_stays() -> DurationHistogram {
    let mut histogram = DurationHistogram::new();
    for arrival in FIRST_ARRIVAL..=LAST_ARRIVAL {
        for departure in (arrival + 1)..=LAST_DEPARTURE {
            histogram.record(departure - arrival);
        }
    }
    tracing::debug!(total = histogram.total(), "stay windows enumerated");
    histogram
}
