//! tac-analytics: analytics for the TAC classic travel game
//!
//! This library provides the core components for:
//! - Enumerating client stay windows over the 5-day game and tabulating
//!   the duration distribution
//! - Sweeping the flight auction's hidden price perturbation band across
//!   game time for a set of trend upper bounds
//! - Rendering both results as plain-text reports

pub mod flight;
pub mod render;
pub mod stays;
pub mod telemetry;
