//! Telemetry module
//!
//! Logging setup for the analytics binaries. Diagnostics go to stderr so
//! they never interleave with the reports written to stdout.

mod logging;

pub use logging::init_logging;
