//! Medir - batch performance report analyzer for job lifecycle records
//!
//! This library ingests job/request records carrying a lifecycle
//! status and MM:SS-encoded created/updated timestamps, and produces a
//! statistical performance report: completion rate, three error-rate
//! definitions, dispersion statistics, a fixed percentile ladder, a
//! stability verdict, and a Little's Law load estimate.
//!
//! The pipeline is a single pure pass: raw records → normalized
//! records → error tags → completed subset → statistics → report.

pub mod classify;
pub mod cli;
pub mod csv_input;
pub mod csv_output;
pub mod duration;
pub mod filter;
pub mod json_output;
pub mod queueing;
pub mod record;
pub mod report;
pub mod stability;
pub mod stats;
