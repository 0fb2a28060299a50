//! Little's Law load estimate
//!
//! L = λ × W: expected number of requests in the system given the
//! arrival rate λ (req/s) and the mean time in system W. A long-run
//! steady-state point estimate; only meaningful when the measured
//! batch is representative of sustained load.

/// Expected requests in system, or `None` when the mean duration is
/// not applicable (empty completed subset).
pub fn littles_law(arrival_rate: f32, mean_duration_secs: Option<f32>) -> Option<f32> {
    Some(arrival_rate * mean_duration_secs?)
}
