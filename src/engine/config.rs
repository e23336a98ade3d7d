use serde::{Deserialize, Serialize};

/// Tuning constants for the decision engine. Thresholds and weights live here
/// so the rubric can be adjusted without touching the scoring algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scores at or above this recommend finishing.
    pub finish_threshold: u8,
    /// Scores at or above this (but below `finish_threshold`) recommend pausing.
    pub pause_threshold: u8,
    /// Full swing of the time-investment modifier; half of it each way.
    pub time_swing: f64,
    /// Remaining hours beyond this arm the long-remainder penalty.
    pub long_remainder_hours: f64,
    /// Remaining hours at which the long-remainder penalty saturates.
    pub long_remainder_reference: f64,
    /// Maximum long-remainder penalty.
    pub long_remainder_penalty: f64,
    /// Enjoyment below this counts as flagging for the long-remainder penalty.
    pub low_enjoyment_cutoff: u8,
    /// Penalty at maximum backlog pressure.
    pub backlog_penalty_max: f64,
    /// Flat bonus when the completionist flag is set.
    pub completionist_bonus: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            finish_threshold: 65,
            pause_threshold: 35,
            time_swing: 20.0,
            long_remainder_hours: 20.0,
            long_remainder_reference: 50.0,
            long_remainder_penalty: 15.0,
            low_enjoyment_cutoff: 6,
            backlog_penalty_max: 25.0,
            completionist_bonus: 15,
        }
    }
}
