use super::config::EngineConfig;
use serde::{Deserialize, Serialize};

/// Three-way call on the playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Finish,
    Pause,
    Abandon,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Finish => "Finish it",
            Recommendation::Pause => "Pause it",
            Recommendation::Abandon => "Abandon it",
        }
    }
}

/// Map a clamped score onto a recommendation. The bands are exhaustive and
/// non-overlapping: finish at or above the finish threshold, pause at or
/// above the pause threshold, abandon below that.
pub(crate) fn recommend(score: u8, config: &EngineConfig) -> Recommendation {
    if score >= config.finish_threshold {
        Recommendation::Finish
    } else if score >= config.pause_threshold {
        Recommendation::Pause
    } else {
        Recommendation::Abandon
    }
}
