use crate::engine::{DecisionEngine, EngineInputs};

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::default()
}

pub(super) fn playthrough(
    hours_played: f64,
    hours_remaining: f64,
    enjoyment: u8,
    backlog_pressure: u8,
) -> EngineInputs {
    EngineInputs {
        hours_played,
        hours_remaining,
        enjoyment,
        backlog_pressure,
        completionist: false,
    }
}
