use serde::{Deserialize, Serialize};

/// The five facts the engine needs about a playthrough in progress.
///
/// All fields are required; supplying defaults is a caller concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineInputs {
    /// Hours already sunk into the game. Must be finite and non-negative.
    pub hours_played: f64,
    /// Estimated hours left to reach the credits. Must be finite and non-negative.
    pub hours_remaining: f64,
    /// Current enjoyment on a 1-10 scale.
    pub enjoyment: u8,
    /// How loudly the rest of the backlog is calling, 1-10.
    pub backlog_pressure: u8,
    /// Whether the player insists on seeing everything through.
    pub completionist: bool,
}

/// Precondition violations. The engine raises these instead of producing
/// garbage so it stays safe to call outside a validated form context.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("hours_played must be a finite, non-negative number (got {0})")]
    HoursPlayed(f64),
    #[error("hours_remaining must be a finite, non-negative number (got {0})")]
    HoursRemaining(f64),
    #[error("enjoyment must be between 1 and 10 (got {0})")]
    Enjoyment(u8),
    #[error("backlog_pressure must be between 1 and 10 (got {0})")]
    BacklogPressure(u8),
}

const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

impl EngineInputs {
    /// Check every precondition, reporting the first violated field.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !self.hours_played.is_finite() || self.hours_played < 0.0 {
            return Err(InvalidInput::HoursPlayed(self.hours_played));
        }
        if !self.hours_remaining.is_finite() || self.hours_remaining < 0.0 {
            return Err(InvalidInput::HoursRemaining(self.hours_remaining));
        }
        if !RATING_RANGE.contains(&self.enjoyment) {
            return Err(InvalidInput::Enjoyment(self.enjoyment));
        }
        if !RATING_RANGE.contains(&self.backlog_pressure) {
            return Err(InvalidInput::BacklogPressure(self.backlog_pressure));
        }
        Ok(())
    }

    pub(crate) fn total_hours(&self) -> f64 {
        self.hours_played + self.hours_remaining
    }
}
