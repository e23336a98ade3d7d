//! The "worth finishing" decision engine.
//!
//! A pure, stateless transform from five playthrough facts to a clamped
//! 0-100 score, a three-way recommendation, a human-readable explanation,
//! and an ordered breakdown of the score terms. Identical inputs always
//! produce identical verdicts; there is no I/O and no shared state.

pub(crate) mod config;
pub(crate) mod explain;
pub(crate) mod inputs;
pub(crate) mod policy;
pub(crate) mod rules;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use inputs::{EngineInputs, InvalidInput};
pub use policy::Recommendation;

use serde::{Deserialize, Serialize};

/// One contributing term of the score, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub value: i32,
    pub calculation: String,
}

/// Full engine output for a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub score: u8,
    pub recommendation: Recommendation,
    pub explanation: String,
    pub breakdown: Vec<BreakdownItem>,
}

/// Stateless evaluator applying a rubric configuration to playthrough inputs.
pub struct DecisionEngine {
    config: EngineConfig,
}

impl DecisionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one playthrough. Preconditions are checked up front; invalid
    /// input yields an error and no partial verdict.
    pub fn evaluate(&self, inputs: &EngineInputs) -> Result<Verdict, InvalidInput> {
        inputs.validate()?;

        let (breakdown, total) = rules::score_terms(inputs, &self.config);
        let score = total.clamp(0, 100) as u8;
        let recommendation = policy::recommend(score, &self.config);
        let explanation = explain::explanation(recommendation, inputs, &self.config);

        Ok(Verdict {
            score,
            recommendation,
            explanation,
            breakdown,
        })
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Evaluate with the canonical rubric.
pub fn evaluate(inputs: &EngineInputs) -> Result<Verdict, InvalidInput> {
    DecisionEngine::default().evaluate(inputs)
}
