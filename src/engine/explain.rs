use super::config::EngineConfig;
use super::inputs::EngineInputs;
use super::policy::Recommendation;

// Presentation thresholds for sentence selection. The wording is free to
// change; which sentence fires under which inputs is part of the contract.
const HIGH_ENJOYMENT: u8 = 8;
const LOW_ENJOYMENT: u8 = 3;
const FLAGGING_ENJOYMENT: u8 = 5;
const SHORT_REMAINDER_HOURS: f64 = 10.0;
const HEAVY_BACKLOG: u8 = 7;

/// Build the explanation for a verdict: zero or more conditional sentences
/// picked from the branch's pool, then an unconditional closing sentence, so
/// the result is never empty.
pub(crate) fn explanation(
    recommendation: Recommendation,
    inputs: &EngineInputs,
    config: &EngineConfig,
) -> String {
    let sentences = match recommendation {
        Recommendation::Finish => finish_sentences(inputs),
        Recommendation::Pause => pause_sentences(inputs, config),
        Recommendation::Abandon => abandon_sentences(inputs, config),
    };
    sentences.join(" ")
}

fn finish_sentences(inputs: &EngineInputs) -> Vec<&'static str> {
    let mut sentences = Vec::new();
    if inputs.enjoyment >= HIGH_ENJOYMENT {
        sentences.push("You're clearly having a great time with this one.");
    }
    if inputs.hours_remaining <= SHORT_REMAINDER_HOURS {
        sentences.push("The credits are close enough to taste.");
    }
    if inputs.completionist {
        sentences.push("Finishing will scratch the completionist itch properly.");
    }
    sentences.push("Stick with it and see the ending.");
    sentences
}

fn pause_sentences(inputs: &EngineInputs, config: &EngineConfig) -> Vec<&'static str> {
    let mut sentences = Vec::new();
    if inputs.enjoyment <= FLAGGING_ENJOYMENT {
        sentences.push("Your enthusiasm for it seems to be flagging.");
    }
    if inputs.hours_remaining > config.long_remainder_hours {
        sentences.push("A long stretch remains, and it will still be there later.");
    }
    if inputs.backlog_pressure >= HEAVY_BACKLOG {
        sentences.push("The backlog is calling loudly right now.");
    }
    sentences.push("Shelve it for now and come back when the pull returns.");
    sentences
}

fn abandon_sentences(inputs: &EngineInputs, config: &EngineConfig) -> Vec<&'static str> {
    let mut sentences = Vec::new();
    if inputs.enjoyment <= LOW_ENJOYMENT {
        sentences.push("The fun has mostly drained out of this one.");
    }
    if inputs.hours_remaining > config.long_remainder_hours {
        sentences.push("A lot of hours stand between you and the credits.");
    }
    if inputs.backlog_pressure >= HEAVY_BACKLOG {
        sentences.push("Games you'll enjoy more are already waiting.");
    }
    if inputs.completionist {
        sentences.push("Letting go is allowed, even for a completionist.");
    }
    sentences.push("Move on without guilt.");
    sentences
}
