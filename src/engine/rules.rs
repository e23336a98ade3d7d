use super::config::EngineConfig;
use super::inputs::EngineInputs;
use super::BreakdownItem;

/// Compute the score terms in their fixed order, returning the ordered
/// breakdown and the pre-clamp total. Each term is rounded to an integer on
/// its own before summation (ties away from zero), so the total is exact.
pub(crate) fn score_terms(inputs: &EngineInputs, config: &EngineConfig) -> (Vec<BreakdownItem>, i32) {
    let mut breakdown = Vec::new();
    let mut total: i32 = 0;

    let base = i32::from(inputs.enjoyment) * 10;
    breakdown.push(BreakdownItem {
        label: "Enjoyment base".to_string(),
        value: base,
        calculation: format!("enjoyment {} x 10", inputs.enjoyment),
    });
    total += base;

    let total_hours = inputs.total_hours();
    if total_hours > 0.0 {
        let played_share = inputs.hours_played / total_hours;
        let modifier = ((played_share - 0.5) * config.time_swing).round() as i32;
        breakdown.push(BreakdownItem {
            label: "Time investment".to_string(),
            value: modifier,
            calculation: format!(
                "{:.1}h of {:.1}h already played (share {:.2})",
                inputs.hours_played, total_hours, played_share
            ),
        });
        total += modifier;
    }

    if inputs.hours_remaining > config.long_remainder_hours
        && inputs.enjoyment < config.low_enjoyment_cutoff
    {
        let hours_factor = (inputs.hours_remaining / config.long_remainder_reference).min(1.0);
        let enjoyment_factor = f64::from(config.low_enjoyment_cutoff - inputs.enjoyment)
            / f64::from(config.low_enjoyment_cutoff - 1);
        let penalty =
            -(hours_factor * enjoyment_factor * config.long_remainder_penalty).round() as i32;
        breakdown.push(BreakdownItem {
            label: "Long remainder".to_string(),
            value: penalty,
            calculation: format!(
                "{:.1}h still to go at enjoyment {}",
                inputs.hours_remaining, inputs.enjoyment
            ),
        });
        total += penalty;
    }

    let backlog_penalty = -((f64::from(inputs.backlog_pressure - 1) / 9.0)
        * config.backlog_penalty_max)
        .round() as i32;
    breakdown.push(BreakdownItem {
        label: "Backlog pressure".to_string(),
        value: backlog_penalty,
        calculation: format!("backlog pressure {} of 10", inputs.backlog_pressure),
    });
    total += backlog_penalty;

    if inputs.completionist {
        breakdown.push(BreakdownItem {
            label: "Completionist bonus".to_string(),
            value: config.completionist_bonus,
            calculation: "completionist flag set".to_string(),
        });
        total += config.completionist_bonus;
    }

    (breakdown, total)
}
