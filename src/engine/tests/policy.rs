use crate::engine::policy::recommend;
use crate::engine::{EngineConfig, Recommendation};

#[test]
fn bands_are_exhaustive_and_non_overlapping() {
    let config = EngineConfig::default();

    for score in 0..=100u8 {
        let recommendation = recommend(score, &config);
        let expected = if score >= config.finish_threshold {
            Recommendation::Finish
        } else if score >= config.pause_threshold {
            Recommendation::Pause
        } else {
            Recommendation::Abandon
        };
        assert_eq!(recommendation, expected, "score {score}");
    }
}

#[test]
fn band_edges_fall_on_the_thresholds() {
    let config = EngineConfig::default();

    assert_eq!(recommend(65, &config), Recommendation::Finish);
    assert_eq!(recommend(64, &config), Recommendation::Pause);
    assert_eq!(recommend(35, &config), Recommendation::Pause);
    assert_eq!(recommend(34, &config), Recommendation::Abandon);
}

#[test]
fn custom_thresholds_move_the_bands() {
    let config = EngineConfig {
        finish_threshold: 80,
        pause_threshold: 50,
        ..EngineConfig::default()
    };

    assert_eq!(recommend(79, &config), Recommendation::Pause);
    assert_eq!(recommend(80, &config), Recommendation::Finish);
    assert_eq!(recommend(49, &config), Recommendation::Abandon);
}

#[test]
fn recommendations_serialize_screaming() {
    let json = serde_json::to_string(&Recommendation::Finish).expect("serializes");
    assert_eq!(json, "\"FINISH\"");
    let json = serde_json::to_string(&Recommendation::Abandon).expect("serializes");
    assert_eq!(json, "\"ABANDON\"");
}
