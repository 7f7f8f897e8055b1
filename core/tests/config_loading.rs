//! Scoring config: defaults, JSON overrides, validation, and directory loading.

use churnwatch_core::{
    config::{DashConfig, RiskThresholds, ScoringRules},
    engine::DashEngine,
    error::DashError,
    profile::ProfileInput,
};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("churnwatch-{name}-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("scoring")).unwrap();
    dir
}

#[test]
fn default_rule_matches_production_weights() {
    let r = ScoringRules::default();
    assert_eq!(r.base_risk, 0.30);
    assert_eq!(r.month_to_month_weight, 0.25);
    assert_eq!(r.electronic_check_weight, 0.20);
    assert_eq!(r.no_online_security_weight, 0.15);
    assert_eq!(r.low_tenure_weight, 0.10);
    assert_eq!(r.low_tenure_months, 6);
    assert_eq!(r.multiple_lines_weight, 0.05);
    assert_eq!(r.probability_cap, 0.95);
    assert_eq!(r.max_factors, 3);

    let t = RiskThresholds::default();
    assert_eq!((t.medium, t.high), (0.30, 0.70));
}

#[test]
fn partial_json_fills_remaining_fields_with_defaults() {
    let config = DashConfig::from_json(r#"{ "scoring": { "probability_cap": 0.90 } }"#).unwrap();
    assert_eq!(config.scoring.probability_cap, 0.90);
    assert_eq!(config.scoring.base_risk, 0.30);
    assert_eq!(config.thresholds, RiskThresholds::default());

    assert_eq!(DashConfig::from_json("{}").unwrap(), DashConfig::default());
}

#[test]
fn negative_weight_is_rejected() {
    let err = DashConfig::from_json(r#"{ "scoring": { "low_tenure_weight": -0.1 } }"#).unwrap_err();
    assert!(matches!(err, DashError::InvalidConfig { .. }), "got {err}");
}

#[test]
fn inverted_thresholds_are_rejected() {
    let err = DashConfig::from_json(r#"{ "thresholds": { "medium": 0.8, "high": 0.4 } }"#).unwrap_err();
    assert!(matches!(err, DashError::InvalidConfig { .. }), "got {err}");
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = DashConfig::from_json("{ scoring: ").unwrap_err();
    assert!(matches!(err, DashError::Serialization(_)), "got {err}");
}

#[test]
fn missing_rules_file_falls_back_to_default() {
    let dir = std::env::temp_dir().join("churnwatch-no-such-data-dir");
    let config = DashConfig::load(dir.to_str().unwrap()).unwrap();
    assert_eq!(config, DashConfig::default());
}

#[test]
fn rules_file_changes_engine_scoring() {
    let dir = scratch_dir("override");
    std::fs::write(
        dir.join(DashConfig::RULES_FILE),
        r#"{ "scoring": { "probability_cap": 0.80 }, "thresholds": { "high": 0.85 } }"#,
    )
    .unwrap();

    let engine = DashEngine::build(dir.to_str().unwrap()).unwrap();
    let input = ProfileInput {
        tenure:          Some(1),
        contract:        Some("Month-to-month".into()),
        payment_method:  Some("Electronic check".into()),
        online_security: Some("No".into()),
        ..ProfileInput::default()
    };
    let view = engine.predict(input).unwrap();

    assert_eq!(view.assessment.probability, 0.80);
    assert_eq!(view.probability_display, "80.0%");
    assert_eq!(view.risk_level_label, "Medium Risk", "0.80 sits below the raised high edge");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn unreadable_rules_file_is_an_error() {
    let dir = scratch_dir("broken");
    std::fs::write(dir.join(DashConfig::RULES_FILE), "not json").unwrap();

    let err = DashConfig::load(dir.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Invalid"), "got {err}");

    std::fs::remove_dir_all(&dir).ok();
}
