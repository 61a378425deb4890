//! Config tests - JSON documents and environment-style overrides

use std::collections::HashMap;

use tui_life::core::{LifeConfig, SimulationController};
use tui_life::types::RuleSet;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = LifeConfig::from_json_str(r#"{ "interval_ms": 250 }"#).unwrap();
    assert_eq!(config.interval_ms, 250);
    assert_eq!(config.history_length, 1);
    assert_eq!(config.cell_size, 1);
    assert_eq!(config.rules, RuleSet::canonical());
}

#[test]
fn test_json_rules_and_out_of_range_values() {
    let raw = r#"{
        "interval_ms": 50,
        "history_length": 0,
        "cell_size": 3,
        "rules": { "dead_reproduction": 2 }
    }"#;
    let config = LifeConfig::from_json_str(raw).unwrap();
    assert_eq!(config.interval_ms, 1000);
    assert_eq!(config.history_length, 1);
    assert_eq!(config.cell_size, 3);
    assert_eq!(config.rules.dead_reproduction, 2);
    assert_eq!(config.rules.overpopulation, 4);
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(LifeConfig::from_json_str("{ interval_ms: }").is_err());
    assert!(LifeConfig::from_json_str(r#"{ "interval_ms": "fast" }"#).is_err());
}

#[test]
fn test_json_document_from_serialized_config() {
    let config = LifeConfig {
        history_length: 40,
        ..LifeConfig::default()
    };
    let raw = serde_json::to_string_pretty(&config).unwrap();
    assert!(raw.contains("\"history_length\": 40"));
    assert_eq!(LifeConfig::from_json_str(&raw).unwrap(), config);
}

#[test]
fn test_variables_override_and_invalid_values_are_ignored() {
    let mut config = LifeConfig::default();
    config.apply_vars(vars(&[
        ("LIFE_INTERVAL_MS", " 400 "),
        ("LIFE_HISTORY_LENGTH", "-3"),
        ("LIFE_CELL_SIZE", "0"),
        ("LIFE_RULES", "1,2,3,4,3"),
    ]));
    assert_eq!(config.interval_ms, 400);
    assert_eq!(config.history_length, 1);
    assert_eq!(config.cell_size, 1);

    config.apply_vars(vars(&[("LIFE_RULES", "1,2,3")]));
    assert_eq!(config.rules, RuleSet::canonical());
}

#[test]
fn test_controller_validates_handed_config() {
    let config = LifeConfig {
        interval_ms: 5,
        history_length: 0,
        ..LifeConfig::default()
    };
    let life = SimulationController::headless(config, 2, 2);
    assert_eq!(life.interval_time(), 1000);
    assert_eq!(life.history_length(), 1);
}
