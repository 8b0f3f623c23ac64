//! Content domain: tests for config parsing and validation.

use super::loader::parse_climb_config;
use super::{AdvanceGate, ClimbConfig, validate_config};

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&ClimbConfig::default()).is_empty());
}

#[test]
fn test_parse_full_config() {
    let text = r#"(
        bind_start_range: 4.0,
        limb_probe_range: 2.0,
        climb_step: 0.5,
        floor_probe_range: 1.0,
        fall_tolerance: 0,
        capture_hold_secs: 0.2,
        input_activation_secs: 0.1,
        advance_gate: Press,
        limb_follow_rate: 10.0,
        limb_leash: 1.0,
        walk_speed: 2.0,
        walk_accel: 15.0,
    )"#;

    let config = parse_climb_config(text, "inline").expect("config should parse");
    assert_eq!(config.bind_start_range, 4.0);
    assert_eq!(config.climb_step, 0.5);
    assert_eq!(config.fall_tolerance, 0);
    assert_eq!(config.advance_gate, AdvanceGate::Press);
}

#[test]
fn test_parse_partial_config_keeps_defaults() {
    let config = parse_climb_config("(climb_step: 2.0)", "inline").expect("config should parse");
    let defaults = ClimbConfig::default();

    assert_eq!(config.climb_step, 2.0);
    assert_eq!(config.bind_start_range, defaults.bind_start_range);
    assert_eq!(config.advance_gate, defaults.advance_gate);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_climb_config("(climb_step: \"high\")", "climb.ron").unwrap_err();
    assert_eq!(err.file, "climb.ron");
    assert!(err.to_string().starts_with("Failed to load climb.ron"));
}

#[test]
fn test_validation_rejects_non_positive_ranges() {
    let config = ClimbConfig {
        limb_probe_range: 0.0,
        capture_hold_secs: -1.0,
        ..ClimbConfig::default()
    };

    let errors = validate_config(&config);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["limb_probe_range", "capture_hold_secs"]);
}

#[test]
fn test_validation_rejects_unreachable_fall() {
    let config = ClimbConfig {
        fall_tolerance: 4,
        ..ClimbConfig::default()
    };

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "fall_tolerance");
}

#[test]
fn test_grab_gate_requires_anchor() {
    assert!(AdvanceGate::Grab.requires_anchor());
    assert!(!AdvanceGate::Press.requires_anchor());
}
