use landed_core::config::EngineConfig;
use landed_core::errors::EngineError;

#[test]
fn empty_toml_yields_full_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config.upgrade.crossing_cooldown_secs, 300);
    assert_eq!(config.upgrade.same_level_cooldown_secs, 3600);
    assert_eq!(config.upgrade.retry_backoff_secs, 60);
    assert!(config.inference.freight_rate_air_per_kg > config.inference.freight_rate_sea_per_kg);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = EngineConfig::from_toml_str(
        r#"
        [upgrade]
        crossing_cooldown_secs = 120
        "#,
    )
    .unwrap();
    assert_eq!(config.upgrade.crossing_cooldown_secs, 120);
    assert_eq!(config.upgrade.same_level_cooldown_secs, 3600);
}

#[test]
fn rejects_duty_rate_outside_unit_interval() {
    let err = EngineConfig::from_toml_str(
        r#"
        [inference]
        fallback_duty_rate = 5.0
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn rejects_inverted_cooldown_windows() {
    let err = EngineConfig::from_toml_str(
        r#"
        [upgrade]
        crossing_cooldown_secs = 3600
        same_level_cooldown_secs = 60
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn rejects_malformed_toml() {
    assert!(EngineConfig::from_toml_str("not [valid toml").is_err());
}
