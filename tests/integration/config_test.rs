use sensorwatch::core::config::{MonitorConfig, SpaceUnit};
use sensorwatch::core::DeliveryMethod;
use sensorwatch::StateMonitor;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = MonitorConfig::default();
    assert!(config.sender.method.is_none());
    assert!(config.identity.name.is_none());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = MonitorConfig::default();
    config.thresholds.low_space = 25.0;
    config.thresholds.space_unit = SpaceUnit::MB;
    config.sender.method = Some("slack".to_string());
    config.sender.channel = Some("testing".to_string());
    config.identity.name = Some("ttbd".to_string());
    config.identity.number = Some(9);

    config.save_to(&path).unwrap();
    let loaded = MonitorConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.sender.delivery_method().unwrap(),
        Some(DeliveryMethod::Slack)
    );
}

#[test]
fn test_config_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[sender]\nmethod = \"telegraph\"\n").unwrap();

    assert!(MonitorConfig::load_from(&path).is_err());
}

#[test]
fn test_config_unknown_field_is_rejected() {
    assert!(MonitorConfig::from_toml("[monitor]\npower_limit = 3\n").is_err());
}

#[test]
fn test_monitor_starts_without_key_file() {
    let config = MonitorConfig::from_toml(
        r#"
        [sender]
        method = "slack"
        channel = "testing"
        key_file = "/nonexistent/keys.toml"
        "#,
    )
    .unwrap();

    let monitor = StateMonitor::new(&config).unwrap();
    assert!(monitor.dispatcher().backend_name().is_none());
}
