//! Tests for configuration persistence

use std::path::PathBuf;

use car_park::config::CarParkConfig;
use car_park::core::CarParkError;
use tempfile::TempDir;

fn sample() -> CarParkConfig {
    CarParkConfig {
        location: "Moondalup".to_string(),
        capacity: 100,
        log_file: PathBuf::from("moondalup.txt"),
    }
}

#[test]
fn test_config_validation() {
    assert!(sample().validate().is_ok());

    let invalid = CarParkConfig {
        capacity: -5,
        ..sample()
    };
    assert!(matches!(
        invalid.validate(),
        Err(CarParkError::InvalidArgument(_))
    ));
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "location": "Moondalup",
        "capacity": 100,
        "log_file": "moondalup.txt"
    }"#;

    let config = CarParkConfig::from_json_str(json).expect("parse");
    assert_eq!(config, sample());
}

#[test]
fn test_config_missing_field_is_malformed() {
    let json = r#"{ "location": "Moondalup", "capacity": 100 }"#;
    assert!(matches!(
        CarParkConfig::from_json_str(json),
        Err(CarParkError::ConfigMalformed(_))
    ));
}

#[test]
fn test_config_wrong_shape_is_malformed() {
    let json = r#"{ "location": "Moondalup", "capacity": "lots", "log_file": "x" }"#;
    assert!(matches!(
        CarParkConfig::from_json_str(json),
        Err(CarParkError::ConfigMalformed(_))
    ));
}

#[test]
fn test_config_save_then_load() {
    let dir = TempDir::new().expect("tmp");
    let path = dir.path().join("moondalup_config.json");

    sample().save(&path).expect("save");
    assert_eq!(CarParkConfig::load(&path).expect("load"), sample());
}

#[test]
fn test_config_from_json_rejects_negative_capacity() {
    let json = r#"{ "location": "Moondalup", "capacity": -1, "log_file": "x" }"#;
    assert!(matches!(
        CarParkConfig::from_json_str(json),
        Err(CarParkError::InvalidArgument(_))
    ));
}
