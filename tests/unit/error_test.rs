//! Tests for error types

use std::io;

use car_park::core::CarParkError;

#[test]
fn test_not_found_error() {
    let err = CarParkError::NotFound("NO-1".to_string());
    assert_eq!(format!("{}", err), "vehicle not found: NO-1");
}

#[test]
fn test_type_mismatch_error() {
    let err = CarParkError::TypeMismatch("object must be a Sensor or Display".to_string());
    assert_eq!(
        format!("{}", err),
        "type mismatch: object must be a Sensor or Display"
    );
}

#[test]
fn test_invalid_argument_error() {
    let err = CarParkError::InvalidArgument("capacity".to_string());
    assert_eq!(format!("{}", err), "invalid argument: capacity");
}

#[test]
fn test_display_failed_error() {
    let err = CarParkError::DisplayFailed {
        display_id: 3,
        reason: "offline".to_string(),
    };
    assert_eq!(format!("{}", err), "display 3 failed: offline");
}

#[test]
fn test_io_error_keeps_path_and_source() {
    let err = CarParkError::io("log.txt", io::Error::new(io::ErrorKind::NotFound, "gone"));
    assert_eq!(format!("{}", err), "i/o failure on log.txt: gone");
    assert!(std::error::Error::source(&err).is_some());
}
