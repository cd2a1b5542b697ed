//! Tests for utility functions

use chrono::Timelike;

use car_park::util::{init_tracing, now_local, DEFAULT_LOG_DIRECTIVE, TIMESTAMP_FORMAT};

#[test]
fn test_now_local_has_second_precision() {
    assert_eq!(now_local().nanosecond(), 0);
}

#[test]
fn test_timestamp_format_shape() {
    let rendered = now_local().format(TIMESTAMP_FORMAT).to_string();
    assert_eq!(rendered.len(), "YYYY-MM-DD HH:MM:SS".len());
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

#[test]
fn test_default_log_directive_targets_crate() {
    assert!(DEFAULT_LOG_DIRECTIVE.starts_with("car_park="));
}
