//! Tests for activity records

use car_park::core::{Action, ActivityRecord};

#[test]
fn test_action_words() {
    assert_eq!(Action::Entered.to_string(), "entered");
    assert_eq!(Action::Exited.to_string(), "exited");
    assert_eq!("exited".parse::<Action>().expect("parse"), Action::Exited);
}

#[test]
fn test_record_now_round_trips_through_line() {
    let record = ActivityRecord::now("FAKE-123", Action::Entered);
    let line = record.to_line();

    assert!(line.starts_with("FAKE-123 entered at "));
    assert!(line.ends_with('\n'));
    assert_eq!(line.trim_end().parse::<ActivityRecord>().expect("parse"), record);
}
