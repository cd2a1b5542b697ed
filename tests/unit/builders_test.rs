//! Tests for builder modules

use std::sync::Arc;

use car_park::builders::CarParkBuilder;
use car_park::core::{CarParkError, Display};
use car_park::infra::MessageDisplay;
use tempfile::TempDir;

#[test]
fn test_builder_seeds_collections() {
    let dir = TempDir::new().expect("tmp");
    let display: Arc<dyn Display> = Arc::new(MessageDisplay::new(1, "Hi", true));

    let builder = CarParkBuilder::new("Site", 3)
        .plates(["A", "B"])
        .display(display)
        .log_file(dir.path().join("log.txt"))
        .config_file(dir.path().join("config.json"));
    assert_eq!(builder.location(), "Site");

    let car_park = builder.build().expect("build");
    assert_eq!(car_park.plates(), ["A", "B"]);
    assert_eq!(car_park.displays().len(), 1);
    assert_eq!(car_park.available_bays(), 1);
}

#[test]
fn test_builders_do_not_share_collections() {
    let dir = TempDir::new().expect("tmp");
    let build = |name: &str| {
        CarParkBuilder::new(name, 2)
            .log_file(dir.path().join(format!("{name}.txt")))
            .config_file(dir.path().join(format!("{name}.json")))
            .build()
            .expect("build")
    };

    let mut first = build("first");
    let second = build("second");
    first.add_vehicle("ONLY-FIRST").expect("add");

    assert!(second.plates().is_empty());
}

#[test]
fn test_builder_accepts_capacity_beyond_32_bits() {
    let dir = TempDir::new().expect("tmp");
    let capacity = i64::from(u32::MAX) + 1;
    let car_park = CarParkBuilder::new("Site", capacity)
        .log_file(dir.path().join("log.txt"))
        .config_file(dir.path().join("config.json"))
        .build()
        .expect("build");
    assert_eq!(car_park.available_bays(), u64::from(u32::MAX) + 1);
    assert_eq!(car_park.to_config().capacity, capacity);
}

#[test]
fn test_builder_rejects_negative_capacity() {
    let dir = TempDir::new().expect("tmp");
    let err = CarParkBuilder::new("Site", -1)
        .log_file(dir.path().join("log.txt"))
        .config_file(dir.path().join("config.json"))
        .build()
        .unwrap_err();
    assert!(matches!(err, CarParkError::InvalidArgument(_)));
}
