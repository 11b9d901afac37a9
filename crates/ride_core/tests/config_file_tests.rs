use std::fs;

use ride_core::error::{ErrorKind, RideError};
use ride_core::pricing::{FareSchedule, RideKind, PREMIUM_PER_MILE, STANDARD_PER_MILE};
use ride_core::ride::Ride;

#[test]
fn load_reads_rates_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fares.json");
    fs::write(&path, r#"{ "standard_per_mile": 1.75, "premium_per_mile": 3.25 }"#)
        .expect("fixture written");

    let schedule = FareSchedule::load(&path).expect("valid schedule");
    let ride = Ride::with_schedule(&schedule, RideKind::Premium, 1, "A", "B", 2.0)
        .expect("valid ride");
    assert_eq!(ride.calculate_fare(), 6.5);
}

#[test]
fn empty_object_means_default_rates() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fares.json");
    fs::write(&path, "{}").expect("fixture written");

    let schedule = FareSchedule::load(&path).expect("valid schedule");
    assert_eq!(schedule, FareSchedule::default());
    assert_eq!(schedule.standard_per_mile, STANDARD_PER_MILE);
    assert_eq!(schedule.premium_per_mile, PREMIUM_PER_MILE);
}

#[test]
fn missing_file_is_unexpected_failure() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = FareSchedule::load(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, RideError::Config(_)));
    assert_eq!(err.kind(), ErrorKind::UnexpectedFailure);
}

#[test]
fn negative_rate_in_file_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fares.json");
    fs::write(&path, r#"{ "premium_per_mile": -3.0 }"#).expect("fixture written");

    let err = FareSchedule::load(&path).expect_err("negative rate");
    assert!(err.to_string().contains("premium_per_mile"));
}
