//! Test helpers for common fixtures.
//!
//! Shared by unit tests, integration tests and benchmarks so every caller prices the
//! same trips.

use crate::driver::Driver;
use crate::ride::{Ride, RideId, SharedRide};
use crate::rider::Rider;

/// Tolerance for comparing computed fares.
pub const FARE_EPSILON: f64 = 1e-9;

/// A standard ride with its fare already calculated.
///
/// # Panics
///
/// Panics if `distance_miles` is not positive.
pub fn priced_standard(id: RideId, distance_miles: f64) -> SharedRide {
    let ride = Ride::standard(id, "Home", "Work", distance_miles)
        .expect("test distance should be positive")
        .into_shared();
    ride.calculate_fare();
    ride
}

/// A premium ride with its fare already calculated.
///
/// # Panics
///
/// Panics if `distance_miles` is not positive.
pub fn priced_premium(id: RideId, distance_miles: f64) -> SharedRide {
    let ride = Ride::premium(id, "Home", "Airport", distance_miles)
        .expect("test distance should be positive")
        .into_shared();
    ride.calculate_fare();
    ride
}

/// The driver used throughout the demonstration scenarios.
pub fn test_driver() -> Driver {
    Driver::new(101, "John Doe", 4.8).expect("4.8 is a valid rating")
}

pub fn test_rider() -> Rider {
    Rider::new(201, "Alice")
}

pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < FARE_EPSILON
}
