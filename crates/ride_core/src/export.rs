//! Serializable snapshots of rides, drivers and riders for JSON output.

use serde::Serialize;

use crate::driver::{Driver, DriverId};
use crate::ride::{Ride, RideId};
use crate::rider::{Rider, RiderId};

/// Snapshot of one ride.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideSnapshot {
    pub id: RideId,
    pub variant: String,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
    pub fare: f64,
}

impl From<&Ride> for RideSnapshot {
    fn from(ride: &Ride) -> Self {
        Self {
            id: ride.id(),
            variant: ride.variant_label().to_string(),
            pickup: ride.pickup().to_string(),
            dropoff: ride.dropoff().to_string(),
            distance_miles: ride.distance_miles(),
            fare: ride.fare(),
        }
    }
}

/// Snapshot of one driver; rides are referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverSnapshot {
    pub id: DriverId,
    pub name: String,
    pub rating: f64,
    pub completed_rides: usize,
    pub ride_ids: Vec<RideId>,
}

impl From<&Driver> for DriverSnapshot {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id(),
            name: driver.name().to_string(),
            rating: driver.rating(),
            completed_rides: driver.completed_rides(),
            ride_ids: driver.rides().iter().map(|ride| ride.id()).collect(),
        }
    }
}

/// Snapshot of one rider with full ride records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiderSnapshot {
    pub id: RiderId,
    pub name: String,
    pub rides: Vec<RideSnapshot>,
}

impl From<&Rider> for RiderSnapshot {
    fn from(rider: &Rider) -> Self {
        Self {
            id: rider.id(),
            name: rider.name().to_string(),
            rides: rider
                .rides()
                .iter()
                .map(|ride| RideSnapshot::from(ride.as_ref()))
                .collect(),
        }
    }
}

/// Everything a demonstration run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemoExport {
    pub rides: Vec<RideSnapshot>,
    pub drivers: Vec<DriverSnapshot>,
    pub riders: Vec<RiderSnapshot>,
    pub caught_errors: Vec<String>,
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
