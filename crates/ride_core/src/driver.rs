use std::fmt;

use tracing::debug;

use crate::error::{RideError, RideResult};
use crate::ride::SharedRide;

pub type DriverId = u32;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// A driver and the rides assigned to them, in assignment order.
#[derive(Debug)]
pub struct Driver {
    id: DriverId,
    name: String,
    rating: f64,
    assigned_rides: Vec<SharedRide>,
}

impl Driver {
    /// Fails when `rating` lies outside `0.0..=5.0`.
    pub fn new(id: DriverId, name: impl Into<String>, rating: f64) -> RideResult<Self> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            debug!(driver_id = id, rating, "rejected driver with out-of-range rating");
            return Err(RideError::InvalidRating(rating));
        }
        Ok(Self {
            id,
            name: name.into(),
            rating,
            assigned_rides: Vec::new(),
        })
    }

    /// Append a ride to the history. `None` is rejected and nothing is recorded.
    /// The same ride may be added more than once.
    pub fn add_ride(&mut self, ride: impl Into<Option<SharedRide>>) -> RideResult<()> {
        let ride = ride.into().ok_or(RideError::MissingRide)?;
        debug!(driver_id = self.id, ride_id = ride.id(), "ride assigned to driver");
        self.assigned_rides.push(ride);
        Ok(())
    }

    pub fn completed_rides(&self) -> usize {
        self.assigned_rides.len()
    }

    pub fn describe_info(&self) -> String {
        self.to_string()
    }

    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn rides(&self) -> &[SharedRide] {
        &self.assigned_rides
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Driver ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Rating: {:.2}", self.rating)?;
        write!(f, "Completed Rides: {}", self.completed_rides())
    }
}
