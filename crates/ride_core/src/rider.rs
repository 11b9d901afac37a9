use std::fmt;

use tracing::debug;

use crate::error::{RideError, RideResult};
use crate::ride::SharedRide;

pub type RiderId = u32;

/// Printed by [`Rider::view_rides`] when the history is empty.
pub const NO_RIDES_MESSAGE: &str = "No rides requested yet.";

/// A rider and the rides they requested, in request order.
#[derive(Debug)]
pub struct Rider {
    id: RiderId,
    name: String,
    requested_rides: Vec<SharedRide>,
}

impl Rider {
    pub fn new(id: RiderId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            requested_rides: Vec::new(),
        }
    }

    /// Append a ride to the history. `None` is rejected and nothing is recorded.
    pub fn request_ride(&mut self, ride: impl Into<Option<SharedRide>>) -> RideResult<()> {
        let ride = ride.into().ok_or(RideError::MissingRide)?;
        debug!(rider_id = self.id, ride_id = ride.id(), "ride requested by rider");
        self.requested_rides.push(ride);
        Ok(())
    }

    /// Header followed by every requested ride record, or the empty-history message.
    pub fn view_rides(&self) -> String {
        self.to_string()
    }

    pub fn id(&self) -> RiderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rides(&self) -> &[SharedRide] {
        &self.requested_rides
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rider ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Requested Rides History:")?;
        if self.requested_rides.is_empty() {
            return write!(f, "\n{NO_RIDES_MESSAGE}");
        }
        for ride in &self.requested_rides {
            write!(f, "\n{ride}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ride::Ride;

    #[test]
    fn empty_history_prints_sentinel() {
        let rider = Rider::new(201, "Alice");
        assert_eq!(
            rider.view_rides(),
            "Rider ID: 201\nName: Alice\nRequested Rides History:\nNo rides requested yet."
        );
    }

    #[test]
    fn missing_ride_is_rejected() {
        let mut rider = Rider::new(201, "Alice");
        assert_eq!(rider.request_ride(None), Err(RideError::MissingRide));
        assert!(rider.rides().is_empty());
    }

    #[test]
    fn history_lists_rides_in_request_order() {
        let mut rider = Rider::new(201, "Alice");
        let gym = Ride::standard(5, "Home", "Gym", 2.0)
            .expect("valid ride")
            .into_shared();
        let dinner = Ride::premium(6, "Gym", "Restaurant", 4.0)
            .expect("valid ride")
            .into_shared();
        gym.calculate_fare();
        dinner.calculate_fare();
        rider.request_ride(gym).expect("request gym");
        rider.request_ride(dinner).expect("request dinner");

        let view = rider.view_rides();
        let gym_at = view.find("Ride ID: 5").expect("gym ride listed");
        let dinner_at = view.find("Ride ID: 6").expect("dinner ride listed");
        assert!(gym_at < dinner_at);
        assert!(view.contains("Fare: $3.00 (Standard Ride)"));
        assert!(view.contains("Fare: $12.00 (Premium Ride)"));
        assert!(!view.contains(NO_RIDES_MESSAGE));
    }
}
