//! Ride entity: trip facts plus a fare computed by its attached policy.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::error::{RideError, RideResult};
use crate::pricing::{FarePolicy, FareSchedule, PremiumFare, RideKind, StandardFare};

/// Caller-assigned identifier. Uniqueness is not enforced.
pub type RideId = u32;

/// Handle shared between driver and rider histories.
///
/// Fare calculation through any clone is visible to every holder.
pub type SharedRide = Rc<Ride>;

#[derive(Debug)]
pub struct Ride {
    id: RideId,
    pickup: String,
    dropoff: String,
    distance_miles: f64,
    /// Zero until [`Ride::calculate_fare`] runs.
    fare: Cell<f64>,
    policy: Box<dyn FarePolicy>,
}

impl Ride {
    /// Create a ride with fare 0.
    ///
    /// Fails when `distance_miles` is not positive, or when `policy` would quote a
    /// negative or non-finite fare for it.
    pub fn new(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
        policy: Box<dyn FarePolicy>,
    ) -> RideResult<Self> {
        if distance_miles.is_nan() || distance_miles <= 0.0 {
            debug!(ride_id = id, distance_miles, "rejected ride with non-positive distance");
            return Err(RideError::InvalidDistance(distance_miles));
        }
        let quoted = policy.compute_fare(distance_miles);
        if !quoted.is_finite() || quoted < 0.0 {
            debug!(ride_id = id, quoted, variant = policy.label(), "rejected ride with invalid fare");
            return Err(RideError::InvalidFare(quoted));
        }
        Ok(Self {
            id,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
            fare: Cell::new(0.0),
            policy,
        })
    }

    /// Standard ride at the default per-mile rate.
    pub fn standard(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> RideResult<Self> {
        Self::new(id, pickup, dropoff, distance_miles, Box::new(StandardFare::default()))
    }

    /// Premium ride at the default per-mile rate.
    pub fn premium(
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> RideResult<Self> {
        Self::new(id, pickup, dropoff, distance_miles, Box::new(PremiumFare::default()))
    }

    /// Built-in variant priced from a configured schedule. The schedule is validated first.
    pub fn with_schedule(
        schedule: &FareSchedule,
        kind: RideKind,
        id: RideId,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> RideResult<Self> {
        Self::new(id, pickup, dropoff, distance_miles, schedule.policy(kind)?)
    }

    pub fn into_shared(self) -> SharedRide {
        Rc::new(self)
    }

    /// Recompute the fare from distance and policy. Idempotent.
    pub fn calculate_fare(&self) -> f64 {
        let fare = self.policy.compute_fare(self.distance_miles);
        self.fare.set(fare);
        debug!(
            ride_id = self.id,
            variant = self.policy.label(),
            distance_miles = self.distance_miles,
            fare,
            "fare calculated"
        );
        fare
    }

    /// Multi-line ride record; fare is printed with two decimals.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn id(&self) -> RideId {
        self.id
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    pub fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    pub fn fare(&self) -> f64 {
        self.fare.get()
    }

    pub fn variant_label(&self) -> &str {
        self.policy.label()
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ride ID: {}", self.id)?;
        writeln!(f, "Pickup: {}", self.pickup)?;
        writeln!(f, "Dropoff: {}", self.dropoff)?;
        writeln!(f, "Distance: {} miles", self.distance_miles)?;
        write!(
            f,
            "Fare: ${:.2} ({} Ride)",
            self.fare.get(),
            self.policy.label()
        )
    }
}
