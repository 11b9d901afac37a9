//! Demonstration scenarios: build rides, drivers and riders and render what they report.
//!
//! The runner only constructs domain objects and reads their records; nothing in the
//! domain model depends on it.

use std::fmt;

use tracing::info;

use crate::driver::Driver;
use crate::error::{ErrorKind, RideError, RideResult};
use crate::export::{DemoExport, DriverSnapshot, RideSnapshot, RiderSnapshot};
use crate::pricing::{FareSchedule, RideKind};
use crate::ride::{Ride, RideId, SharedRide};
use crate::rider::Rider;

const SECTION_RULE: &str = "------------------------";

/// One titled block of the demonstration transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSection {
    pub title: String,
    pub body: Vec<String>,
}

impl ScenarioSection {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: Vec::new(),
        }
    }

    fn push(&mut self, text: impl Into<String>) {
        self.body.push(text.into());
    }
}

/// State and output of a full demonstration run.
#[derive(Debug)]
pub struct DemoRun {
    pub sections: Vec<ScenarioSection>,
    pub rides: Vec<SharedRide>,
    pub drivers: Vec<Driver>,
    pub riders: Vec<Rider>,
    /// Validation failures the demonstration provokes on purpose.
    pub caught_errors: Vec<RideError>,
}

impl DemoRun {
    /// Console transcript, one section after another.
    pub fn transcript(&self) -> String {
        self.to_string()
    }

    pub fn export(&self) -> DemoExport {
        DemoExport {
            rides: self
                .rides
                .iter()
                .map(|ride| RideSnapshot::from(ride.as_ref()))
                .collect(),
            drivers: self.drivers.iter().map(DriverSnapshot::from).collect(),
            riders: self.riders.iter().map(RiderSnapshot::from).collect(),
            caught_errors: self.caught_errors.iter().map(ToString::to_string).collect(),
        }
    }
}

impl fmt::Display for DemoRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Testing Common Scenarios ===")?;
        writeln!(f)?;
        for section in &self.sections {
            writeln!(f, "{}", section.title)?;
            writeln!(f, "{SECTION_RULE}")?;
            for text in &section.body {
                writeln!(f, "{text}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

struct DemoBuilder<'a> {
    schedule: &'a FareSchedule,
    rides: Vec<SharedRide>,
}

impl DemoBuilder<'_> {
    fn priced_ride(
        &mut self,
        kind: RideKind,
        id: RideId,
        pickup: &str,
        dropoff: &str,
        distance_miles: f64,
    ) -> RideResult<SharedRide> {
        let ride =
            Ride::with_schedule(self.schedule, kind, id, pickup, dropoff, distance_miles)?
                .into_shared();
        ride.calculate_fare();
        self.rides.push(SharedRide::clone(&ride));
        Ok(ride)
    }
}

/// Run the five demonstration scenarios against `schedule`.
///
/// The two invalid constructions in the error-handling scenario are caught and
/// recorded; any other failure is returned to the caller.
pub fn run_demo(schedule: &FareSchedule) -> RideResult<DemoRun> {
    let mut builder = DemoBuilder {
        schedule,
        rides: Vec::new(),
    };
    let mut sections = Vec::new();

    let mut basic = ScenarioSection::new("Test 1: Basic Ride Creation");
    let standard = builder.priced_ride(RideKind::Standard, 1, "Home", "Work", 5.0)?;
    let premium = builder.priced_ride(RideKind::Premium, 2, "Home", "Airport", 15.0)?;
    basic.push(format!("Standard Ride ({} miles):", standard.distance_miles()));
    basic.push(standard.describe());
    basic.push("");
    basic.push(format!("Premium Ride ({} miles):", premium.distance_miles()));
    basic.push(premium.describe());
    sections.push(basic);

    let mut driver_section = ScenarioSection::new("Test 2: Driver with Multiple Rides");
    let mut driver = Driver::new(101, "John Doe", 4.8)?;
    driver.add_ride(builder.priced_ride(RideKind::Standard, 3, "Downtown", "Mall", 3.0)?)?;
    driver.add_ride(builder.priced_ride(RideKind::Premium, 4, "Mall", "Airport", 12.0)?)?;
    driver_section.push(driver.describe_info());
    sections.push(driver_section);

    let mut rider_section = ScenarioSection::new("Test 3: Rider with Ride History");
    let mut rider = Rider::new(201, "Alice");
    rider.request_ride(builder.priced_ride(RideKind::Standard, 5, "Home", "Gym", 2.0)?)?;
    rider.request_ride(builder.priced_ride(RideKind::Premium, 6, "Gym", "Restaurant", 4.0)?)?;
    rider_section.push(rider.view_rides());
    sections.push(rider_section);

    let mut mixed = ScenarioSection::new("Test 4: Polymorphism Demonstration");
    mixed.push("Same distance (8 miles), different ride types:");
    for (kind, id, pickup, dropoff) in [
        (RideKind::Standard, 7, "Point A", "Point B"),
        (RideKind::Premium, 8, "Point C", "Point D"),
    ] {
        let ride = builder.priced_ride(kind, id, pickup, dropoff, 8.0)?;
        mixed.push(ride.describe());
    }
    sections.push(mixed);

    let mut errors = ScenarioSection::new("Test 5: Error Handling");
    let mut caught_errors = Vec::new();
    let invalid_driver = Driver::new(102, "Invalid", 6.0).map(|_| ());
    let invalid_ride = Ride::with_schedule(schedule, RideKind::Standard, 9, "Start", "End", -5.0)
        .map(|_| ());
    for outcome in [invalid_driver, invalid_ride] {
        match outcome {
            Err(err) if err.kind() == ErrorKind::InvalidArgument => {
                errors.push(format!("Caught expected error: {err}"));
                caught_errors.push(err);
            }
            Err(err) => return Err(err),
            Ok(()) => errors.push("No error raised for invalid input"),
        }
    }
    sections.push(errors);

    info!(
        rides = builder.rides.len(),
        caught_errors = caught_errors.len(),
        "demonstration scenarios finished"
    );

    Ok(DemoRun {
        sections,
        rides: builder.rides,
        drivers: vec![driver],
        riders: vec![rider],
        caught_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_five_sections() {
        let run = run_demo(&FareSchedule::default()).expect("demo should run");
        let titles: Vec<_> = run.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Test 1: Basic Ride Creation",
                "Test 2: Driver with Multiple Rides",
                "Test 3: Rider with Ride History",
                "Test 4: Polymorphism Demonstration",
                "Test 5: Error Handling",
            ]
        );
        assert_eq!(run.rides.len(), 8);
    }

    #[test]
    fn demo_catches_both_expected_errors() {
        let run = run_demo(&FareSchedule::default()).expect("demo should run");
        assert_eq!(
            run.caught_errors,
            vec![RideError::InvalidRating(6.0), RideError::InvalidDistance(-5.0)]
        );
        let transcript = run.transcript();
        assert!(transcript.contains("Caught expected error: Rating must be between 0 and 5"));
        assert!(transcript.contains("Caught expected error: Distance must be greater than 0"));
    }
}
