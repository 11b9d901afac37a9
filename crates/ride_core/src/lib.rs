pub mod driver;
pub mod error;
pub mod export;
pub mod pricing;
pub mod ride;
pub mod rider;
pub mod scenario;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use driver::Driver;
pub use error::{ErrorKind, RideError, RideResult};
pub use pricing::{FarePolicy, FareSchedule, PremiumFare, RideKind, StandardFare};
pub use ride::{Ride, SharedRide};
pub use rider::Rider;
