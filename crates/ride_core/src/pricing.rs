//! Per-mile fare policies and the configurable rate schedule behind them.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RideError, RideResult};

/// Standard per-mile rate in currency units (e.g., dollars).
pub const STANDARD_PER_MILE: f64 = 1.50;

/// Premium per-mile rate in currency units.
pub const PREMIUM_PER_MILE: f64 = 3.00;

/// Trait for fare rules that can be attached to a ride.
///
/// A policy sees only the trip distance. Rides, drivers and riders depend on this
/// capability alone, so new ride variants are added by implementing it.
///
/// # Examples
///
/// ```rust
/// use ride_core::pricing::FarePolicy;
///
/// #[derive(Debug)]
/// struct XlFare;
///
/// impl FarePolicy for XlFare {
///     fn compute_fare(&self, distance_miles: f64) -> f64 {
///         distance_miles * 2.25
///     }
///
///     fn label(&self) -> &str {
///         "XL"
///     }
/// }
///
/// assert_eq!(XlFare.compute_fare(4.0), 9.0);
/// ```
pub trait FarePolicy: fmt::Debug {
    /// Fare for a trip of `distance_miles`. Must not be negative.
    fn compute_fare(&self, distance_miles: f64) -> f64;

    /// Variant name rendered in ride records as `(<label> Ride)`.
    fn label(&self) -> &str;
}

fn checked_rate(per_mile: f64) -> RideResult<f64> {
    if !per_mile.is_finite() || per_mile <= 0.0 {
        return Err(RideError::InvalidRate(per_mile));
    }
    Ok(per_mile)
}

/// Standard ride: $1.50 per mile unless the schedule says otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardFare {
    per_mile: f64,
}

impl StandardFare {
    /// Fails unless `per_mile` is finite and positive.
    pub fn new(per_mile: f64) -> RideResult<Self> {
        Ok(Self {
            per_mile: checked_rate(per_mile)?,
        })
    }

    pub fn per_mile(&self) -> f64 {
        self.per_mile
    }
}

impl Default for StandardFare {
    fn default() -> Self {
        Self {
            per_mile: STANDARD_PER_MILE,
        }
    }
}

impl FarePolicy for StandardFare {
    fn compute_fare(&self, distance_miles: f64) -> f64 {
        distance_miles * self.per_mile
    }

    fn label(&self) -> &str {
        "Standard"
    }
}

/// Premium ride: $3.00 per mile unless the schedule says otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PremiumFare {
    per_mile: f64,
}

impl PremiumFare {
    /// Fails unless `per_mile` is finite and positive.
    pub fn new(per_mile: f64) -> RideResult<Self> {
        Ok(Self {
            per_mile: checked_rate(per_mile)?,
        })
    }

    pub fn per_mile(&self) -> f64 {
        self.per_mile
    }
}

impl Default for PremiumFare {
    fn default() -> Self {
        Self {
            per_mile: PREMIUM_PER_MILE,
        }
    }
}

impl FarePolicy for PremiumFare {
    fn compute_fare(&self, distance_miles: f64) -> f64 {
        distance_miles * self.per_mile
    }

    fn label(&self) -> &str {
        "Premium"
    }
}

/// Built-in ride variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideKind {
    Standard,
    Premium,
}

/// Per-mile rates for the built-in variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareSchedule {
    pub standard_per_mile: f64,
    pub premium_per_mile: f64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            standard_per_mile: STANDARD_PER_MILE,
            premium_per_mile: PREMIUM_PER_MILE,
        }
    }
}

impl FareSchedule {
    pub fn with_standard_rate(mut self, per_mile: f64) -> Self {
        self.standard_per_mile = per_mile;
        self
    }

    pub fn with_premium_rate(mut self, per_mile: f64) -> Self {
        self.premium_per_mile = per_mile;
        self
    }

    /// Parse a schedule from JSON. Missing fields keep their default rate.
    pub fn from_json_str(json: &str) -> RideResult<Self> {
        let schedule: FareSchedule =
            serde_json::from_str(json).map_err(|err| RideError::Config(err.to_string()))?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Read and parse a JSON schedule file.
    pub fn load(path: &Path) -> RideResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            RideError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_json_str(&contents)
    }

    /// Rates must be finite and strictly positive.
    pub fn validate(&self) -> RideResult<()> {
        for (name, rate) in [
            ("standard_per_mile", self.standard_per_mile),
            ("premium_per_mile", self.premium_per_mile),
        ] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RideError::Config(format!(
                    "{name} must be a positive number (got {rate})"
                )));
            }
        }
        Ok(())
    }

    /// Policy object for one of the built-in variants. Fails on an invalid schedule.
    pub fn policy(&self, kind: RideKind) -> RideResult<Box<dyn FarePolicy>> {
        self.validate()?;
        Ok(match kind {
            RideKind::Standard => Box::new(StandardFare::new(self.standard_per_mile)?),
            RideKind::Premium => Box::new(PremiumFare::new(self.premium_per_mile)?),
        })
    }
}
