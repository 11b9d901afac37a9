//! Errors raised by ride, driver and rider operations.

use thiserror::Error;

/// Coarse classification of a [`RideError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied input that violates a precondition.
    InvalidArgument,
    /// Anything the domain model does not anticipate.
    UnexpectedFailure,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RideError {
    /// Carries the rejected distance.
    #[error("Distance must be greater than 0")]
    InvalidDistance(f64),
    #[error("Rating must be between 0 and 5")]
    InvalidRating(f64),
    #[error("Rate per mile must be a positive number")]
    InvalidRate(f64),
    /// A fare policy quoted a negative or non-finite fare.
    #[error("Fare must not be negative")]
    InvalidFare(f64),
    #[error("Invalid ride reference")]
    MissingRide,
    #[error("Invalid fare configuration: {0}")]
    Config(String),
}

impl RideError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RideError::InvalidDistance(_)
            | RideError::InvalidRating(_)
            | RideError::InvalidRate(_)
            | RideError::InvalidFare(_)
            | RideError::MissingRide => ErrorKind::InvalidArgument,
            RideError::Config(_) => ErrorKind::UnexpectedFailure,
        }
    }
}

pub type RideResult<T> = Result<T, RideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_violated_precondition() {
        assert!(RideError::InvalidDistance(-5.0)
            .to_string()
            .starts_with("Distance must be greater than 0"));
        assert!(RideError::InvalidRating(6.0)
            .to_string()
            .starts_with("Rating must be between 0 and 5"));
        assert_eq!(RideError::MissingRide.to_string(), "Invalid ride reference");
    }

    #[test]
    fn validation_errors_are_invalid_argument() {
        assert_eq!(RideError::MissingRide.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            RideError::InvalidDistance(0.0).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(RideError::InvalidRate(-1.5).kind(), ErrorKind::InvalidArgument);
        assert_eq!(RideError::InvalidFare(-7.5).kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            RideError::Config("bad".into()).kind(),
            ErrorKind::UnexpectedFailure
        );
    }
}
