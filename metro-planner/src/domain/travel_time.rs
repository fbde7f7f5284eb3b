//! Travel time along a connection.

use std::fmt;

use chrono::Duration;

/// Error returned when a travel time is not a positive number of minutes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel time: must be at least one minute")]
pub struct InvalidTravelTime;

/// Time taken to ride between two adjacent stations, in whole minutes.
///
/// Always positive, so searches over travel times never see negative or
/// zero-cost edges.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::TravelTime;
///
/// let t = TravelTime::minutes(4).unwrap();
/// assert_eq!(t.as_minutes(), 4);
/// assert_eq!(t.as_duration(), chrono::Duration::minutes(4));
///
/// assert!(TravelTime::minutes(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TravelTime(u32);

impl TravelTime {
    /// Create a travel time from a number of minutes.
    pub fn minutes(minutes: u32) -> Result<Self, InvalidTravelTime> {
        if minutes == 0 {
            return Err(InvalidTravelTime);
        }
        Ok(TravelTime(minutes))
    }

    /// Returns the travel time in minutes.
    pub fn as_minutes(&self) -> u32 {
        self.0
    }

    /// Returns the travel time as a Duration.
    pub fn as_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }
}

impl fmt::Debug for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelTime({}m)", self.0)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}
