//! Station identifiers and station records.

use std::fmt;

use super::TravelTime;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A valid station identifier such as `K1`.
///
/// Identifiers are non-empty and carry no leading or trailing whitespace.
/// This type guarantees that any `StationId` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationId;
///
/// let kizilay = StationId::parse("K1").unwrap();
/// assert_eq!(kizilay.as_str(), "K1");
///
/// // Empty and padded ids are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse(" K1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStationId {
                reason: "must not have surrounding whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of a station in the network's arena.
///
/// Handles are only meaningful for the network that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIdx(pub usize);

/// One entry of a station's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// The station at the other end of the connection.
    pub station: StationIdx,

    /// Travel time along the connection.
    pub travel_time: TravelTime,
}

/// A stop in the transit network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Unique key of the station.
    pub id: StationId,

    /// Human-readable name (e.g. "Kızılay").
    pub name: String,

    /// Line the station belongs to (e.g. "Kırmızı Hat").
    pub line: String,

    /// Connections in the order they were added.
    neighbors: Vec<Neighbor>,
}

impl Station {
    /// Create a station with no connections.
    pub fn new(id: StationId, name: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            line: line.into(),
            neighbors: Vec::new(),
        }
    }

    /// Connections from this station, in insertion order.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Returns true if this station already lists `other` as a neighbor.
    pub fn is_connected_to(&self, other: StationIdx) -> bool {
        self.neighbors.iter().any(|n| n.station == other)
    }

    /// Travel time to a directly connected station, if any.
    pub fn travel_time_to(&self, other: StationIdx) -> Option<TravelTime> {
        self.neighbors
            .iter()
            .find(|n| n.station == other)
            .map(|n| n.travel_time)
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: Neighbor) {
        self.neighbors.push(neighbor);
    }

    /// Lower the travel time to `other` if `travel_time` is faster.
    ///
    /// Returns true if the entry changed.
    pub(crate) fn lower_travel_time(&mut self, other: StationIdx, travel_time: TravelTime) -> bool {
        match self.neighbors.iter_mut().find(|n| n.station == other) {
            Some(n) if travel_time < n.travel_time => {
                n.travel_time = travel_time;
                true
            }
            _ => false,
        }
    }
}
