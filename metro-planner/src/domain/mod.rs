//! Domain types for the metro route planner.
//!
//! This module contains the value types the network and the planner are
//! built from. All types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod error;
mod station;
mod travel_time;

pub use error::NetworkError;
pub use station::{InvalidStationId, Neighbor, Station, StationId, StationIdx};
pub use travel_time::{InvalidTravelTime, TravelTime};
