//! Plain data views of the network and of routes.
//!
//! The planner does no drawing. These types carry exactly what an
//! external renderer needs to draw a node-link diagram of the network,
//! and what a caller needs to print or serialize a route.

mod dto;

pub use dto::{ConnectionEdge, NetworkSnapshot, RouteSummary, StationNode};
