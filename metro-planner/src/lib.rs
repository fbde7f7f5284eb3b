//! Metro route planner.
//!
//! Models a transit network as an undirected graph of stations joined by
//! timed connections, and answers two questions about it: which route
//! has the fewest stops, and which route takes the least time.

pub mod config;
pub mod domain;
pub mod export;
pub mod logging;
pub mod network;
pub mod planner;
