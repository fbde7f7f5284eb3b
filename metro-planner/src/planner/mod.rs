//! Route planning over a transit network.
//!
//! Two independent searches share the same inputs and outputs:
//!
//! - fewest stops: breadth-first search by number of connections ridden
//! - minimum time: Dijkstra's algorithm over connection travel times
//!
//! Both borrow the network read-only and allocate their own bookkeeping,
//! so they never affect each other.

mod bfs;
mod dijkstra;
mod error;
mod route;
mod search;


pub use error::RouteError;
pub use route::Route;
pub use search::{
    Planner, SearchOutcome, SearchPhase, SearchStats, find_fewest_stops, find_minimum_time,
};

/// Run a fewest-stops search and keep its counters.
pub use bfs::search as search_fewest_stops;

/// Run a minimum-time search and keep its counters.
pub use dijkstra::search as search_minimum_time;
