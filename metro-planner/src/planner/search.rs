//! Route search entry points and the bookkeeping both searches share.

use crate::domain::{Station, StationId, StationIdx, TravelTime};
use crate::network::Network;

use super::error::RouteError;
use super::route::Route;
use super::{bfs, dijkstra};

/// Where a search ended up.
///
/// Every search starts `Ready`, moves to `Exploring` once both endpoints
/// resolve, and finishes `Found` or `Exhausted`. A search that stays
/// `Ready` was rejected before exploring (unknown station).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Ready,
    Exploring,
    Found,
    Exhausted,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Final phase of the search.
    pub phase: SearchPhase,

    /// Stations taken off the frontier and expanded.
    pub expanded: usize,

    /// Entries pushed onto the frontier, including the start.
    pub pushed: usize,
}

impl SearchStats {
    pub(crate) fn new() -> Self {
        Self {
            phase: SearchPhase::Ready,
            expanded: 0,
            pushed: 0,
        }
    }
}

/// A search result together with the counters gathered producing it.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub result: Result<Route<'a>, RouteError>,
    pub stats: SearchStats,
}

/// Answers route queries against a network.
///
/// The planner only borrows the network, so any number of planners can
/// query the same network at once.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    network: &'a Network,
}

impl<'a> Planner<'a> {
    /// Create a planner over `network`.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Route with the fewest stops between two stations.
    pub fn find_fewest_stops(
        &self,
        start: &StationId,
        end: &StationId,
    ) -> Result<Route<'a>, RouteError> {
        bfs::search(self.network, start, end).result
    }

    /// Route with the least total travel time between two stations.
    pub fn find_minimum_time(
        &self,
        start: &StationId,
        end: &StationId,
    ) -> Result<Route<'a>, RouteError> {
        dijkstra::search(self.network, start, end).result
    }
}

/// Route with the fewest stops between two stations.
///
/// # Example
///
/// ```
/// use metro_planner::domain::StationId;
/// use metro_planner::network::ankara_red_line;
/// use metro_planner::planner::find_fewest_stops;
///
/// let network = ankara_red_line();
/// let k1 = StationId::parse("K1").unwrap();
/// let k4 = StationId::parse("K4").unwrap();
///
/// let route = find_fewest_stops(&network, &k1, &k4).unwrap();
/// assert_eq!(route.hops(), 3);
/// ```
pub fn find_fewest_stops<'a>(
    network: &'a Network,
    start: &StationId,
    end: &StationId,
) -> Result<Route<'a>, RouteError> {
    Planner::new(network).find_fewest_stops(start, end)
}

/// Route with the least total travel time between two stations.
pub fn find_minimum_time<'a>(
    network: &'a Network,
    start: &StationId,
    end: &StationId,
) -> Result<Route<'a>, RouteError> {
    Planner::new(network).find_minimum_time(start, end)
}

/// Resolve both endpoints, start first.
pub(super) fn resolve_endpoints(
    network: &Network,
    start: &StationId,
    end: &StationId,
) -> Result<(StationIdx, StationIdx), RouteError> {
    let start_idx = network
        .index_of(start)
        .ok_or_else(|| RouteError::UnknownStation(start.clone()))?;
    let end_idx = network
        .index_of(end)
        .ok_or_else(|| RouteError::UnknownStation(end.clone()))?;
    Ok((start_idx, end_idx))
}

/// The station each reached station was reached from, and over which edge.
///
/// The start has no entry, which is what stops the walk back.
pub(super) struct Parents {
    links: Vec<Option<(StationIdx, TravelTime)>>,
}

impl Parents {
    pub(super) fn new(network: &Network) -> Self {
        Self {
            links: vec![None; network.len()],
        }
    }

    pub(super) fn set(&mut self, station: StationIdx, parent: StationIdx, via: TravelTime) {
        self.links[station.0] = Some((parent, via));
    }

    /// Walk back from `last` to the start and build the route.
    pub(super) fn route_to<'a>(&self, network: &'a Network, last: StationIdx) -> Route<'a> {
        let mut stations: Vec<&'a Station> = vec![network.station(last)];
        let mut total_minutes = 0u64;
        let mut current = last;

        while let Some((parent, via)) = self.links[current.0] {
            stations.push(network.station(parent));
            total_minutes += u64::from(via.as_minutes());
            current = parent;
        }

        stations.reverse();
        Route::new(stations, total_minutes)
    }
}
