//! Minimum-time search.
//!
//! Dijkstra's algorithm with lazy deletion: every neighbor of a newly
//! settled station is pushed unconditionally, and entries for stations
//! that were already settled at an equal or lower cost are dropped when
//! popped. Travel times are always positive, so the first time the
//! destination is popped its cost is minimal.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{StationId, StationIdx, TravelTime};
use crate::network::Network;

use super::error::RouteError;
use super::search::{Parents, SearchOutcome, SearchPhase, SearchStats, resolve_endpoints};

/// A pending candidate: reach `station` at `cost` via `parent`.
///
/// Ordered by cost, then by push sequence, so equal-cost candidates come
/// out in the order they went in and stations are never compared.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    cost: u64,
    seq: u64,
    station: StationIdx,
    parent: Option<(StationIdx, TravelTime)>,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Run a minimum-time search from `start` to `end`.
pub fn search<'a>(
    network: &'a Network,
    start: &StationId,
    end: &StationId,
) -> SearchOutcome<'a> {
    let mut stats = SearchStats::new();

    let (start_idx, end_idx) = match resolve_endpoints(network, start, end) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            return SearchOutcome {
                result: Err(e),
                stats,
            };
        }
    };

    stats.phase = SearchPhase::Exploring;

    // Lowest cost each station has been settled at.
    let mut settled: Vec<Option<u64>> = vec![None; network.len()];
    let mut parents = Parents::new(network);
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    heap.push(Reverse(HeapEntry {
        cost: 0,
        seq,
        station: start_idx,
        parent: None,
    }));
    stats.pushed += 1;

    while let Some(Reverse(entry)) = heap.pop() {
        if let Some((parent, via)) = entry.parent {
            if entry.station == end_idx || settled[entry.station.0].is_none() {
                parents.set(entry.station, parent, via);
            }
        }

        if entry.station == end_idx {
            stats.phase = SearchPhase::Found;
            let route = parents.route_to(network, entry.station);
            debug_assert_eq!(route.total_minutes(), entry.cost);
            debug!(
                from = %start,
                to = %end,
                minutes = entry.cost,
                hops = route.hops(),
                expanded = stats.expanded,
                "Minimum-time search found route"
            );
            return SearchOutcome {
                result: Ok(route),
                stats,
            };
        }

        if settled[entry.station.0].is_some_and(|best| best <= entry.cost) {
            continue;
        }
        settled[entry.station.0] = Some(entry.cost);

        stats.expanded += 1;
        trace!(
            station = %network.station(entry.station).id,
            cost = entry.cost,
            pending = heap.len(),
            "Dijkstra settling station"
        );

        for neighbor in network.neighbors(entry.station) {
            seq += 1;
            heap.push(Reverse(HeapEntry {
                cost: entry.cost + u64::from(neighbor.travel_time.as_minutes()),
                seq,
                station: neighbor.station,
                parent: Some((entry.station, neighbor.travel_time)),
            }));
            stats.pushed += 1;
        }
    }

    stats.phase = SearchPhase::Exhausted;
    debug!(
        from = %start,
        to = %end,
        expanded = stats.expanded,
        "Minimum-time search exhausted"
    );

    SearchOutcome {
        result: Err(RouteError::NoPath {
            from: start.clone(),
            to: end.clone(),
        }),
        stats,
    }
}
