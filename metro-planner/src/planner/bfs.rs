//! Fewest-stops search.
//!
//! Plain breadth-first search from the start station. Stations are taken
//! off the queue in order of distance, so the first time the destination
//! comes off the queue its route has the fewest possible hops. Among
//! equally short routes, the one found through earlier-added connections
//! wins.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::StationId;
use crate::network::Network;

use super::error::RouteError;
use super::search::{Parents, SearchOutcome, SearchPhase, SearchStats, resolve_endpoints};

/// Run a fewest-stops search from `start` to `end`.
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

    // A station is queued at most once, so it is also expanded at most once.
    let mut queued = vec![false; network.len()];
    let mut parents = Parents::new(network);
    let mut frontier = VecDeque::new();

    queued[start_idx.0] = true;
    frontier.push_back(start_idx);
    stats.pushed += 1;

    while let Some(current) = frontier.pop_front() {
        if current == end_idx {
            stats.phase = SearchPhase::Found;
            let route = parents.route_to(network, current);
            debug!(
                from = %start,
                to = %end,
                hops = route.hops(),
                expanded = stats.expanded,
                "Fewest-stops search found route"
            );
            return SearchOutcome {
                result: Ok(route),
                stats,
            };
        }

        stats.expanded += 1;
        trace!(
            station = %network.station(current).id,
            queued = frontier.len(),
            "BFS expanding station"
        );

        for neighbor in network.neighbors(current) {
            if queued[neighbor.station.0] {
                continue;
            }
            queued[neighbor.station.0] = true;
            parents.set(neighbor.station, current, neighbor.travel_time);
            frontier.push_back(neighbor.station);
            stats.pushed += 1;
        }
    }

    stats.phase = SearchPhase::Exhausted;
    debug!(
        from = %start,
        to = %end,
        expanded = stats.expanded,
        "Fewest-stops search exhausted"
    );

    SearchOutcome {
        result: Err(RouteError::NoPath {
            from: start.clone(),
            to: end.clone(),
        }),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn ids(outcome: &SearchOutcome<'_>) -> Vec<String> {
        outcome
            .result
            .as_ref()
            .unwrap()
            .ids()
            .iter()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn unknown_station_never_explores() {
        let network = NetworkBuilder::new().station("A", "Alpha", "Red").build();

        let outcome = search(&network, &id("A"), &id("Z"));
        assert_eq!(outcome.result, Err(RouteError::UnknownStation(id("Z"))));
        assert_eq!(outcome.stats.phase, SearchPhase::Ready);
        assert_eq!(outcome.stats.pushed, 0);

        let outcome = search(&network, &id("Z"), &id("A"));
        assert_eq!(outcome.result, Err(RouteError::UnknownStation(id("Z"))));
    }

    #[test]
    fn start_equals_end() {
        let network = NetworkBuilder::new()
            .station("A", "Alpha", "Red")
            .station("B", "Bravo", "Red")
            .connect("A", "B", 3)
            .build();

        let outcome = search(&network, &id("A"), &id("A"));
        assert_eq!(ids(&outcome), vec!["A"]);
        assert_eq!(outcome.stats.phase, SearchPhase::Found);
        assert_eq!(outcome.stats.expanded, 0);
    }

    #[test]
    fn exhausted_when_disconnected() {
        let network = NetworkBuilder::new()
            .station("A", "Alpha", "Red")
            .station("B", "Bravo", "Red")
            .station("C", "Charlie", "Blue")
            .connect("A", "B", 3)
            .build();

        let outcome = search(&network, &id("A"), &id("C"));
        assert_eq!(
            outcome.result,
            Err(RouteError::NoPath {
                from: id("A"),
                to: id("C"),
            })
        );
        assert_eq!(outcome.stats.phase, SearchPhase::Exhausted);
        assert_eq!(outcome.stats.expanded, 2);
    }

    #[test]
    fn prefers_fewer_hops_over_shorter_time() {
        // A-B-C-D is quick, A-D direct is slow
        let network = NetworkBuilder::new()
            .station("A", "Alpha", "Red")
            .station("B", "Bravo", "Red")
            .station("C", "Charlie", "Red")
            .station("D", "Delta", "Red")
            .connect("A", "B", 1)
            .connect("B", "C", 1)
            .connect("C", "D", 1)
            .connect("A", "D", 50)
            .build();

        let outcome = search(&network, &id("A"), &id("D"));
        assert_eq!(ids(&outcome), vec!["A", "D"]);
        assert_eq!(outcome.result.unwrap().total_minutes(), 50);
    }

    #[test]
    fn ties_broken_by_connection_order() {
        // Diamond: A-B-D and A-C-D are both two hops
        let network = NetworkBuilder::new()
            .station("A", "Alpha", "Red")
            .station("B", "Bravo", "Red")
            .station("C", "Charlie", "Red")
            .station("D", "Delta", "Red")
            .connect("A", "C", 1)
            .connect("A", "B", 1)
            .connect("B", "D", 1)
            .connect("C", "D", 1)
            .build();

        // A lists C before B, so the route goes through C
        let outcome = search(&network, &id("A"), &id("D"));
        assert_eq!(ids(&outcome), vec!["A", "C", "D"]);
    }

    #[test]
    fn cycles_terminate() {
        let network = NetworkBuilder::new()
            .station("A", "Alpha", "Red")
            .station("B", "Bravo", "Red")
            .station("C", "Charlie", "Red")
            .station("Z", "Zulu", "Blue")
            .connect("A", "B", 1)
            .connect("B", "C", 1)
            .connect("C", "A", 1)
            .connect("A", "A", 1)
            .build();

        let outcome = search(&network, &id("A"), &id("Z"));
        assert!(outcome.result.is_err());
        assert_eq!(outcome.stats.expanded, 3);
        assert_eq!(outcome.stats.pushed, 3);
    }
}
