//! Routes returned by the planner.

use std::fmt;

use chrono::Duration;

use crate::domain::{Station, StationId};

/// A path through the network, from start to destination inclusive.
///
/// A route always contains at least one station; a query whose start and
/// destination coincide yields a single-station route with zero travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'a> {
    stations: Vec<&'a Station>,
    total_minutes: u64,
}

impl<'a> Route<'a> {
    /// Create a route. `stations` must be non-empty.
    pub(crate) fn new(stations: Vec<&'a Station>, total_minutes: u64) -> Self {
        debug_assert!(!stations.is_empty(), "route must contain a station");
        Self {
            stations,
            total_minutes,
        }
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[&'a Station] {
        &self.stations
    }

    /// The first station.
    pub fn start(&self) -> &'a Station {
        self.stations[0]
    }

    /// The last station.
    pub fn destination(&self) -> &'a Station {
        self.stations[self.stations.len() - 1]
    }

    /// Number of connections ridden.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    /// Sum of the travel times of every connection ridden.
    pub fn total_minutes(&self) -> u64 {
        self.total_minutes
    }

    /// Returns the total travel time as a Duration.
    pub fn total_duration(&self) -> Duration {
        Duration::minutes(i64::try_from(self.total_minutes).unwrap_or(i64::MAX))
    }

    /// Station ids in travel order.
    pub fn ids(&self) -> Vec<&'a StationId> {
        self.stations.iter().map(|s| &s.id).collect()
    }
}

/// Renders station names joined by arrows, e.g. `Kızılay -> Ulus`.
impl fmt::Display for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(&station.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, name: &str) -> Station {
        Station::new(StationId::parse(id).unwrap(), name, "Kırmızı Hat")
    }

    #[test]
    fn single_station_route() {
        let k1 = station("K1", "Kızılay");
        let route = Route::new(vec![&k1], 0);

        assert_eq!(route.hops(), 0);
        assert_eq!(route.start(), &k1);
        assert_eq!(route.destination(), &k1);
        assert_eq!(route.total_duration(), Duration::zero());
        assert_eq!(route.to_string(), "Kızılay");
    }

    #[test]
    fn accessors() {
        let k1 = station("K1", "Kızılay");
        let k2 = station("K2", "Ulus");
        let k3 = station("K3", "Demetevler");
        let route = Route::new(vec![&k1, &k2, &k3], 10);

        assert_eq!(route.hops(), 2);
        assert_eq!(route.start().name, "Kızılay");
        assert_eq!(route.destination().name, "Demetevler");
        assert_eq!(route.total_minutes(), 10);
        assert_eq!(route.total_duration(), Duration::minutes(10));

        let ids: Vec<&str> = route.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["K1", "K2", "K3"]);
    }

    #[test]
    fn display_joins_names() {
        let k1 = station("K1", "Kızılay");
        let k2 = station("K2", "Ulus");
        let route = Route::new(vec![&k1, &k2], 4);

        assert_eq!(format!("{}", route), "Kızılay -> Ulus");
    }
}
