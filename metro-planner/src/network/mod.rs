//! The transit network graph.
//!
//! Stations live in an arena owned by [`Network`]; connections are stored
//! as adjacency entries that refer to other stations by [`StationIdx`].
//! Every connection is undirected: adding A–B records B in A's list and
//! A in B's list with the same travel time.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Neighbor, NetworkError, Station, StationId, StationIdx, TravelTime};

/// An undirected connection between two stations, as seen from the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection<'a> {
    /// The endpoint that was added to the network first.
    pub from: &'a Station,

    /// The other endpoint (the same station for a self-loop).
    pub to: &'a Station,

    /// Travel time in either direction.
    pub travel_time: TravelTime,
}

/// A collection of stations and the connections between them.
///
/// Stations are kept in insertion order, which is also the order
/// [`Network::stations`] yields them in.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    index: HashMap<StationId, StationIdx>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    ///
    /// Returns `false` and leaves the network untouched if a station with
    /// the same id already exists.
    pub fn add_station(
        &mut self,
        id: StationId,
        name: impl Into<String>,
        line: impl Into<String>,
    ) -> bool {
        if self.index.contains_key(&id) {
            debug!(station = %id, "Station already present, ignoring");
            return false;
        }

        let idx = StationIdx(self.stations.len());
        self.index.insert(id.clone(), idx);
        self.stations.push(Station::new(id, name, line));
        true
    }

    /// Connect two stations in both directions.
    ///
    /// Returns `false` if either station is unknown or the pair is already
    /// connected. An already-connected pair keeps the faster of the two
    /// travel times; otherwise the network is unchanged. Use
    /// [`Network::try_add_connection`] to find out why.
    pub fn add_connection(
        &mut self,
        a: &StationId,
        b: &StationId,
        travel_time: TravelTime,
    ) -> bool {
        match self.try_add_connection(a, b, travel_time) {
            Ok(()) => true,
            Err(e) => {
                debug!(from = %a, to = %b, error = %e, "Ignoring connection");
                false
            }
        }
    }

    /// Connect two stations in both directions, reporting why a connection
    /// could not be added.
    ///
    /// A station may be connected to itself; the loop is stored as a single
    /// neighbor entry.
    ///
    /// Connecting a pair again never adds a second entry. Both sides take
    /// the faster travel time and `DuplicateConnection` is still reported.
    pub fn try_add_connection(
        &mut self,
        a: &StationId,
        b: &StationId,
        travel_time: TravelTime,
    ) -> Result<(), NetworkError> {
        let a_idx = self
            .index_of(a)
            .ok_or_else(|| NetworkError::UnknownStation(a.clone()))?;
        let b_idx = self
            .index_of(b)
            .ok_or_else(|| NetworkError::UnknownStation(b.clone()))?;

        // Adjacency is symmetric, so one side is enough to detect a duplicate.
        if self.stations[a_idx.0].is_connected_to(b_idx) {
            if self.stations[a_idx.0].lower_travel_time(b_idx, travel_time) {
                self.stations[b_idx.0].lower_travel_time(a_idx, travel_time);
                debug!(
                    from = %a,
                    to = %b,
                    minutes = travel_time.as_minutes(),
                    "Faster duplicate connection"
                );
            }
            return Err(NetworkError::DuplicateConnection(a.clone(), b.clone()));
        }

        self.stations[a_idx.0].push_neighbor(Neighbor {
            station: b_idx,
            travel_time,
        });
        if a_idx != b_idx {
            self.stations[b_idx.0].push_neighbor(Neighbor {
                station: a_idx,
                travel_time,
            });
        }

        Ok(())
    }

    /// Look up a station by id.
    pub fn get_station(&self, id: &StationId) -> Option<&Station> {
        self.index_of(id).map(|idx| self.station(idx))
    }

    /// Look up the arena handle of a station.
    pub fn index_of(&self, id: &StationId) -> Option<StationIdx> {
        self.index.get(id).copied()
    }

    /// Resolve a handle issued by this network.
    ///
    /// # Panics
    ///
    /// Panics if `idx` was not issued by this network.
    pub fn station(&self, idx: StationIdx) -> &Station {
        &self.stations[idx.0]
    }

    /// Connections leaving the station at `idx`, in insertion order.
    pub fn neighbors(&self, idx: StationIdx) -> &[Neighbor] {
        self.station(idx).neighbors()
    }

    /// Check if a station with this id exists.
    pub fn contains(&self, id: &StationId) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations, in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Every connection exactly once, ordered by the earlier-added endpoint
    /// and then by that station's neighbor order.
    pub fn connections(&self) -> Vec<Connection<'_>> {
        self.stations
            .iter()
            .enumerate()
            .flat_map(|(i, station)| {
                station
                    .neighbors()
                    .iter()
                    .filter(move |n| n.station.0 >= i)
                    .map(move |n| Connection {
                        from: station,
                        to: self.station(n.station),
                        travel_time: n.travel_time,
                    })
            })
            .collect()
    }
}

/// Builder for creating networks from plain strings.
///
/// Provides a fluent API; entries with an invalid id or a zero travel time
/// are skipped.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, id: &str, name: &str, line: &str) -> Self {
        if let Ok(id) = StationId::parse(id) {
            self.inner.add_station(id, name, line);
        }
        self
    }

    /// Add a connection.
    pub fn connect(mut self, a: &str, b: &str, minutes: u32) -> Self {
        if let (Ok(a), Ok(b), Ok(t)) = (
            StationId::parse(a),
            StationId::parse(b),
            TravelTime::minutes(minutes),
        ) {
            self.inner.add_connection(&a, &b, t);
        }
        self
    }

    /// Build the network.
    pub fn build(self) -> Network {
        self.inner
    }
}

/// The Ankara red line demo network.
///
/// Four stations on one line: Kızılay, Ulus, Demetevler and OSB.
pub fn ankara_red_line() -> Network {
    NetworkBuilder::new()
        .station("K1", "Kızılay", "Kırmızı Hat")
        .station("K2", "Ulus", "Kırmızı Hat")
        .station("K3", "Demetevler", "Kırmızı Hat")
        .station("K4", "OSB", "Kırmızı Hat")
        .connect("K1", "K2", 4) // Kızılay -> Ulus
        .connect("K2", "K3", 6) // Ulus -> Demetevler
        .connect("K3", "K4", 8) // Demetevler -> OSB
        .build()
}
