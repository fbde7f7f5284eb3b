//! Serializable snapshots for renderers and route output.

use serde::{Deserialize, Serialize};

use crate::network::Network;
use crate::planner::Route;

/// A station as a diagram node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationNode {
    /// Station id
    pub id: String,

    /// Station name, used as the node label
    pub name: String,

    /// Line label
    pub line: String,
}

/// An undirected connection as a diagram edge between two station names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEdge {
    /// Name of one endpoint
    pub from: String,

    /// Name of the other endpoint
    pub to: String,

    /// Travel time in minutes
    pub minutes: u32,
}

/// Every station and every connection of a network, each listed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Stations in insertion order
    pub stations: Vec<StationNode>,

    /// Connections, one entry per undirected pair
    pub connections: Vec<ConnectionEdge>,
}

impl NetworkSnapshot {
    /// Capture the current state of a network.
    pub fn from_network(network: &Network) -> Self {
        let stations = network
            .stations()
            .map(|s| StationNode {
                id: s.id.as_str().to_string(),
                name: s.name.clone(),
                line: s.line.clone(),
            })
            .collect();

        let connections = network
            .connections()
            .iter()
            .map(|c| ConnectionEdge {
                from: c.from.name.clone(),
                to: c.to.name.clone(),
                minutes: c.travel_time.as_minutes(),
            })
            .collect();

        Self {
            stations,
            connections,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A route reduced to printable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Station ids in travel order
    pub ids: Vec<String>,

    /// Station names in travel order
    pub names: Vec<String>,

    /// Number of connections ridden
    pub hops: usize,

    /// Total travel time in minutes
    pub total_minutes: u64,
}

impl RouteSummary {
    /// Create from a planner Route.
    pub fn from_route(route: &Route<'_>) -> Self {
        Self {
            ids: route
                .stations()
                .iter()
                .map(|s| s.id.as_str().to_string())
                .collect(),
            names: route.stations().iter().map(|s| s.name.clone()).collect(),
            hops: route.hops(),
            total_minutes: route.total_minutes(),
        }
    }
}
