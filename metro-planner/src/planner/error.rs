//! Route query errors.

use crate::domain::StationId;

/// Why a route query produced no route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Start or destination is not in the network
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// Both stations exist but nothing connects them
    #[error("no route from {from} to {to}")]
    NoPath { from: StationId, to: StationId },
}

impl RouteError {
    /// Every route error means "no route was found".
    ///
    /// Callers that don't care whether a station was missing or merely
    /// unreachable can match on this instead of the variants.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownStation(_) | Self::NoPath { .. })
    }
}
