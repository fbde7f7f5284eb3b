//! Network construction errors.
//!
//! These are only produced by the strict construction path
//! (`Network::try_add_connection`). The lenient path ignores the same
//! conditions silently.

use super::StationId;

/// Errors raised while wiring up a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection referenced a station that was never added
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// The two stations are already connected
    #[error("stations {0} and {1} are already connected")]
    DuplicateConnection(StationId, StationId),
}
