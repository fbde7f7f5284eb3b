//! Configuration for the demo binary.

use crate::domain::{InvalidStationId, StationId};

/// Environment variable naming the start station.
pub const FROM_VAR: &str = "METRO_FROM";

/// Environment variable naming the destination station.
pub const TO_VAR: &str = "METRO_TO";

/// Environment variable that turns on JSON output of the network and routes.
pub const EXPORT_VAR: &str = "METRO_EXPORT";

/// Start station used when `METRO_FROM` is unset.
pub const DEFAULT_FROM: &str = "K1";

/// Destination used when `METRO_TO` is unset.
pub const DEFAULT_TO: &str = "K4";

/// What the demo binary should query and print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Station the queries start from.
    pub from: StationId,

    /// Station the queries go to.
    pub to: StationId,

    /// Print the network snapshot and route summaries as JSON.
    pub export: bool,
}

impl DemoConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(from: StationId, to: StationId, export: bool) -> Self {
        Self { from, to, export }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, InvalidStationId> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    /// for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InvalidStationId> {
        let from = StationId::parse(&lookup(FROM_VAR).unwrap_or_else(|| DEFAULT_FROM.into()))?;
        let to = StationId::parse(&lookup(TO_VAR).unwrap_or_else(|| DEFAULT_TO.into()))?;
        let export = lookup(EXPORT_VAR)
            .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"));

        Ok(Self { from, to, export })
    }
}
