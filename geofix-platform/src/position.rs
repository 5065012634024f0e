//! Position snapshot and provider identity types.

use serde::{Deserialize, Serialize};

/// Named positioning source queried for enablement and updates.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProviderId(pub String);

impl ProviderId {
    /// Create a new provider ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The satellite-based provider most platforms expose.
    pub fn gps() -> Self {
        Self("gps".to_string())
    }

    /// Get the provider ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProviderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single position fix as delivered by the platform.
///
/// The broker keeps one of these as its mutable last-position snapshot,
/// overwritten in place on every update. Fields mirror what the platform
/// reports; `timestamp_ms` is the source timestamp on inbound events, but
/// the broker's stored copy replaces it with wall-clock time at receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
    /// Altitude in meters above the reference ellipsoid.
    pub altitude: f64,
    /// Estimated horizontal accuracy in meters (68% confidence).
    pub accuracy: f64,
    /// Bearing in degrees clockwise from true north.
    pub bearing: f64,
    /// Ground speed in meters per second.
    pub speed: f64,
    /// Timestamp as Unix epoch milliseconds.
    pub timestamp_ms: u64,
    /// Provider that produced this fix.
    pub provider: ProviderId,
}

impl Position {
    /// The all-zero snapshot a broker starts from before any fix arrives.
    pub fn empty(provider: ProviderId) -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            altitude: 0.0,
            accuracy: 0.0,
            bearing: 0.0,
            speed: 0.0,
            timestamp_ms: 0,
            provider,
        }
    }

    /// Overwrite every field of this snapshot from another position.
    pub fn assign(&mut self, other: &Position) {
        self.latitude = other.latitude;
        self.longitude = other.longitude;
        self.altitude = other.altitude;
        self.accuracy = other.accuracy;
        self.bearing = other.bearing;
        self.speed = other.speed;
        self.timestamp_ms = other.timestamp_ms;
        self.provider = other.provider.clone();
    }
}
