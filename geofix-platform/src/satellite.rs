//! Visible-satellite descriptor.

use serde::{Deserialize, Serialize};

/// A single satellite as reported by a satellite-status snapshot.
///
/// The broker replaces its satellite set wholesale on each satellite-status
/// event, so these are plain value objects with no identity of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    /// Pseudo-random noise code identifying the satellite.
    pub prn: u16,
    /// Signal-to-noise ratio in dB.
    pub snr_db: f64,
    /// Elevation above the horizon in degrees (0 to 90).
    pub elevation_deg: f64,
    /// Azimuth in degrees clockwise from true north (0 to 360).
    pub azimuth_deg: f64,
    /// Whether this satellite was used to compute the most recent fix.
    pub used_in_fix: bool,
    /// Whether the platform holds ephemeris data for this satellite.
    pub has_ephemeris: bool,
    /// Whether the platform holds almanac data for this satellite.
    pub has_almanac: bool,
}

impl Satellite {
    /// Create a satellite descriptor with only signal data, no orbit data.
    pub fn new(prn: u16, snr_db: f64, elevation_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            prn,
            snr_db,
            elevation_deg,
            azimuth_deg,
            used_in_fix: false,
            has_ephemeris: false,
            has_almanac: false,
        }
    }

    /// Mark this satellite as participating in the current fix.
    pub fn used_in_fix(mut self) -> Self {
        self.used_in_fix = true;
        self
    }
}
