//! Status events delivered by the platform positioning service.

use crate::position::ProviderId;

/// Coarse positioning-engine events.
///
/// These arrive on the same callback thread as position updates. The
/// broker reacts to `SatelliteStatus` and `FirstFix`; `Started` and
/// `Stopped` are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// The set of visible satellites changed; a fresh snapshot is
    /// available from [`LocationService::satellite_snapshot`].
    ///
    /// [`LocationService::satellite_snapshot`]: crate::service::LocationService::satellite_snapshot
    SatelliteStatus,
    /// The positioning engine started producing updates.
    Started,
    /// The positioning engine stopped producing updates.
    Stopped,
    /// The first successful fix since updates started.
    FirstFix,
}

impl std::fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusEvent::SatelliteStatus => write!(f, "satellite status"),
            StatusEvent::Started => write!(f, "started"),
            StatusEvent::Stopped => write!(f, "stopped"),
            StatusEvent::FirstFix => write!(f, "first fix"),
        }
    }
}

/// Availability of a positioning provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    /// The provider is producing fixes.
    Available,
    /// The provider is temporarily unable to produce fixes (e.g. no sky
    /// view) but is expected to recover.
    TemporarilyUnavailable,
    /// The provider is out of service with no expected recovery.
    OutOfService,
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderStatus::Available => write!(f, "available"),
            ProviderStatus::TemporarilyUnavailable => write!(f, "temporarily unavailable"),
            ProviderStatus::OutOfService => write!(f, "out of service"),
        }
    }
}

/// A provider availability change, with any platform-specific extras.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderStatusChange {
    /// Provider whose availability changed.
    pub provider: ProviderId,
    /// New availability.
    pub status: ProviderStatus,
    /// Opaque key/value extras supplied by the platform.
    pub extras: Vec<(String, String)>,
}

impl ProviderStatusChange {
    /// Create a status change with no extras.
    pub fn new(provider: ProviderId, status: ProviderStatus) -> Self {
        Self {
            provider,
            status,
            extras: Vec::new(),
        }
    }
}
