//! Traits at the platform seam.
//!
//! [`LocationService`] models the subscription surface of the host
//! platform's positioning service; [`PlatformContext`] models acquiring
//! the service handle itself. [`LocationCallbacks`] is the shape of the
//! callbacks the platform delivers to a subscriber — the broker implements
//! it on an internal adapter so its public observer contract stays
//! separate from the platform's callback interface.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::events::{ProviderStatusChange, StatusEvent};
use crate::position::{Position, ProviderId};
use crate::satellite::Satellite;

/// Power/precision hints passed opaquely to the platform subscription call.
///
/// The platform is free to honor these loosely: actual time between
/// updates may be greater or lesser than `min_time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateHints {
    /// Minimum time interval between update callbacks.
    pub min_time: Duration,
    /// Minimum distance interval between update callbacks, in meters.
    pub min_distance_m: f64,
}

impl UpdateHints {
    /// Create hints from raw milliseconds/meters values.
    pub fn new(min_time_ms: u64, min_distance_m: f64) -> Self {
        Self {
            min_time: Duration::from_millis(min_time_ms),
            min_distance_m,
        }
    }
}

/// The callback shape the platform delivers subscription events through.
///
/// All three callbacks are delivered on the platform's callback thread.
/// Implementations must be cheap and non-blocking.
pub trait LocationCallbacks: Send + Sync {
    /// A new position fix was computed.
    fn on_position_update(&self, position: &Position);

    /// A provider's availability changed.
    fn on_provider_status(&self, change: &ProviderStatusChange);

    /// A coarse engine status event occurred.
    fn on_status_event(&self, event: StatusEvent);
}

/// The subscription surface of the platform positioning service.
pub trait LocationService: Send + Sync {
    /// Whether the given provider is currently enabled.
    ///
    /// Errors here mean the query itself failed at the platform layer,
    /// which callers typically treat the same as "disabled".
    fn is_provider_enabled(&self, provider: &ProviderId) -> Result<bool>;

    /// Subscribe `callbacks` to updates from `provider` under the given
    /// hints. The same sink may be subscribed at most once; a duplicate
    /// request replaces the previous hints.
    fn request_updates(
        &self,
        provider: &ProviderId,
        hints: UpdateHints,
        callbacks: Arc<dyn LocationCallbacks>,
    ) -> Result<()>;

    /// Unsubscribe a previously registered sink, identified by pointer
    /// identity. A no-op when the sink was never subscribed.
    fn remove_updates(&self, callbacks: &Arc<dyn LocationCallbacks>);

    /// The full set of currently visible satellites.
    ///
    /// Only meaningful immediately after a
    /// [`StatusEvent::SatelliteStatus`] event.
    fn satellite_snapshot(&self) -> Result<Vec<Satellite>>;
}

/// Acquisition of the platform location service handle.
///
/// This is the seam the broker re-drives on its single re-initialization
/// attempt when `start()` finds the provider disabled.
pub trait PlatformContext: Send + Sync {
    /// Acquire (or re-acquire) the location service handle.
    fn location_service(&self) -> Result<Arc<dyn LocationService>>;
}
