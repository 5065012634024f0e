//! The position update broker.
//!
//! [`PositionBroker`] maintains the set of interested observers, relays
//! the latest position and satellite set, latches the first-fix
//! transition, and exposes start/stop control over the underlying
//! provider subscription. Everything runs synchronously on the platform's
//! callback thread; the internal mutexes exist so registration and the
//! getters may also be called from other threads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use tracing::{debug, warn};

use geofix_platform::{
    LocationCallbacks, LocationService, PlatformContext, Position, ProviderId, ProviderStatus,
    ProviderStatusChange, Satellite, StatusEvent,
};

use crate::adapter::CallbackAdapter;
use crate::config::BrokerConfig;
use crate::observer::{ObserverRegistry, PositionObserver};
use crate::state::TrackingState;

/// Wall-clock time as Unix epoch milliseconds.
fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Broker internals shared with the callback adapter.
pub(crate) struct BrokerInner {
    context: Arc<dyn PlatformContext>,
    provider: ProviderId,
    service: Mutex<Option<Arc<dyn LocationService>>>,
    observers: ObserverRegistry,
    state: Mutex<TrackingState>,
    config: Mutex<BrokerConfig>,
    subscribed: AtomicBool,
}

impl BrokerInner {
    /// Acquire (or re-acquire) the service handle from the platform
    /// context, then report whether the provider is enabled. Acquisition
    /// failure leaves any previously held handle in place.
    fn init_service(&self) -> bool {
        match self.context.location_service() {
            Ok(service) => {
                *self.service.lock() = Some(service);
                let enabled = self.provider_enabled();
                if !enabled {
                    warn!(provider = %self.provider, "service acquired but provider disabled");
                }
                enabled
            }
            Err(e) => {
                warn!(error = %e, "location service acquisition failed");
                false
            }
        }
    }

    /// Provider enablement with the swallow policy: a missing handle or a
    /// failing platform query both read as "disabled".
    fn provider_enabled(&self) -> bool {
        let service = self.service.lock().clone();
        match service {
            Some(service) => match service.is_provider_enabled(&self.provider) {
                Ok(enabled) => enabled,
                Err(e) => {
                    debug!(error = %e, "enablement query failed, treating provider as disabled");
                    false
                }
            },
            None => false,
        }
    }

    /// Overwrite the stored snapshot (stamping receipt time), bump the
    /// update counter, then notify observers in registration order with
    /// the incoming position.
    pub(crate) fn handle_position_update(&self, incoming: &Position) {
        let received_at_ms = wall_clock_ms();
        let update_count = {
            let mut state = self.state.lock();
            state.record_position(incoming, received_at_ms);
            state.update_count
        };
        debug!(
            lat = incoming.latitude,
            lon = incoming.longitude,
            update_count,
            "position update"
        );

        // No lock held during fanout; observers may re-enter the broker.
        for observer in self.observers.snapshot() {
            observer.on_position_update(incoming);
        }
    }

    pub(crate) fn handle_status_event(&self, event: StatusEvent) {
        match event {
            StatusEvent::SatelliteStatus => {
                let service = self.service.lock().clone();
                if let Some(service) = service {
                    match service.satellite_snapshot() {
                        Ok(satellites) => {
                            debug!(count = satellites.len(), "satellite set replaced");
                            self.state.lock().replace_satellites(satellites);
                        }
                        Err(e) => warn!(error = %e, "satellite snapshot failed"),
                    }
                }
            }
            StatusEvent::Started | StatusEvent::Stopped => {
                debug!(%event, "positioning engine status");
            }
            StatusEvent::FirstFix => {
                let newly_latched = self.state.lock().latch_first_fix();
                if newly_latched {
                    debug!("first fix obtained");
                    for observer in self.observers.snapshot() {
                        observer.on_first_fix();
                    }
                }
            }
        }
    }

    pub(crate) fn handle_provider_status(&self, change: &ProviderStatusChange) {
        match change.status {
            ProviderStatus::Available => {
                debug!(provider = %change.provider, "provider available");
            }
            ProviderStatus::TemporarilyUnavailable => {
                debug!(provider = %change.provider, "provider temporarily unavailable");
            }
            ProviderStatus::OutOfService => {
                warn!(provider = %change.provider, "provider out of service");
            }
        }
    }
}

/// Listener-management broker over a platform location service.
///
/// Constructed with a [`PlatformContext`]; the service handle is acquired
/// immediately but updates only flow between an explicit [`start`] and
/// [`stop`]. Observers may be registered and unregistered at any time,
/// including while updates are active.
///
/// # Example
///
/// ```rust,ignore
/// let broker = PositionBroker::new(platform);
/// broker.register_observer(my_observer);
/// if broker.start() {
///     // position updates now flow to my_observer
/// }
/// broker.stop();
/// ```
///
/// [`start`]: PositionBroker::start
/// [`stop`]: PositionBroker::stop
pub struct PositionBroker {
    inner: Arc<BrokerInner>,
    adapter: Arc<CallbackAdapter>,
}

impl PositionBroker {
    /// Create a broker with default subscription hints.
    pub fn new(context: Arc<dyn PlatformContext>) -> Self {
        Self::with_config(context, BrokerConfig::default())
    }

    /// Create a broker with the given subscription hints.
    ///
    /// The service handle is acquired immediately; if the provider is
    /// disabled or acquisition fails this only logs a warning —
    /// [`start`](Self::start) will attempt one re-acquisition.
    pub fn with_config(context: Arc<dyn PlatformContext>, config: BrokerConfig) -> Self {
        let provider = ProviderId::gps();
        let inner = Arc::new(BrokerInner {
            context,
            provider: provider.clone(),
            service: Mutex::new(None),
            observers: ObserverRegistry::new(),
            state: Mutex::new(TrackingState::new(provider)),
            config: Mutex::new(config),
            subscribed: AtomicBool::new(false),
        });
        let adapter = Arc::new(CallbackAdapter::new(Arc::downgrade(&inner)));
        inner.init_service();
        Self { inner, adapter }
    }

    /// Add an observer to the notification list. Insertion order is
    /// notification order; registering the same observer twice notifies
    /// it twice. Returns whether the collection changed.
    pub fn register_observer(&self, observer: Arc<dyn PositionObserver>) -> bool {
        self.inner.observers.register(observer)
    }

    /// Remove the first occurrence of an observer, by `Arc` pointer
    /// identity. Returns whether the collection changed.
    pub fn unregister_observer(&self, observer: &Arc<dyn PositionObserver>) -> bool {
        self.inner.observers.unregister(observer)
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Whether the provider is currently enabled.
    ///
    /// Deliberate policy: if the query itself fails at the platform
    /// layer, this returns `false` rather than surfacing the failure.
    pub fn is_provider_enabled(&self) -> bool {
        self.inner.provider_enabled()
    }

    /// Subscribe for position updates.
    ///
    /// If the provider is disabled, attempts one re-acquisition of the
    /// service handle and re-checks; there is no retry or backoff beyond
    /// that. Subscribes only if the provider is enabled at that point.
    /// Returns whether subscription occurred. Calling `start` while
    /// already subscribed re-applies the current hints.
    pub fn start(&self) -> bool {
        if !self.inner.provider_enabled() {
            self.inner.init_service();
        }
        if !self.inner.provider_enabled() {
            warn!(provider = %self.inner.provider, "start refused, provider disabled");
            return false;
        }

        let Some(service) = self.inner.service.lock().clone() else {
            return false;
        };
        let hints = self.inner.config.lock().hints();
        let callbacks: Arc<dyn LocationCallbacks> = self.adapter.clone();
        match service.request_updates(&self.inner.provider, hints, callbacks) {
            Ok(()) => {
                self.inner.subscribed.store(true, Ordering::SeqCst);
                debug!(provider = %self.inner.provider, ?hints, "position updates started");
                true
            }
            Err(e) => {
                warn!(error = %e, "update subscription failed");
                false
            }
        }
    }

    /// Unsubscribe from position updates and clear the satellite set.
    ///
    /// Safe to call when not started. The first-fix latch is left as-is:
    /// it only clears by reconstructing the broker.
    pub fn stop(&self) {
        // Clone out of the guard before calling into the service, so a
        // platform that re-enters the broker from remove_updates cannot
        // deadlock on the service mutex.
        let service = self.inner.service.lock().clone();
        if let Some(service) = service {
            let callbacks: Arc<dyn LocationCallbacks> = self.adapter.clone();
            service.remove_updates(&callbacks);
        }
        self.inner.subscribed.store(false, Ordering::SeqCst);
        self.inner.state.lock().clear_satellites();
        debug!("position updates stopped");
    }

    /// Whether the first fix since updates started has been obtained.
    pub fn is_first_fix_obtained(&self) -> bool {
        self.inner.state.lock().first_fix
    }

    /// Whether an update subscription is currently active.
    pub fn is_subscribed(&self) -> bool {
        self.inner.subscribed.load(Ordering::SeqCst)
    }

    /// Minimum time hint, in milliseconds.
    pub fn min_time_ms(&self) -> u64 {
        self.inner.config.lock().min_time_ms
    }

    /// Set the minimum time hint. Takes effect at the next [`start`](Self::start).
    pub fn set_min_time_ms(&self, min_time_ms: u64) {
        self.inner.config.lock().min_time_ms = min_time_ms;
    }

    /// Minimum distance hint, in meters.
    pub fn min_distance_m(&self) -> f64 {
        self.inner.config.lock().min_distance_m
    }

    /// Set the minimum distance hint. Takes effect at the next [`start`](Self::start).
    pub fn set_min_distance_m(&self, min_distance_m: f64) {
        self.inner.config.lock().min_distance_m = min_distance_m;
    }

    /// The most recent position snapshot. Its timestamp is the wall-clock
    /// time of receipt, not the platform's source timestamp.
    pub fn last_position(&self) -> Position {
        self.inner.state.lock().last_position.clone()
    }

    /// The currently visible satellites.
    pub fn satellites(&self) -> Vec<Satellite> {
        self.inner.state.lock().satellites.clone()
    }

    /// Number of currently visible satellites.
    pub fn satellite_count(&self) -> usize {
        self.inner.state.lock().satellites.len()
    }

    /// Horizontal accuracy of the last position, in meters.
    pub fn accuracy(&self) -> f64 {
        self.inner.state.lock().last_position.accuracy
    }

    /// Number of position updates received since construction.
    pub fn update_count(&self) -> u64 {
        self.inner.state.lock().update_count
    }
}
