//! In-process location service for tests and examples.
//!
//! [`SimulatedLocationService`] implements [`LocationService`] over
//! settable state and exposes `emit_*` drivers that fan events out to
//! every subscribed sink, playing the role of the platform's callback
//! thread. [`SimulatedPlatform`] implements [`PlatformContext`] over it
//! with a switch that makes handle acquisition fail, so the broker's
//! single re-initialization attempt can be exercised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Result, ServiceError};
use crate::events::{ProviderStatusChange, StatusEvent};
use crate::position::{Position, ProviderId};
use crate::satellite::Satellite;
use crate::service::{LocationCallbacks, LocationService, PlatformContext, UpdateHints};

/// A scriptable, in-process [`LocationService`].
#[derive(Default)]
pub struct SimulatedLocationService {
    enabled: AtomicBool,
    fail_enablement_queries: AtomicBool,
    satellites: Mutex<Vec<Satellite>>,
    sinks: Mutex<Vec<Arc<dyn LocationCallbacks>>>,
    last_hints: Mutex<Option<UpdateHints>>,
}

impl SimulatedLocationService {
    /// Create a simulated service with the provider enabled.
    pub fn new() -> Self {
        let service = Self::default();
        service.enabled.store(true, Ordering::SeqCst);
        service
    }

    /// Enable or disable the simulated provider.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// When set, enablement queries fail with a platform error instead of
    /// answering. Used to exercise the caller's swallow policy.
    pub fn fail_enablement_queries(&self, fail: bool) {
        self.fail_enablement_queries.store(fail, Ordering::SeqCst);
    }

    /// Replace the satellite set the next snapshot will return.
    pub fn set_satellites(&self, satellites: Vec<Satellite>) {
        *self.satellites.lock() = satellites;
    }

    /// Number of currently subscribed sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.lock().len()
    }

    /// The hints passed with the most recent subscription, if any.
    pub fn last_hints(&self) -> Option<UpdateHints> {
        *self.last_hints.lock()
    }

    /// Deliver a position update to every subscribed sink.
    pub fn emit_position(&self, position: &Position) {
        for sink in self.snapshot_sinks() {
            sink.on_position_update(position);
        }
    }

    /// Deliver a status event to every subscribed sink.
    pub fn emit_status(&self, event: StatusEvent) {
        for sink in self.snapshot_sinks() {
            sink.on_status_event(event);
        }
    }

    /// Deliver a provider availability change to every subscribed sink.
    pub fn emit_provider_status(&self, change: &ProviderStatusChange) {
        for sink in self.snapshot_sinks() {
            sink.on_provider_status(change);
        }
    }

    fn snapshot_sinks(&self) -> Vec<Arc<dyn LocationCallbacks>> {
        self.sinks.lock().clone()
    }
}

impl LocationService for SimulatedLocationService {
    fn is_provider_enabled(&self, provider: &ProviderId) -> Result<bool> {
        if self.fail_enablement_queries.load(Ordering::SeqCst) {
            return Err(ServiceError::ProviderQuery {
                provider: provider.clone(),
                reason: "simulated query failure".to_string(),
            });
        }
        Ok(self.enabled.load(Ordering::SeqCst))
    }

    fn request_updates(
        &self,
        _provider: &ProviderId,
        hints: UpdateHints,
        callbacks: Arc<dyn LocationCallbacks>,
    ) -> Result<()> {
        *self.last_hints.lock() = Some(hints);
        let mut sinks = self.sinks.lock();
        if !sinks.iter().any(|s| Arc::ptr_eq(s, &callbacks)) {
            sinks.push(callbacks);
        }
        Ok(())
    }

    fn remove_updates(&self, callbacks: &Arc<dyn LocationCallbacks>) {
        self.sinks.lock().retain(|s| !Arc::ptr_eq(s, callbacks));
    }

    fn satellite_snapshot(&self) -> Result<Vec<Satellite>> {
        Ok(self.satellites.lock().clone())
    }
}

/// A [`PlatformContext`] over a [`SimulatedLocationService`].
pub struct SimulatedPlatform {
    service: Arc<SimulatedLocationService>,
    fail_acquisition: AtomicBool,
}

impl SimulatedPlatform {
    /// Create a platform context serving the given simulated service.
    pub fn new(service: Arc<SimulatedLocationService>) -> Self {
        Self {
            service,
            fail_acquisition: AtomicBool::new(false),
        }
    }

    /// When set, [`PlatformContext::location_service`] fails, as when the
    /// host platform cannot hand out the service.
    pub fn fail_acquisition(&self, fail: bool) {
        self.fail_acquisition.store(fail, Ordering::SeqCst);
    }

    /// The underlying simulated service, for driving events from tests.
    pub fn service(&self) -> Arc<SimulatedLocationService> {
        Arc::clone(&self.service)
    }
}

impl PlatformContext for SimulatedPlatform {
    fn location_service(&self) -> Result<Arc<dyn LocationService>> {
        if self.fail_acquisition.load(Ordering::SeqCst) {
            return Err(ServiceError::ServiceUnavailable(
                "simulated acquisition failure".to_string(),
            ));
        }
        Ok(Arc::clone(&self.service) as Arc<dyn LocationService>)
    }
}
