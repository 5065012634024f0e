//! Thin adapter between the platform's callback shape and the broker.
//!
//! The broker's public contract is the [`PositionObserver`] trait; the
//! platform's is [`LocationCallbacks`]. Keeping them apart means the
//! broker never leaks the platform's callback interface to application
//! code. The adapter holds a weak reference, so a stray late callback
//! delivered after the broker is gone is a logged no-op rather than a
//! use-after-free hazard.
//!
//! [`PositionObserver`]: crate::observer::PositionObserver

use std::sync::Weak;

use tracing::debug;

use geofix_platform::{LocationCallbacks, Position, ProviderStatusChange, StatusEvent};

use crate::broker::BrokerInner;

pub(crate) struct CallbackAdapter {
    inner: Weak<BrokerInner>,
}

impl CallbackAdapter {
    pub(crate) fn new(inner: Weak<BrokerInner>) -> Self {
        Self { inner }
    }
}

impl LocationCallbacks for CallbackAdapter {
    fn on_position_update(&self, position: &Position) {
        match self.inner.upgrade() {
            Some(inner) => inner.handle_position_update(position),
            None => debug!("dropping position update delivered after broker teardown"),
        }
    }

    fn on_provider_status(&self, change: &ProviderStatusChange) {
        match self.inner.upgrade() {
            Some(inner) => inner.handle_provider_status(change),
            None => debug!("dropping provider status delivered after broker teardown"),
        }
    }

    fn on_status_event(&self, event: StatusEvent) {
        match self.inner.upgrade() {
            Some(inner) => inner.handle_status_event(event),
            None => debug!("dropping status event delivered after broker teardown"),
        }
    }
}
