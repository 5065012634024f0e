//! # geofix-broker
//!
//! A listener-management broker over a platform location service: it
//! keeps the set of interested observers, relays the latest position and
//! satellite set, latches the first-fix transition, and exposes
//! start/stop control over the underlying provider subscription.
//!
//! The platform is abstracted behind the traits in [`geofix_platform`];
//! events flow platform → broker → registered [`PositionObserver`]s,
//! synchronously, on the platform's callback thread.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use geofix_broker::{PositionBroker, PositionObserver};
//! use geofix_platform::{Position, SimulatedLocationService, SimulatedPlatform};
//!
//! struct Printer;
//!
//! impl PositionObserver for Printer {
//!     fn on_position_update(&self, position: &Position) {
//!         println!("fix at {}, {}", position.latitude, position.longitude);
//!     }
//!     fn on_first_fix(&self) {
//!         println!("first fix");
//!     }
//! }
//!
//! let service = Arc::new(SimulatedLocationService::new());
//! let platform = Arc::new(SimulatedPlatform::new(Arc::clone(&service)));
//!
//! let broker = PositionBroker::new(platform);
//! broker.register_observer(Arc::new(Printer));
//! assert!(broker.start());
//! // ... the platform now drives updates through the broker ...
//! broker.stop();
//! ```
//!
//! ## Scope
//!
//! This is purely an in-process callback relay. There is no location
//! filtering, smoothing, multi-provider fusion, or persistence.

pub mod broker;
pub mod config;
pub mod logging;
pub mod observer;

pub(crate) mod adapter;
pub(crate) mod state;

pub use broker::PositionBroker;
pub use config::{BrokerConfig, ConfigError};
pub use observer::PositionObserver;

// Re-export the platform types observers interact with.
pub use geofix_platform::{Position, ProviderId, Satellite, ServiceError, StatusEvent};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BrokerConfig, Position, PositionBroker, PositionObserver, ProviderId, Satellite,
        ServiceError, StatusEvent,
    };
}
