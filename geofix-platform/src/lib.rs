//! # geofix-platform
//!
//! Platform-facing abstraction for the geofix position broker.
//!
//! The host platform's positioning service is treated as a black box that
//! produces position updates, provider status changes, and coarse status
//! events (satellite status, started, stopped, first fix). This crate
//! defines the data types those events carry, the traits the broker uses
//! to talk to the platform, and an in-process [`SimulatedLocationService`]
//! for tests and examples.
//!
//! ## Key traits
//!
//! - [`LocationService`] — the subscription surface of the platform
//!   service: provider enablement queries, update subscriptions, and
//!   satellite snapshots.
//! - [`LocationCallbacks`] — the platform's callback shape. The broker
//!   implements this on a thin internal adapter; application code never
//!   implements it directly.
//! - [`PlatformContext`] — acquisition of the service handle itself,
//!   re-driven when the broker attempts its one re-initialization.

pub mod error;
pub mod events;
pub mod position;
pub mod satellite;
pub mod service;
pub mod simulator;

pub use error::{Result, ServiceError};
pub use events::{ProviderStatus, ProviderStatusChange, StatusEvent};
pub use position::{Position, ProviderId};
pub use satellite::Satellite;
pub use service::{LocationCallbacks, LocationService, PlatformContext, UpdateHints};
pub use simulator::{SimulatedLocationService, SimulatedPlatform};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        LocationCallbacks, LocationService, PlatformContext, Position, ProviderId, ProviderStatus,
        ProviderStatusChange, Satellite, ServiceError, StatusEvent, UpdateHints,
    };
}
