//! Minimal broker walkthrough against the simulated platform service.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example position_logger
//! ```

use std::sync::Arc;

use geofix_broker::logging::{init_logging, LoggingMode};
use geofix_broker::{BrokerConfig, PositionBroker, PositionObserver};
use geofix_platform::{
    Position, ProviderId, Satellite, SimulatedLocationService, SimulatedPlatform, StatusEvent,
};

struct ConsoleObserver;

impl PositionObserver for ConsoleObserver {
    fn on_position_update(&self, position: &Position) {
        println!(
            "fix: {:.5}, {:.5}  ±{:.1} m",
            position.latitude, position.longitude, position.accuracy
        );
    }

    fn on_first_fix(&self) {
        println!("first fix obtained");
    }
}

fn main() {
    init_logging(LoggingMode::Development).expect("logging init");

    let service = Arc::new(SimulatedLocationService::new());
    let platform = Arc::new(SimulatedPlatform::new(Arc::clone(&service)));

    let broker = PositionBroker::with_config(platform, BrokerConfig::continuous());
    broker.register_observer(Arc::new(ConsoleObserver));

    if !broker.start() {
        eprintln!("provider disabled, nothing to do");
        return;
    }

    // Script a short session the way a platform would drive one.
    service.set_satellites(vec![
        Satellite::new(3, 41.0, 35.0, 80.0).used_in_fix(),
        Satellite::new(14, 37.5, 62.0, 210.0).used_in_fix(),
        Satellite::new(22, 28.0, 15.0, 300.0),
    ]);
    service.emit_status(StatusEvent::SatelliteStatus);
    service.emit_status(StatusEvent::FirstFix);

    for step in 0..5 {
        let mut position = Position::empty(ProviderId::gps());
        position.latitude = 40.4168 + 0.0001 * step as f64;
        position.longitude = -3.7038;
        position.accuracy = 5.0 - 0.5 * step as f64;
        service.emit_position(&position);
    }

    println!(
        "session: {} updates, {} satellites visible, first fix = {}",
        broker.update_count(),
        broker.satellite_count(),
        broker.is_first_fix_obtained()
    );

    broker.stop();
}
