//! Tracking state: last position, satellite set, first-fix latch, counter.

use geofix_platform::{Position, ProviderId, Satellite};

/// The broker's mutable view of the positioning session.
///
/// Mutated only from the callback-delivery path, behind the broker's
/// state mutex.
pub(crate) struct TrackingState {
    /// Most recent fix, overwritten in place on every update. Its
    /// timestamp is the wall-clock time of receipt, not the source
    /// timestamp, to work around clock skew seen on some devices.
    pub(crate) last_position: Position,

    /// Currently visible satellites, replaced wholesale on each
    /// satellite-status event and cleared when updates stop.
    pub(crate) satellites: Vec<Satellite>,

    /// Latched once the first fix after updates start is signalled.
    /// Never reset except by reconstructing the broker.
    pub(crate) first_fix: bool,

    /// Number of position updates received since construction.
    pub(crate) update_count: u64,
}

impl TrackingState {
    pub(crate) fn new(provider: ProviderId) -> Self {
        Self {
            last_position: Position::empty(provider),
            satellites: Vec::new(),
            first_fix: false,
            update_count: 0,
        }
    }

    /// Overwrite the snapshot from an incoming fix, stamping it with the
    /// wall-clock receipt time, and bump the update counter.
    pub(crate) fn record_position(&mut self, incoming: &Position, received_at_ms: u64) {
        self.last_position.assign(incoming);
        self.last_position.timestamp_ms = received_at_ms;
        self.update_count += 1;
    }

    pub(crate) fn replace_satellites(&mut self, satellites: Vec<Satellite>) {
        self.satellites = satellites;
    }

    pub(crate) fn clear_satellites(&mut self) {
        self.satellites.clear();
    }

    /// Latch the first-fix flag. Returns true only on the false→true
    /// transition, so callers can fire the one-shot notification.
    pub(crate) fn latch_first_fix(&mut self) -> bool {
        let newly = !self.first_fix;
        self.first_fix = true;
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skewed_fix() -> Position {
        Position {
            latitude: 40.0,
            longitude: -3.0,
            accuracy: 5.0,
            // Source timestamp at the epoch, far from any plausible clock
            timestamp_ms: 0,
            ..Position::empty(ProviderId::gps())
        }
    }

    #[test]
    fn test_record_position_stamps_receipt_time() {
        let mut state = TrackingState::new(ProviderId::gps());
        let now_ms = 1_700_000_000_000;

        state.record_position(&skewed_fix(), now_ms);

        assert_eq!(state.last_position.latitude, 40.0);
        assert_eq!(state.last_position.timestamp_ms, now_ms);
        assert_eq!(state.update_count, 1);
    }

    #[test]
    fn test_update_counter_is_monotonic() {
        let mut state = TrackingState::new(ProviderId::gps());
        for i in 1..=5 {
            state.record_position(&skewed_fix(), 1_000 * i);
            assert_eq!(state.update_count, i);
        }
    }

    #[test]
    fn test_first_fix_latch_transitions_once() {
        let mut state = TrackingState::new(ProviderId::gps());
        assert!(!state.first_fix);

        assert!(state.latch_first_fix());
        assert!(state.first_fix);

        // Already latched: no further transition.
        assert!(!state.latch_first_fix());
        assert!(state.first_fix);
    }

    #[test]
    fn test_satellite_set_replacement_and_clear() {
        let mut state = TrackingState::new(ProviderId::gps());
        state.replace_satellites(vec![
            Satellite::new(3, 40.0, 30.0, 90.0),
            Satellite::new(7, 35.0, 60.0, 180.0),
        ]);
        assert_eq!(state.satellites.len(), 2);

        state.replace_satellites(vec![Satellite::new(12, 42.0, 45.0, 270.0)]);
        assert_eq!(state.satellites.len(), 1);
        assert_eq!(state.satellites[0].prn, 12);

        state.clear_satellites();
        assert!(state.satellites.is_empty());
    }
}
