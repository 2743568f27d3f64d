//! Notifications emitted by the pet simulation.
//!
//! Producers push into a caller-supplied buffer; consumers (the Bevy plugin,
//! the headless binary, tests) drain it after each operation.

use std::time::Duration;

use glam::Vec2;
use serde::Serialize;

/// Something observable happened to the pet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PetEvent {
    /// At least one stat changed; carries the new levels.
    StatsChanged {
        /// Hunger after the change.
        hunger: u8,
        /// Happiness after the change.
        happiness: u8,
    },
    /// A stat reached zero. Emitted once per life.
    Died,
    /// The pet was brought back by an explicit revive.
    Revived,
    /// The pet finished a walk it was called on.
    ArrivedAtCallTarget,
    /// A new walk was planned, either wandering or called.
    WaypointChosen {
        /// Ground point the walk starts from.
        start: Vec2,
        /// Ground point the walk ends at.
        target: Vec2,
        /// Yaw in degrees the pet turns to before walking.
        rotation_deg: f32,
        /// Time the walk itself takes, excluding the turn.
        duration: Duration,
        /// Whether the walk answers a call.
        called: bool,
        /// Counter identifying the walk; newer walks have larger values.
        generation: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn waypoint_points_encode_as_pairs() {
        let event = PetEvent::WaypointChosen {
            start: Vec2::new(0.0, -3.0),
            target: Vec2::new(1.5, 2.0),
            rotation_deg: 90.0,
            duration: Duration::from_millis(1_500),
            called: true,
            generation: 4,
        };
        let json = serde_json::to_value(event).expect("event serialises");
        let fields = &json["WaypointChosen"];
        assert_eq!(fields["start"], serde_json::json!([0.0, -3.0]));
        assert_eq!(fields["target"], serde_json::json!([1.5, 2.0]));
        assert_eq!(fields["generation"], 4);
    }

    #[rstest]
    fn unit_events_encode_as_names() {
        let json = serde_json::to_string(&PetEvent::Died).expect("event serialises");
        assert_eq!(json, "\"Died\"");
    }
}
