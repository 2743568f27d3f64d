//! Autonomous wandering.
//!
//! The pet picks a waypoint, turns to face it, walks there and rests
//! before picking the next one. A call (the bell) can redirect it at any
//! point in that cycle.

mod area;
mod controller;
mod state;

pub use area::{Bounds, Obstacle, WanderArea, Waypoint};
pub use controller::WanderController;
pub use state::{Pose, WanderPhase, WanderState};
