//! Wander state records.

use glam::Vec2;
use serde::Serialize;

/// Phase of the wander cycle.
///
/// Phases advance `Idle → Rotating → Walking → Paused → Idle`; a call can
/// force `Rotating` from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum WanderPhase {
    /// Waiting for the first walk after spawning.
    #[default]
    Idle,
    /// Turning to face the target.
    Rotating,
    /// Moving towards the target.
    Walking,
    /// Resting after arriving.
    Paused,
}

/// Everything the controller tracks between ticks.
///
/// `target_position` and `start_position` are set whenever the phase is
/// [`WanderPhase::Rotating`] or [`WanderPhase::Walking`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WanderState {
    /// Logical ground position.
    pub current_position: Vec2,
    /// Yaw in degrees, in `(-180, 180]`.
    pub current_rotation_deg: f32,
    /// Destination of the current walk.
    pub target_position: Option<Vec2>,
    /// Yaw the pet turns to before walking.
    pub target_rotation_deg: f32,
    /// Where the current walk began.
    pub start_position: Option<Vec2>,
    /// Yaw when the current turn began.
    pub start_rotation_deg: f32,
    /// Current phase.
    pub phase: WanderPhase,
    /// Milliseconds spent turning.
    pub rotate_elapsed_ms: f32,
    /// Milliseconds spent walking.
    pub walk_elapsed_ms: f32,
    /// Length of the walk in milliseconds.
    pub walk_duration_ms: f32,
    /// Milliseconds spent resting.
    pub pause_elapsed_ms: f32,
    /// Length of the rest in milliseconds.
    pub pause_duration_ms: f32,
    /// Set while walking to a call target.
    pub called: bool,
    /// Visual height offset from the walking bob.
    pub bob_offset: f32,
}

impl WanderState {
    /// Creates an idle state at `position` facing `rotation_deg`.
    #[must_use]
    pub const fn new(position: Vec2, rotation_deg: f32) -> Self {
        Self {
            current_position: position,
            current_rotation_deg: rotation_deg,
            target_position: None,
            target_rotation_deg: rotation_deg,
            start_position: None,
            start_rotation_deg: rotation_deg,
            phase: WanderPhase::Idle,
            rotate_elapsed_ms: 0.0,
            walk_elapsed_ms: 0.0,
            walk_duration_ms: 0.0,
            pause_elapsed_ms: 0.0,
            pause_duration_ms: 0.0,
            called: false,
            bob_offset: 0.0,
        }
    }
}

/// Where and how the pet should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    /// Logical ground position.
    pub position: Vec2,
    /// Yaw in degrees.
    pub rotation_deg: f32,
    /// Height offset to add on top of the resting height.
    pub bob: f32,
}
