//! Tuning constants shared by the stat model and the wander controller.
//!
//! The values are hardcoded; only the scene layout (bounds, obstacles and
//! spawn point) is configurable through [`crate::config::SimConfig`].

/// Upper bound of every pet stat.
pub const STAT_MAX: u8 = 100;
/// Hunger of a freshly created pet.
pub const INITIAL_HUNGER: u8 = 60;
/// Happiness of a freshly created pet.
pub const INITIAL_HAPPINESS: u8 = 80;
/// Level both stats are reset to when the pet is revived.
pub const REVIVE_LEVEL: u8 = 50;

/// Hunger restored by a meal.
pub const FEED_HUNGER_GAIN: u8 = 30;
/// Happiness gained from a meal.
pub const FEED_HAPPINESS_GAIN: u8 = 10;
/// How long the food bowl stays empty after a meal.
pub const FEED_COOLDOWN_MS: u64 = 3_000;
/// Happiness gained from a play session.
pub const PLAY_HAPPINESS_GAIN: u8 = 25;
/// Hunger spent by a play session.
pub const PLAY_HUNGER_COST: u8 = 10;
/// Happiness gained when the pet reaches the spot it was called to.
pub const CALL_ARRIVAL_HAPPINESS_GAIN: u8 = 5;
/// Hunger removed by the diagnostic penalty.
pub const DEBUG_HUNGER_PENALTY: u8 = 30;
/// Happiness removed by the diagnostic penalty.
pub const DEBUG_HAPPINESS_PENALTY: u8 = 20;

/// Milliseconds without food before hunger drops by one.
pub const HUNGER_DECAY_AFTER_MS: u64 = 10_000;
/// Milliseconds without play before happiness drops by one.
pub const HAPPINESS_DECAY_AFTER_MS: u64 = 15_000;
/// Cadence at which the decay clock is advanced.
pub const DECAY_INTERVAL_MS: u64 = 2_000;

/// Frame deltas above this are treated as stalls and skipped.
pub const MAX_FRAME_DELTA_MS: f32 = 100.0;
/// Ticked time spent idle before the first walk.
pub const STARTUP_DELAY_MS: f32 = 1_000.0;
/// Duration of the turn that precedes every walk.
pub const ROTATE_DURATION_MS: f32 = 800.0;
/// Walking pace while wandering, per distance unit.
pub const WANDER_MS_PER_UNIT: f32 = 3_000.0;
/// Walking pace when called, per distance unit.
pub const CALLED_MS_PER_UNIT: f32 = 2_000.0;
/// Offset between the model's forward axis and the scene's +z axis.
pub const MODEL_FACING_OFFSET_DEG: f32 = 180.0;

/// Shortest distance of a wander waypoint from the current position.
pub const WAYPOINT_MIN_DISTANCE: f32 = 2.0;
/// Longest distance of a wander waypoint from the current position.
pub const WAYPOINT_MAX_DISTANCE: f32 = 4.0;
/// Candidates sampled before falling back to the fallback region.
pub const WAYPOINT_ATTEMPTS: usize = 20;

/// Probability that a pause after a walk is a long one.
pub const LONG_PAUSE_CHANCE: f64 = 0.3;
/// Shortest long pause.
pub const LONG_PAUSE_MIN_MS: f32 = 3_000.0;
/// Longest long pause.
pub const LONG_PAUSE_MAX_MS: f32 = 7_000.0;
/// Shortest short pause.
pub const SHORT_PAUSE_MIN_MS: f32 = 1_000.0;
/// Longest short pause.
pub const SHORT_PAUSE_MAX_MS: f32 = 3_000.0;

/// Height of the walking bob.
pub const BOB_AMPLITUDE: f32 = 0.03;
/// Period of one full bob cycle.
pub const BOB_PERIOD_MS: f32 = 800.0;
/// Resting height of the pet above the floor.
pub const PET_BASE_HEIGHT: f32 = 0.5;

/// Name used when none (or an empty one) is supplied.
pub const DEFAULT_PET_NAME: &str = "Whiskers";
/// Frame length used by the deterministic headless driver.
pub const HEADLESS_FRAME_MS: u64 = 16;
