//! Utility helpers for tests.
pub mod driver;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use whiskers::{PetEvent, WanderArea};

pub use driver::{FrameDriver, FRAME};

/// Deterministic RNG for reproducible wander tests.
///
/// # Examples
/// ```
/// use rand::Rng;
/// let mut a = test_utils::seeded_rng(3);
/// let mut b = test_utils::seeded_rng(3);
/// assert_eq!(a.gen::<u32>(), b.gen::<u32>());
/// ```
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Assert that `point` lies inside the area's bounds and outside every
/// obstacle.
///
/// # Panics
/// Panics with the offending point if either check fails.
pub fn assert_clear(area: &WanderArea, point: Vec2) {
    assert!(
        area.bounds.contains(point),
        "{point:?} lies outside {:?}",
        area.bounds
    );
    for obstacle in &area.obstacles {
        assert!(
            !obstacle.excludes(point),
            "{point:?} lies inside obstacle {obstacle:?}"
        );
    }
}

/// Count the events matching `predicate`.
pub fn count_events(events: &[PetEvent], predicate: impl Fn(&PetEvent) -> bool) -> usize {
    events.iter().filter(|e| predicate(e)).count()
}

/// Targets of every `WaypointChosen` event in order.
pub fn waypoint_targets(events: &[PetEvent]) -> Vec<Vec2> {
    events
        .iter()
        .filter_map(|e| match e {
            PetEvent::WaypointChosen { target, .. } => Some(*target),
            _ => None,
        })
        .collect()
}
