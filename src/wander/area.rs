//! Scene geometry the pet wanders in, and waypoint selection over it.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{WAYPOINT_ATTEMPTS, WAYPOINT_MAX_DISTANCE, WAYPOINT_MIN_DISTANCE};

/// Axis-aligned rectangle on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest x coordinate.
    pub min_x: f32,
    /// Largest x coordinate.
    pub max_x: f32,
    /// Smallest z coordinate.
    pub min_z: f32,
    /// Largest z coordinate.
    pub max_z: f32,
}

impl Bounds {
    /// Creates a rectangle from its extents.
    #[must_use]
    pub const fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Returns `true` if `point` lies inside or on the edge.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&point.x)
            && (self.min_z..=self.max_z).contains(&point.y)
    }

    /// Moves `point` to the nearest position inside the rectangle.
    #[must_use]
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.max(self.min_x).min(self.max_x),
            point.y.max(self.min_z).min(self.max_z),
        )
    }

    /// Returns `true` when the extents are finite and not inverted.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        [self.min_x, self.max_x, self.min_z, self.max_z]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_z <= self.max_z
    }

    /// Draws a point uniformly from the rectangle.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            sample_between(rng, self.min_x, self.max_x),
            sample_between(rng, self.min_z, self.max_z),
        )
    }
}

/// A static object the pet keeps clear of.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Centre x coordinate.
    pub x: f32,
    /// Centre z coordinate.
    pub z: f32,
    /// Distance from the centre within which waypoints are rejected.
    pub radius: f32,
}

impl Obstacle {
    /// Creates an obstacle centred on `(x, z)`.
    #[must_use]
    pub const fn new(x: f32, z: f32, radius: f32) -> Self {
        Self { x, z, radius }
    }

    /// Centre of the obstacle on the ground plane.
    #[must_use]
    pub const fn centre(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// Returns `true` for a finite centre and a finite, non-negative radius.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite() && self.z.is_finite() && self.radius.is_finite() && self.radius >= 0.0
    }

    /// Returns `true` if `point` falls inside the exclusion zone.
    #[must_use]
    pub fn excludes(&self, point: Vec2) -> bool {
        point.distance(self.centre()) <= self.radius
    }
}

/// Result of a waypoint search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// The chosen ground point.
    pub position: Vec2,
    /// Set when every candidate was rejected and the fallback region was
    /// used instead.
    pub fallback: bool,
}

/// Bounds, obstacles and fallback region the pet wanders within.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WanderArea {
    /// Rectangle every waypoint is clamped into.
    pub bounds: Bounds,
    /// Exclusion zones checked for every candidate.
    pub obstacles: Vec<Obstacle>,
    /// Region sampled when no candidate survives.
    pub fallback: Bounds,
}

impl WanderArea {
    /// Creates an area from its parts.
    #[must_use]
    pub const fn new(bounds: Bounds, obstacles: Vec<Obstacle>, fallback: Bounds) -> Self {
        Self {
            bounds,
            obstacles,
            fallback,
        }
    }

    /// Returns `true` if `point` is inside the bounds and clear of every
    /// obstacle.
    #[must_use]
    pub fn is_clear(&self, point: Vec2) -> bool {
        self.bounds.contains(point) && !self.obstacles.iter().any(|o| o.excludes(point))
    }

    /// Picks the next wander waypoint starting from `from`.
    ///
    /// Candidates lie at a random bearing and a distance between the
    /// configured minimum and maximum, clamped into the bounds. Candidates
    /// inside an obstacle are rejected. After the last attempt a point from
    /// the fallback region is used, clamped into the bounds but not checked
    /// against obstacles.
    pub fn pick_waypoint<R: Rng + ?Sized>(&self, from: Vec2, rng: &mut R) -> Waypoint {
        for _ in 0..WAYPOINT_ATTEMPTS {
            let bearing = rng.gen::<f32>() * TAU;
            let distance = sample_between(rng, WAYPOINT_MIN_DISTANCE, WAYPOINT_MAX_DISTANCE);
            let candidate = self
                .bounds
                .clamp(from + Vec2::new(bearing.sin(), bearing.cos()) * distance);
            if self.is_clear(candidate) {
                return Waypoint {
                    position: candidate,
                    fallback: false,
                };
            }
        }
        Waypoint {
            position: self.bounds.clamp(self.fallback.sample(rng)),
            fallback: true,
        }
    }
}

/// Uniform sample from `[min, max)`; an inverted range yields `min`.
pub(crate) fn sample_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    min + rng.gen::<f32>() * (max - min)
}
