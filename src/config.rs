//! Scene configuration.
//!
//! Tuning values live in [`crate::constants`]; this module covers what
//! differs between scenes: the pet's name and spawn point, the wander
//! bounds, the obstacles and the RNG seed. Configuration is read from JSON
//! and every field falls back to the default scene when omitted.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wander::{Bounds, Obstacle, WanderArea};
use crate::DEFAULT_PET_NAME;

/// Failure while loading or validating a [`SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The configuration parsed but describes an impossible scene.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A point on the ground plane as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundPoint {
    /// Scene x coordinate.
    pub x: f32,
    /// Scene z coordinate.
    pub z: f32,
}

impl From<GroundPoint> for Vec2 {
    fn from(point: GroundPoint) -> Self {
        Self::new(point.x, point.z)
    }
}

/// Everything needed to set up a pet and its scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Display name used in logs.
    pub name: String,
    /// Seed for waypoint and pause sampling.
    pub seed: u64,
    /// Where the pet spawns.
    pub start: GroundPoint,
    /// Initial yaw in degrees.
    pub start_rotation_deg: f32,
    /// Rectangle the pet stays within.
    pub bounds: Bounds,
    /// Region used when no clear waypoint is found.
    pub fallback: Bounds,
    /// Static objects the pet avoids.
    pub obstacles: Vec<Obstacle>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PET_NAME.to_owned(),
            seed: 7,
            start: GroundPoint { x: 0.0, z: -3.0 },
            start_rotation_deg: 0.0,
            bounds: Bounds::new(-20.0, 20.0, -20.0, 5.0),
            fallback: Bounds::new(-3.0, 3.0, -6.0, 0.0),
            obstacles: vec![
                // Food bowl.
                Obstacle::new(-2.0, -1.0, 1.0),
                // Toy ball.
                Obstacle::new(2.0, -1.0, 0.8),
                // Bell.
                Obstacle::new(0.0, -8.0, 0.9),
            ],
        }
    }
}

impl SimConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read, is not valid
    /// JSON, or fails [`SimConfig::validate`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let text = fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path_ref.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the scene can be simulated.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for malformed bounds or fallback
    /// regions, obstacles with negative or non-finite radii, or a spawn
    /// point outside the bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bounds.is_well_formed() {
            return Err(ConfigError::Invalid(format!(
                "bounds are inverted or not finite: {:?}",
                self.bounds
            )));
        }
        if !self.fallback.is_well_formed() {
            return Err(ConfigError::Invalid(format!(
                "fallback region is inverted or not finite: {:?}",
                self.fallback
            )));
        }
        if let Some(obstacle) = self.obstacles.iter().find(|o| !o.is_well_formed()) {
            return Err(ConfigError::Invalid(format!(
                "obstacle has a bad position or radius: {obstacle:?}"
            )));
        }
        if !self.bounds.contains(self.start.into()) {
            return Err(ConfigError::Invalid(format!(
                "start point {:?} lies outside the bounds",
                self.start
            )));
        }
        if !self.start_rotation_deg.is_finite() {
            return Err(ConfigError::Invalid("start rotation is not finite".to_owned()));
        }
        Ok(())
    }

    /// Display name, falling back to the default for blank names.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            DEFAULT_PET_NAME
        } else {
            trimmed
        }
    }

    /// Builds the wander area described by this configuration.
    #[must_use]
    pub fn wander_area(&self) -> WanderArea {
        WanderArea::new(self.bounds, self.obstacles.clone(), self.fallback)
    }
}
