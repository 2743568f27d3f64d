//! The pet as a whole: stats, wandering and the shared RNG.
//!
//! [`PetSimulation`] is the single owner of all mutable pet state. Callers
//! drive it through two clocks, [`PetSimulation::advance`] for stat decay
//! and [`PetSimulation::tick`] for movement, plus the player actions, and
//! collect the resulting [`PetEvent`]s with [`PetSimulation::drain_events`].

use std::time::Duration;

use glam::Vec2;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::events::PetEvent;
use crate::stats::PetStats;
use crate::wander::{Pose, WanderController};

/// A pet, its needs and its movement.
#[derive(Debug, Clone)]
pub struct PetSimulation {
    name: String,
    stats: PetStats,
    wander: WanderController,
    rng: ChaCha8Rng,
    events: Vec<PetEvent>,
}

impl PetSimulation {
    /// Spawns a pet described by `config` at session time zero.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self::with_stats(config, PetStats::default())
    }

    /// Spawns a pet with explicit starting stats.
    #[must_use]
    pub fn with_stats(config: &SimConfig, stats: PetStats) -> Self {
        let name = config.display_name().to_owned();
        info!(
            "{name} spawned at ({}, {}) with hunger {} and happiness {}",
            config.start.x,
            config.start.z,
            stats.hunger(),
            stats.happiness()
        );
        Self {
            name,
            stats,
            wander: WanderController::new(
                config.start.into(),
                config.start_rotation_deg,
                config.wander_area(),
            ),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
        }
    }

    /// The pet's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current stats.
    #[must_use]
    pub const fn stats(&self) -> &PetStats {
        &self.stats
    }

    /// The wander controller.
    #[must_use]
    pub const fn wander(&self) -> &WanderController {
        &self.wander
    }

    /// Where and how to draw the pet.
    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.wander.pose()
    }

    /// Whether the pet is alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Feeds the pet.
    pub fn feed(&mut self, now: Duration) {
        debug!("{} is fed", self.name);
        self.stats.feed(now, &mut self.events);
    }

    /// Plays with the pet.
    pub fn play(&mut self, now: Duration) {
        debug!("playing with {}", self.name);
        self.stats.play(now, &mut self.events);
    }

    /// Brings the pet back to life.
    pub fn revive(&mut self, now: Duration) {
        self.stats.revive(now, &mut self.events);
    }

    /// Drains both stats for testing the death path.
    pub fn apply_debug_penalty(&mut self, now: Duration) {
        self.stats.apply_debug_penalty(now, &mut self.events);
    }

    /// Calls the pet to `target`, interrupting its current walk.
    ///
    /// Returns `false` if the pet is dead or its wandering is held.
    pub fn call_to(&mut self, target: Vec2) -> bool {
        debug!("{} called to {target:?}", self.name);
        self.wander
            .interrupt(target, self.stats.is_alive(), &mut self.events)
    }

    /// Holds or releases the wander controller.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.wander.set_suspended(suspended);
    }

    /// Advances stat decay to session time `now`.
    pub fn advance(&mut self, now: Duration) {
        self.stats.advance(now, &mut self.events);
    }

    /// Advances movement by one frame ending at session time `now`.
    ///
    /// Arriving at a call target comforts the pet.
    pub fn tick(&mut self, delta: Duration, now: Duration) {
        let first_new = self.events.len();
        self.wander.tick(
            delta,
            self.stats.is_alive(),
            &mut self.rng,
            &mut self.events,
        );
        let arrived = self
            .events
            .iter()
            .skip(first_new)
            .any(|event| *event == PetEvent::ArrivedAtCallTarget);
        if arrived {
            self.stats.comfort(now, &mut self.events);
        }
    }

    /// Returns the events produced since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PetEvent> {
        std::mem::take(&mut self.events)
    }
}
