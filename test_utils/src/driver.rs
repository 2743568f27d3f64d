//! Drives a [`PetSimulation`] the way the app schedule does.

use std::time::Duration;

use whiskers::{PetEvent, PetSimulation, SimConfig, DECAY_INTERVAL_MS, HEADLESS_FRAME_MS};

/// One frame of the headless binary's virtual clock.
pub const FRAME: Duration = Duration::from_millis(HEADLESS_FRAME_MS);

/// Steps a simulation with a fixed frame delta, advancing decay every
/// [`DECAY_INTERVAL_MS`] and collecting every emitted event.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    /// The simulation under test.
    pub sim: PetSimulation,
    /// Session time of the last frame.
    pub now: Duration,
    /// Every event drained so far.
    pub events: Vec<PetEvent>,
    since_decay: Duration,
}

impl FrameDriver {
    /// Builds a driver around a fresh simulation for `config`.
    pub fn new(config: &SimConfig) -> Self {
        Self::from_sim(PetSimulation::new(config))
    }

    /// Wraps an existing simulation, starting the clock at zero.
    pub fn from_sim(sim: PetSimulation) -> Self {
        Self {
            sim,
            now: Duration::ZERO,
            events: Vec::new(),
            since_decay: Duration::ZERO,
        }
    }

    /// Runs a single frame of `delta`.
    pub fn frame(&mut self, delta: Duration) {
        self.now += delta;
        self.since_decay += delta;
        let interval = Duration::from_millis(DECAY_INTERVAL_MS);
        while self.since_decay >= interval {
            self.since_decay -= interval;
            self.sim.advance(self.now);
        }
        self.sim.tick(delta, self.now);
        self.events.extend(self.sim.drain_events());
    }

    /// Runs `count` frames of [`FRAME`].
    pub fn frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame(FRAME);
        }
    }

    /// Runs frames until `done` holds or `limit` frames have passed.
    /// Returns whether `done` was reached.
    pub fn run_until(&mut self, limit: usize, done: impl Fn(&Self) -> bool) -> bool {
        for _ in 0..limit {
            if done(self) {
                return true;
            }
            self.frame(FRAME);
        }
        done(self)
    }
}
