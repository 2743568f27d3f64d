//! Per-frame wander state machine.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec2;
use log::{debug, trace, warn};
use rand::Rng;

use super::area::{sample_between, WanderArea};
use super::state::{Pose, WanderPhase, WanderState};
use crate::events::PetEvent;
use crate::numeric::{
    duration_from_millis, ease_in_out_quad, millis_f32, normalize_degrees, progress,
    shortest_sweep,
};
use crate::vector_math::{facing_degrees, planar_distance};
use crate::{
    BOB_AMPLITUDE, BOB_PERIOD_MS, CALLED_MS_PER_UNIT, LONG_PAUSE_CHANCE, LONG_PAUSE_MAX_MS,
    LONG_PAUSE_MIN_MS, MAX_FRAME_DELTA_MS, ROTATE_DURATION_MS, SHORT_PAUSE_MAX_MS,
    SHORT_PAUSE_MIN_MS, STARTUP_DELAY_MS, WANDER_MS_PER_UNIT,
};

/// Drives the pet around its [`WanderArea`].
///
/// The controller owns the pet's position and heading. It advances only
/// through [`WanderController::tick`] and can be redirected at any moment
/// with [`WanderController::interrupt`].
#[derive(Debug, Clone)]
pub struct WanderController {
    state: WanderState,
    area: WanderArea,
    suspended: bool,
    idle_elapsed_ms: f32,
    generation: u64,
}

impl WanderController {
    /// Creates an idle controller at `position` facing `rotation_deg`.
    #[must_use]
    pub fn new(position: Vec2, rotation_deg: f32, area: WanderArea) -> Self {
        Self {
            state: WanderState::new(position, normalize_degrees(rotation_deg)),
            area,
            suspended: false,
            idle_elapsed_ms: 0.0,
            generation: 0,
        }
    }

    /// Read-only view of the current state.
    #[must_use]
    pub const fn state(&self) -> &WanderState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> WanderPhase {
        self.state.phase
    }

    /// The area waypoints are drawn from.
    #[must_use]
    pub const fn area(&self) -> &WanderArea {
        &self.area
    }

    /// Counter of walks planned so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether ticking is held by an external pause.
    #[must_use]
    pub const fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Holds or releases the controller. While held, ticks leave the state
    /// untouched.
    pub fn set_suspended(&mut self, suspended: bool) {
        if self.suspended != suspended {
            debug!("wander controller suspended: {suspended}");
        }
        self.suspended = suspended;
    }

    /// Position, heading and bob to draw this frame.
    #[must_use]
    pub const fn pose(&self) -> Pose {
        Pose {
            position: self.state.current_position,
            rotation_deg: self.state.current_rotation_deg,
            bob: self.state.bob_offset,
        }
    }

    /// Plans a wander walk from the current position.
    ///
    /// Only valid while idle, alive and not suspended; returns `false`
    /// without changing anything otherwise.
    pub fn request_new_walk<R: Rng + ?Sized>(
        &mut self,
        pet_alive: bool,
        rng: &mut R,
        events: &mut Vec<PetEvent>,
    ) -> bool {
        if !pet_alive || self.suspended || self.state.phase != WanderPhase::Idle {
            return false;
        }
        let waypoint = self.area.pick_waypoint(self.state.current_position, rng);
        if waypoint.fallback {
            warn!(
                "no clear waypoint near {:?}; using fallback {:?}",
                self.state.current_position, waypoint.position
            );
        }
        self.begin_walk(waypoint.position, WANDER_MS_PER_UNIT, false, events);
        true
    }

    /// Sends the pet straight to `target`, abandoning whatever it was doing.
    ///
    /// The current position becomes the start of the new walk. Called walks
    /// move faster than wandering and report arrival. A dead pet or a
    /// suspended controller ignores the call and `false` is returned.
    pub fn interrupt(
        &mut self,
        target: Vec2,
        pet_alive: bool,
        events: &mut Vec<PetEvent>,
    ) -> bool {
        if !pet_alive || self.suspended {
            debug!(
                "ignoring call to {target:?}: alive {pet_alive}, suspended {}",
                self.suspended
            );
            return false;
        }
        debug!(
            "interrupt during {:?}; heading to {target:?}",
            self.state.phase
        );
        self.begin_walk(target, CALLED_MS_PER_UNIT, true, events);
        true
    }

    /// Advances the state machine by one frame.
    ///
    /// Frames longer than the stall threshold are dropped. Nothing moves
    /// while the pet is dead or the controller is suspended.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        delta: Duration,
        pet_alive: bool,
        rng: &mut R,
        events: &mut Vec<PetEvent>,
    ) {
        let delta_ms = millis_f32(delta);
        if delta_ms > MAX_FRAME_DELTA_MS {
            trace!("skipping stalled frame of {delta_ms:.1} ms");
            return;
        }
        if !pet_alive || self.suspended {
            return;
        }
        match self.state.phase {
            WanderPhase::Idle => self.tick_idle(delta_ms, rng, events),
            WanderPhase::Rotating => self.tick_rotating(delta_ms),
            WanderPhase::Walking => self.tick_walking(delta_ms, rng, events),
            WanderPhase::Paused => self.tick_paused(delta_ms, rng, events),
        }
    }

    fn tick_idle<R: Rng + ?Sized>(
        &mut self,
        delta_ms: f32,
        rng: &mut R,
        events: &mut Vec<PetEvent>,
    ) {
        self.idle_elapsed_ms += delta_ms;
        if self.idle_elapsed_ms >= STARTUP_DELAY_MS {
            self.request_new_walk(true, rng, events);
        }
    }

    fn tick_rotating(&mut self, delta_ms: f32) {
        let state = &mut self.state;
        state.rotate_elapsed_ms += delta_ms;
        let t = progress(state.rotate_elapsed_ms, ROTATE_DURATION_MS);
        if t >= 1.0 {
            state.current_rotation_deg = state.target_rotation_deg;
            state.start_position = Some(state.current_position);
            state.walk_elapsed_ms = 0.0;
            state.bob_offset = 0.0;
            state.phase = WanderPhase::Walking;
            return;
        }
        let sweep = shortest_sweep(state.start_rotation_deg, state.target_rotation_deg);
        state.current_rotation_deg =
            normalize_degrees(state.start_rotation_deg + sweep * ease_in_out_quad(t));
    }

    fn tick_walking<R: Rng + ?Sized>(
        &mut self,
        delta_ms: f32,
        rng: &mut R,
        events: &mut Vec<PetEvent>,
    ) {
        let (Some(start), Some(target)) = (self.state.start_position, self.state.target_position)
        else {
            warn!("walking without a target; returning to idle");
            self.state.phase = WanderPhase::Idle;
            return;
        };
        self.state.walk_elapsed_ms += delta_ms;
        let t = progress(self.state.walk_elapsed_ms, self.state.walk_duration_ms);
        if t < 1.0 {
            self.state.current_position = start.lerp(target, t);
            self.state.bob_offset =
                BOB_AMPLITUDE * (TAU * self.state.walk_elapsed_ms / BOB_PERIOD_MS).sin();
            return;
        }

        self.state.current_position = target;
        self.state.bob_offset = 0.0;
        if self.state.called {
            self.state.called = false;
            debug!("arrived at call target {target:?}");
            events.push(PetEvent::ArrivedAtCallTarget);
        }
        self.enter_pause(rng);
    }

    fn tick_paused<R: Rng + ?Sized>(
        &mut self,
        delta_ms: f32,
        rng: &mut R,
        events: &mut Vec<PetEvent>,
    ) {
        self.state.pause_elapsed_ms += delta_ms;
        if self.state.pause_elapsed_ms >= self.state.pause_duration_ms {
            self.state.phase = WanderPhase::Idle;
            self.request_new_walk(true, rng, events);
        }
    }

    fn enter_pause<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let duration_ms = if rng.gen_bool(LONG_PAUSE_CHANCE) {
            sample_between(rng, LONG_PAUSE_MIN_MS, LONG_PAUSE_MAX_MS)
        } else {
            sample_between(rng, SHORT_PAUSE_MIN_MS, SHORT_PAUSE_MAX_MS)
        };
        trace!("pausing for {duration_ms:.0} ms");
        let state = &mut self.state;
        state.target_position = None;
        state.start_position = None;
        state.pause_elapsed_ms = 0.0;
        state.pause_duration_ms = duration_ms;
        state.phase = WanderPhase::Paused;
    }

    fn begin_walk(
        &mut self,
        target: Vec2,
        ms_per_unit: f32,
        called: bool,
        events: &mut Vec<PetEvent>,
    ) {
        let start = self.state.current_position;
        let distance = planar_distance(start, target);
        let rotation = if distance > f32::EPSILON {
            facing_degrees(start, target)
        } else {
            self.state.current_rotation_deg
        };
        self.generation += 1;

        let state = &mut self.state;
        state.start_position = Some(start);
        state.target_position = Some(target);
        state.start_rotation_deg = state.current_rotation_deg;
        state.target_rotation_deg = rotation;
        state.walk_duration_ms = distance * ms_per_unit;
        state.rotate_elapsed_ms = 0.0;
        state.walk_elapsed_ms = 0.0;
        state.pause_elapsed_ms = 0.0;
        state.pause_duration_ms = 0.0;
        state.called = called;
        state.bob_offset = 0.0;
        state.phase = WanderPhase::Rotating;

        debug!(
            "walk {} planned from {start:?} to {target:?}: yaw {rotation:.1}, {:.0} ms",
            self.generation, state.walk_duration_ms
        );
        events.push(PetEvent::WaypointChosen {
            start,
            target,
            rotation_deg: rotation,
            duration: duration_from_millis(state.walk_duration_ms),
            called,
            generation: self.generation,
        });
    }
}
