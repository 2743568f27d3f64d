//! Bevy plugin wiring the pet simulation into the schedule.
//!
//! Two clocks drive the pet: a repeating [`DecayTimer`] advances stat decay
//! and every `Update` ticks the wander controller with the frame delta.
//! Player input arrives as [`PetCommand`] events and everything the pet
//! does leaves as [`PetNotification`] events.

use std::time::Duration;

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, info};

use crate::components::{Pet, PetName};
use crate::config::SimConfig;
use crate::events::PetEvent;
use crate::simulation::PetSimulation;
use crate::vector_math::ground;
use crate::{DECAY_INTERVAL_MS, PET_BASE_HEIGHT};

/// Resource holding the one simulated pet.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct PetSim(pub PetSimulation);

/// Repeating timer gating stat decay.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct DecayTimer(pub Timer);

impl Default for DecayTimer {
    fn default() -> Self {
        Self(Timer::new(
            Duration::from_millis(DECAY_INTERVAL_MS),
            TimerMode::Repeating,
        ))
    }
}

/// Player (or debug) input for the pet.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PetCommand {
    /// Fill the food bowl.
    Feed,
    /// Throw the toy ball.
    Play,
    /// Bring a dead pet back.
    Revive,
    /// Drain the stats to exercise the death path.
    DebugPenalty,
    /// Ring the bell, calling the pet to `(x, z)`.
    RingBell {
        /// Scene x coordinate of the bell.
        x: f32,
        /// Scene z coordinate of the bell.
        z: f32,
    },
    /// Hold (`true`) or release (`false`) the pet's wandering.
    Suspend(bool),
}

/// Something the pet did, forwarded from the simulation.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PetNotification(pub PetEvent);

/// Spawns the entity that mirrors the simulated pet.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn spawn_pet_system(mut commands: Commands, sim: Res<PetSim>) {
    let pose = sim.pose();
    commands.spawn((
        Pet,
        PetName(sim.name().to_owned()),
        Transform::from_xyz(pose.position.x, PET_BASE_HEIGHT, pose.position.y)
            .with_rotation(Quat::from_rotation_y(pose.rotation_deg.to_radians())),
    ));
}

/// Advances stat decay each time the decay timer fires.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn advance_decay_system(
    time: Res<Time>,
    mut timer: ResMut<DecayTimer>,
    mut sim: ResMut<PetSim>,
) {
    timer.tick(time.delta());
    if timer.just_finished() {
        sim.advance(time.elapsed());
    }
}

/// Ticks the wander controller with the frame delta.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn wander_system(time: Res<Time>, mut sim: ResMut<PetSim>) {
    sim.tick(time.delta(), time.elapsed());
}

/// Copies the simulated pose onto every entity tagged [`Pet`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn sync_pet_transform_system(sim: Res<PetSim>, mut pets: Query<&mut Transform, With<Pet>>) {
    let pose = sim.pose();
    for mut transform in &mut pets {
        transform.translation = Vec3::new(
            pose.position.x,
            PET_BASE_HEIGHT + pose.bob,
            pose.position.y,
        );
        transform.rotation = Quat::from_rotation_y(pose.rotation_deg.to_radians());
    }
}

/// Forwards queued simulation events as [`PetNotification`]s.
pub fn publish_pet_events_system(mut commands: Commands, mut sim: ResMut<PetSim>) {
    for event in sim.drain_events() {
        commands.trigger(PetNotification(event));
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn apply_pet_command(event: On<PetCommand>, time: Res<Time>, mut sim: ResMut<PetSim>) {
    let now = time.elapsed();
    match *event.event() {
        PetCommand::Feed => sim.feed(now),
        PetCommand::Play => sim.play(now),
        PetCommand::Revive => sim.revive(now),
        PetCommand::DebugPenalty => sim.apply_debug_penalty(now),
        PetCommand::RingBell { x, z } => {
            if !sim.call_to(ground(x, z)) {
                debug!("{} ignored the bell", sim.name());
            }
        }
        PetCommand::Suspend(held) => sim.set_suspended(held),
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_pet_notification(event: On<PetNotification>, sim: Res<PetSim>) {
    let name = sim.name();
    match event.event().0 {
        PetEvent::StatsChanged { hunger, happiness } => {
            debug!("{name}: hunger {hunger}, happiness {happiness}");
        }
        PetEvent::Died => info!("{name} has died"),
        PetEvent::Revived => info!("{name} is back"),
        PetEvent::ArrivedAtCallTarget => info!("{name} came when called"),
        PetEvent::WaypointChosen {
            target, generation, ..
        } => debug!("{name} heads to {target:?} (walk {generation})"),
    }
}

/// Plugin installing the pet simulation.
///
/// A [`Time`] resource is initialised if none exists yet, so the plugin
/// works both under `MinimalPlugins` and with a hand-driven clock.
#[derive(Debug, Default, Clone)]
pub struct PetPlugin {
    config: SimConfig,
}

impl PetPlugin {
    /// Creates the plugin for the scene described by `config`.
    #[must_use]
    pub const fn new(config: SimConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Time>();
        app.insert_resource(PetSim(PetSimulation::new(&self.config)));
        app.init_resource::<DecayTimer>();
        app.add_observer(apply_pet_command);
        app.add_observer(log_pet_notification);
        app.add_systems(Startup, spawn_pet_system);
        app.add_systems(
            Update,
            (
                advance_decay_system,
                wander_system,
                sync_pet_transform_system,
                publish_pet_events_system,
            )
                .chain(),
        );
    }
}
