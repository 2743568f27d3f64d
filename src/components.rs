//! ECS component types used by the game.
//! Tags the pet entity and carries its display name.
use bevy::prelude::*;
use serde::Serialize;

/// Marks the entity whose transform follows the simulated pet.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pet;

/// Display name shown for the pet.
#[derive(Component, Debug, Clone, PartialEq, Eq, Deref, DerefMut, Serialize)]
pub struct PetName(pub String);
