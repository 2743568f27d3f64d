#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the Whiskers virtual pet.
//! A cat with two decaying needs wanders its scene, and can be fed, played
//! with and called over by ringing a bell.
pub mod components;
pub mod config;
pub mod constants;
pub mod events;
pub mod logging;
pub mod numeric;
pub mod plugin;
pub mod simulation;
pub mod stats;
pub mod vector_math;
pub mod wander;
pub use constants::*;

// Re-export commonly used items
pub use components::{Pet, PetName};
pub use config::{ConfigError, GroundPoint, SimConfig};
pub use events::PetEvent;
pub use logging::init as init_logging;
pub use plugin::{DecayTimer, PetCommand, PetNotification, PetPlugin, PetSim};
pub use simulation::PetSimulation;
pub use stats::{Level, PetStats};
pub use vector_math::{facing_degrees, ground, planar_distance};
pub use wander::{Bounds, Obstacle, Pose, WanderArea, WanderController, WanderPhase, WanderState};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use whiskers::prelude::*;
    //! ```

    pub use crate::PetCommand;
    pub use crate::PetEvent;
    pub use crate::PetPlugin;
    pub use crate::PetSimulation;
    pub use crate::SimConfig;
    pub use crate::WanderPhase;
    pub use glam::Vec2;
}
