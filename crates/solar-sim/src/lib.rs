//! Solar-system skirmish simulation.
//!
//! Planets dropped into the scene pull on each other and explode on contact.
//! Ships pick the nearest enemy, fire volleys and launch drones. This crate
//! drives both layers frame by frame and reports what happened so a renderer
//! can draw it.

pub mod config;
pub mod effects;
pub mod error;
pub mod events;
pub mod placement;
pub mod simulation;
pub mod spawn;

pub use config::SimConfig;
pub use error::{ConfigError, SimError};
pub use events::{ExplosionCause, FrameReport, SimEvent};
pub use simulation::Simulation;
pub use spawn::{AgentSpawn, BodySpawn};

#[cfg(test)]
mod effects_test;
