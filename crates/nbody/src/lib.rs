//! Free bodies under mutual gravity.
//!
//! Spawned planets attract each other through softened pairwise gravity and
//! destroy each other on contact. The roster is append-only: destroyed bodies
//! stay in place as tombstones so indices remain stable.

pub mod body;
pub mod collisions;
pub mod forces;
pub mod integrator;
pub mod state;

pub use body::{Body, BodyId, DEGENERATE_MASS};
pub use state::{SpawnError, SystemState};

#[cfg(test)]
mod integrator_test;
