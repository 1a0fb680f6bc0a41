//! Force models for free-body simulations
//!
//! This module provides the `ForceModel` trait and the direct pairwise
//! gravity used to pull spawned bodies toward each other.

use crate::state::SystemState;
use nalgebra::Vector3;

pub mod gravity;

#[cfg(test)]
mod gravity_test;

pub use gravity::DirectGravity;

/// Gravitational constant in simulation units
///
/// Not the physical constant: tuned so that planet-sized bodies a few dozen
/// units apart drift together over seconds rather than frames.
pub const G: f64 = 1.0;

/// Default softening term added to squared separations
pub const SOFTENING: f64 = 0.01;

/// A source of acceleration on bodies in a free-body system
///
/// # Examples
///
/// ```
/// use nbody::forces::{ForceModel, DirectGravity};
/// use nbody::state::SystemState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut system = SystemState::new();
/// system.add_body(5.0, 1.0, Point3::new(-5.0, 0.0, 0.0), Vector3::zeros()).unwrap();
/// system.add_body(5.0, 1.0, Point3::new(5.0, 0.0, 0.0), Vector3::zeros()).unwrap();
///
/// let gravity = DirectGravity::new();
/// let accel = gravity.accelerations(&system);
/// assert!(accel[0].x > 0.0);
/// assert!(accel[1].x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Compute the acceleration of every body in `state.bodies`
    ///
    /// The returned vector is index-aligned with the roster. Dead bodies
    /// always receive zero acceleration.
    fn accelerations(&self, state: &SystemState) -> Vec<Vector3<f64>>;

    /// Compute potential energy of the living bodies (optional)
    fn potential_energy(&self, _state: &SystemState) -> f64 {
        0.0
    }
}
