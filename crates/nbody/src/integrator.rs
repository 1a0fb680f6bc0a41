//! Time integration for free-body systems
//!
//! The default integrator is semi-implicit (symplectic) Euler: velocities are
//! kicked by the accumulated acceleration first, then positions drift with
//! the updated velocity. A kick-drift-kick leapfrog is available for scenes
//! that want better long-run energy behaviour at the cost of a second force
//! evaluation per step.
//!
//! Only living bodies are moved. Tombstoned bodies keep their last position.

use crate::forces::ForceModel;
use crate::state::SystemState;
use nalgebra::Vector3;

/// A time integrator for free-body systems
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep in seconds
    /// * `force` - Force model to compute accelerations
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel);

    /// Advance the system by multiple timesteps
    ///
    /// # Returns
    ///
    /// Final time after integration
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> f64 {
        for _ in 0..n_steps {
            self.step(state, dt, force);
        }
        state.time
    }
}

fn kick(state: &mut SystemState, accelerations: &[Vector3<f64>], dt: f64) {
    state
        .bodies
        .iter_mut()
        .zip(accelerations.iter())
        .filter(|(body, _)| body.alive)
        .for_each(|(body, accel)| {
            body.velocity += accel * dt;
        });
}

fn drift(state: &mut SystemState, dt: f64) {
    state
        .bodies
        .iter_mut()
        .filter(|body| body.alive)
        .for_each(|body| {
            body.position += body.velocity * dt;
        });
}

/// Semi-implicit Euler integrator (1st order, symplectic)
///
/// 1. v(t + dt) = v(t) + a(t) * dt
/// 2. x(t + dt) = x(t) + v(t + dt) * dt
///
/// # Examples
///
/// ```
/// use nbody::integrator::{Integrator, SemiImplicitEuler};
/// use nbody::forces::DirectGravity;
/// use nbody::state::SystemState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut system = SystemState::new();
/// system.add_body(5.0, 1.0, Point3::new(-5.0, 0.0, 0.0), Vector3::zeros()).unwrap();
/// system.add_body(5.0, 1.0, Point3::new(5.0, 0.0, 0.0), Vector3::zeros()).unwrap();
///
/// SemiImplicitEuler.step(&mut system, 1.0 / 60.0, &DirectGravity::new());
///
/// // Both bodies start falling toward each other on the very first step
/// assert!(system.bodies[0].position.x > -5.0);
/// assert!(system.bodies[1].position.x < 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) {
        let accelerations = force.accelerations(state);
        kick(state, &accelerations, dt);
        drift(state, dt);
        state.time += dt;
    }
}

/// Symplectic leapfrog integrator (2nd order, kick-drift-kick)
///
/// 1. Kick: v(t + dt/2) = v(t) + a(t) * dt/2
/// 2. Drift: x(t + dt) = x(t) + v(t + dt/2) * dt
/// 3. Kick: v(t + dt) = v(t + dt/2) + a(t + dt) * dt/2
#[derive(Debug, Clone, Copy, Default)]
pub struct Leapfrog;

impl Integrator for Leapfrog {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) {
        let half = dt / 2.0;

        let accelerations = force.accelerations(state);
        kick(state, &accelerations, half);
        drift(state, dt);
        let accelerations = force.accelerations(state);
        kick(state, &accelerations, half);

        state.time += dt;
    }
}
