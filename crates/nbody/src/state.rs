use crate::body::{Body, BodyId};
use nalgebra::{Point3, Vector3};
use thiserror::Error;
use tracing::debug;

/// Reasons a body can be refused at spawn time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpawnError {
    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("body radius must be non-negative and finite, got {0}")]
    InvalidRadius(f64),
    #[error("body position and velocity must be finite")]
    NonFiniteKinematics,
}

/// The roster of free bodies at a given time
///
/// Bodies are only ever appended. Destruction tombstones a body in place so
/// that [`BodyId`]s, which are roster indices, never shift.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    /// Current simulation time in seconds
    pub time: f64,
    /// Every body ever spawned, living or dead
    pub bodies: Vec<Body>,
}

impl SystemState {
    /// Creates an empty system at t = 0
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::SystemState;
    ///
    /// let system = SystemState::new();
    /// assert_eq!(system.body_count(), 0);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new body to the system and returns its ID
    ///
    /// # Arguments
    ///
    /// * `mass` - Body mass, strictly positive
    /// * `radius` - Collision radius, non-negative
    /// * `position` - World-space position
    /// * `velocity` - Initial velocity
    ///
    /// # Errors
    ///
    /// Returns a [`SpawnError`] if any argument is out of range; the roster
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::SystemState;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let mut system = SystemState::new();
    /// let id = system
    ///     .add_body(5.0, 1.0, Point3::new(0.0, 0.0, -10.0), Vector3::zeros())
    ///     .unwrap();
    ///
    /// assert_eq!(id.0, 0);
    /// assert!(system.add_body(0.0, 1.0, Point3::origin(), Vector3::zeros()).is_err());
    /// ```
    pub fn add_body(
        &mut self,
        mass: f64,
        radius: f64,
        position: Point3<f64>,
        velocity: Vector3<f64>,
    ) -> Result<BodyId, SpawnError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SpawnError::InvalidMass(mass));
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SpawnError::InvalidRadius(radius));
        }
        if !(position.coords.iter().all(|c| c.is_finite())
            && velocity.iter().all(|c| c.is_finite()))
        {
            return Err(SpawnError::NonFiniteKinematics);
        }

        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Body {
            id,
            mass,
            radius,
            position,
            velocity,
            alive: true,
        });
        debug!(body = id.0, mass, radius, "spawned free body");
        Ok(id)
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    /// Number of bodies in the roster, including tombstones
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn alive_count(&self) -> usize {
        self.alive_bodies().count()
    }

    pub fn alive_bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.alive)
    }

    /// Total mass of living bodies
    pub fn total_mass(&self) -> f64 {
        self.alive_bodies().map(|b| b.mass).sum()
    }

    /// Total momentum of living bodies
    ///
    /// Gravity alone leaves this unchanged, which makes it a cheap drift check.
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.alive_bodies()
            .map(|b| b.momentum())
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.alive_bodies().map(|b| b.kinetic_energy()).sum()
    }
}
