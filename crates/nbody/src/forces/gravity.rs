//! Direct pairwise gravity (O(N²) implementation)

use crate::forces::{ForceModel, G, SOFTENING};
use crate::state::SystemState;
use nalgebra::Vector3;

/// Direct O(N²) gravitational force computation
///
/// Visits each unordered pair of living bodies exactly once and applies an
/// equal and opposite force to both. Squared separations are softened by an
/// additive term so coincident bodies never divide by zero.
///
/// # Examples
///
/// ```
/// use nbody::forces::{DirectGravity, ForceModel};
/// use nbody::state::SystemState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut system = SystemState::new();
/// system.add_body(5.0, 1.0, Point3::origin(), Vector3::zeros()).unwrap();
/// system.add_body(5.0, 1.0, Point3::origin(), Vector3::zeros()).unwrap();
///
/// // Coincident bodies stay finite
/// let accel = DirectGravity::new().accelerations(&system);
/// assert!(accel.iter().all(|a| a.iter().all(|c| c.is_finite())));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectGravity {
    /// Gravitational constant in simulation units
    pub g: f64,
    /// Additive term on squared separation (world units²)
    pub softening: f64,
}

impl DirectGravity {
    /// Creates a direct gravity force with the default constant and softening
    pub fn new() -> Self {
        Self {
            g: G,
            softening: SOFTENING,
        }
    }

    /// Creates a direct gravity force with explicit constants
    ///
    /// # Arguments
    ///
    /// * `g` - Gravitational constant in simulation units
    /// * `softening` - Additive term on squared separation
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::forces::DirectGravity;
    ///
    /// let gravity = DirectGravity::with_constants(0.5, 0.1);
    /// assert_eq!(gravity.g, 0.5);
    /// ```
    pub fn with_constants(g: f64, softening: f64) -> Self {
        Self { g, softening }
    }

    /// Force exerted on body `i` by body `j`, given `r = pos_j - pos_i`
    ///
    /// Zero when the bodies coincide: there is no direction to pull along.
    pub fn pair_force(&self, r: &Vector3<f64>, m_i: f64, m_j: f64) -> Vector3<f64> {
        let d2 = r.magnitude_squared() + self.softening;
        let magnitude = self.g * m_i * m_j / d2;
        r.try_normalize(f64::EPSILON)
            .map(|dir| dir * magnitude)
            .unwrap_or_else(Vector3::zeros)
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn accelerations(&self, state: &SystemState) -> Vec<Vector3<f64>> {
        let bodies = &state.bodies;
        let mut acceleration = vec![Vector3::zeros(); bodies.len()];

        for i in 0..bodies.len() {
            if !bodies[i].alive {
                continue;
            }
            for j in (i + 1)..bodies.len() {
                if !bodies[j].alive {
                    continue;
                }
                let (a, b) = (&bodies[i], &bodies[j]);
                let force = self.pair_force(&(b.position - a.position), a.mass, b.mass);

                // Newton's third law: equal and opposite
                acceleration[i] += force / a.mass;
                acceleration[j] -= force / b.mass;
            }
        }

        acceleration
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        let alive: Vec<_> = state.alive_bodies().collect();

        alive
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                alive[i + 1..].iter().map(move |b| {
                    let d = ((a.position - b.position).magnitude_squared() + self.softening).sqrt();
                    -self.g * a.mass * b.mass / d
                })
            })
            .sum()
    }
}
