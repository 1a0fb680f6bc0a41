use nalgebra::{Point3, Vector3};

pub use combat::AgentSpawn;

/// Request to add one free body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpawn {
    pub mass: f64,
    pub radius: f64,
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
}

impl BodySpawn {
    pub const PLANET_MASS: f64 = 5.0;
    pub const PLANET_RADIUS: f64 = 1.0;

    /// A body at rest
    pub fn new(mass: f64, radius: f64, position: Point3<f64>) -> Self {
        BodySpawn {
            mass,
            radius,
            position,
            velocity: Vector3::zeros(),
        }
    }

    /// A user-placed planet, its radius scaled by `size_multiplier`
    ///
    /// # Examples
    ///
    /// ```
    /// use solar_sim::spawn::BodySpawn;
    /// use nalgebra::Point3;
    ///
    /// let planet = BodySpawn::planet(Point3::new(0.0, 0.0, -10.0), 2.5);
    /// assert_eq!(planet.mass, 5.0);
    /// assert_eq!(planet.radius, 2.5);
    /// ```
    pub fn planet(position: Point3<f64>, size_multiplier: f64) -> Self {
        Self::new(Self::PLANET_MASS, Self::PLANET_RADIUS * size_multiplier, position)
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }
}
