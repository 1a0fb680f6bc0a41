use nalgebra::{Point3, Vector3};

/// Mass assigned to a body when it is destroyed.
///
/// Strictly positive so that any pass still holding the body's index can
/// divide by it safely; small enough that its pull is negligible.
pub const DEGENERATE_MASS: f64 = 1.0e-5;

/// Stable handle to a body in a [`SystemState`](crate::state::SystemState).
///
/// Handles are roster indices. Bodies are never removed from the roster, so a
/// handle stays valid for the lifetime of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,               // simulation mass units
    pub radius: f64,             // collision radius, world units
    pub position: Point3<f64>,   // world space
    pub velocity: Vector3<f64>,  // world units per second
    pub alive: bool,
}

impl Body {
    /// Creates a living body at rest
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    ///
    /// let planet = Body::at_rest(5.0, 1.0, [0.0, 0.0, -10.0]);
    /// assert!(planet.alive);
    /// assert_eq!(planet.velocity.magnitude(), 0.0);
    /// ```
    pub fn at_rest(mass: f64, radius: f64, position: [f64; 3]) -> Self {
        Body {
            id: BodyId(0),
            mass,
            radius,
            position: Point3::new(position[0], position[1], position[2]),
            velocity: Vector3::zeros(),
            alive: true,
        }
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Midpoint between two body centres, where a collision effect is placed
    pub fn midpoint(&self, other: &Body) -> Point3<f64> {
        nalgebra::center(&self.position, &other.position)
    }

    /// Whether the two bodies' collision spheres overlap
    ///
    /// Touching spheres (distance exactly equal to the sum of radii) do not
    /// count as overlapping.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.distance_to(other) < self.radius + other.radius
    }

    /// Marks the body destroyed and drops its mass to [`DEGENERATE_MASS`].
    ///
    /// Returns `false` if the body was already dead.
    pub fn tombstone(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        self.mass = DEGENERATE_MASS;
        true
    }
}
