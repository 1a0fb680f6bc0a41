//! Pairwise sphere-overlap detection

use crate::body::BodyId;
use crate::state::SystemState;
use nalgebra::Point3;

/// A detected overlap between two living bodies
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// Lower-indexed body of the pair
    pub body_a: BodyId,
    /// Higher-indexed body of the pair
    pub body_b: BodyId,
    /// Separation of the centres at detection time
    pub separation: f64,
    /// Point halfway between the centres at detection time
    pub midpoint: Point3<f64>,
}

/// Detect every overlapping pair of living bodies
///
/// Pairs are visited as `(i, j)` with `i < j` in roster order, and the
/// returned events keep that order. A pair overlaps when the distance between
/// centres is strictly less than the sum of the radii.
///
/// # Examples
///
/// ```
/// use nbody::collisions::detect_collisions;
/// use nbody::state::SystemState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut system = SystemState::new();
/// system.add_body(5.0, 1.0, Point3::origin(), Vector3::zeros()).unwrap();
/// system.add_body(5.0, 1.0, Point3::new(1.5, 0.0, 0.0), Vector3::zeros()).unwrap();
/// system.add_body(5.0, 1.0, Point3::new(50.0, 0.0, 0.0), Vector3::zeros()).unwrap();
///
/// let events = detect_collisions(&system);
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].midpoint, Point3::new(0.75, 0.0, 0.0));
/// ```
pub fn detect_collisions(state: &SystemState) -> Vec<CollisionEvent> {
    let bodies = &state.bodies;
    let n = bodies.len();

    (0..n)
        .filter(|&i| bodies[i].alive)
        .flat_map(|i| {
            ((i + 1)..n).filter_map(move |j| {
                let (a, b) = (&bodies[i], &bodies[j]);
                (b.alive && a.overlaps(b)).then(|| CollisionEvent {
                    body_a: a.id,
                    body_b: b.id,
                    separation: a.distance_to(b),
                    midpoint: a.midpoint(b),
                })
            })
        })
        .collect()
}
