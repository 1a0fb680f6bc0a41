//! Collision resolution by mutual destruction
//!
//! Both bodies of a colliding pair are tombstoned: marked dead with their
//! mass dropped to [`DEGENERATE_MASS`](crate::body::DEGENERATE_MASS). One
//! explosion is reported per destroyed pair.

use crate::body::BodyId;
use crate::collisions::detection::{CollisionEvent, detect_collisions};
use crate::state::SystemState;
use nalgebra::Point3;
use tracing::debug;

/// Request for a visual explosion where two bodies destroyed each other
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub point: Point3<f64>,
    pub body_a: BodyId,
    pub body_b: BodyId,
}

/// Apply collision events in order, destroying both bodies of each pair
///
/// An event is skipped when either body is already dead, which happens when
/// one body overlapped several others in the same frame: its first pair
/// destroys it and later pairs involving it are ignored.
///
/// # Returns
///
/// One explosion per pair that was actually destroyed
///
/// # Examples
///
/// ```
/// use nbody::collisions::{detect_collisions, resolve_collisions};
/// use nbody::state::SystemState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut system = SystemState::new();
/// system.add_body(5.0, 1.0, Point3::origin(), Vector3::zeros()).unwrap();
/// system.add_body(5.0, 1.0, Point3::new(1.5, 0.0, 0.0), Vector3::zeros()).unwrap();
///
/// let events = detect_collisions(&system);
/// let explosions = resolve_collisions(&mut system, &events);
///
/// assert_eq!(explosions.len(), 1);
/// assert_eq!(system.alive_count(), 0);
/// // Tombstones stay in the roster
/// assert_eq!(system.body_count(), 2);
/// ```
pub fn resolve_collisions(state: &mut SystemState, events: &[CollisionEvent]) -> Vec<Explosion> {
    let mut explosions = Vec::new();

    for event in events {
        let both_alive = [event.body_a, event.body_b]
            .iter()
            .all(|&id| state.get_body(id).is_some_and(|b| b.alive));
        if !both_alive {
            continue;
        }

        for id in [event.body_a, event.body_b] {
            if let Some(body) = state.get_body_mut(id) {
                body.tombstone();
            }
        }

        debug!(
            body_a = event.body_a.0,
            body_b = event.body_b.0,
            separation = event.separation,
            "free bodies collided"
        );
        explosions.push(Explosion {
            point: event.midpoint,
            body_a: event.body_a,
            body_b: event.body_b,
        });
    }

    explosions
}

/// Detect and resolve all collisions among living bodies in one pass
pub fn handle_collisions(state: &mut SystemState) -> Vec<Explosion> {
    let events = detect_collisions(state);
    resolve_collisions(state, &events)
}
