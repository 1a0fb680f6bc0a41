use nalgebra::{Point3, Vector3};

use crate::body::BodyId;
use crate::collisions::detection::*;
use crate::state::SystemState;

fn system_with(positions: &[(f64, f64)]) -> SystemState {
    let mut system = SystemState::new();
    for &(x, radius) in positions {
        system
            .add_body(5.0, radius, Point3::new(x, 0.0, 0.0), Vector3::zeros())
            .unwrap();
    }
    system
}

#[test]
fn test_no_collisions_when_separated() {
    let system = system_with(&[(0.0, 1.0), (10.0, 1.0), (-10.0, 1.0)]);

    assert!(detect_collisions(&system).is_empty());
}

#[test]
fn test_overlapping_pair_detected() {
    let system = system_with(&[(0.0, 1.0), (1.5, 1.0)]);

    let events = detect_collisions(&system);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].body_a, BodyId(0));
    assert_eq!(events[0].body_b, BodyId(1));
    assert_eq!(events[0].separation, 1.5);
    assert_eq!(events[0].midpoint, Point3::new(0.75, 0.0, 0.0));
}

#[test]
fn test_each_pair_reported_once() {
    // Three mutually overlapping bodies
    let system = system_with(&[(0.0, 2.0), (1.0, 2.0), (2.0, 2.0)]);

    let events = detect_collisions(&system);
    let pairs: Vec<(u32, u32)> = events.iter().map(|e| (e.body_a.0, e.body_b.0)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn test_touching_is_not_a_collision() {
    let system = system_with(&[(0.0, 1.0), (2.0, 1.0)]);

    assert!(detect_collisions(&system).is_empty());
}

#[test]
fn test_dead_bodies_are_not_detected() {
    let mut system = system_with(&[(0.0, 1.0), (1.0, 1.0), (0.5, 1.0)]);
    system.bodies[0].tombstone();

    let events = detect_collisions(&system);
    assert_eq!(events.len(), 1);
    assert_eq!((events[0].body_a, events[0].body_b), (BodyId(1), BodyId(2)));
}

#[test]
fn test_zero_radius_bodies_collide_only_when_separated_by_less_than_other_radius() {
    let system = system_with(&[(0.0, 0.0), (0.5, 1.0)]);

    assert_eq!(detect_collisions(&system).len(), 1);
}
