use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::forces::gravity::DirectGravity;
use crate::forces::{ForceModel, G, SOFTENING};
use crate::state::SystemState;

fn pair_system(m1: f64, m2: f64, separation: f64) -> SystemState {
    let mut system = SystemState::new();
    system
        .add_body(m1, 1.0, Point3::origin(), Vector3::zeros())
        .unwrap();
    system
        .add_body(m2, 1.0, Point3::new(separation, 0.0, 0.0), Vector3::zeros())
        .unwrap();
    system
}

#[test]
fn test_pair_attracts() {
    let system = pair_system(5.0, 5.0, 10.0);
    let accel = DirectGravity::new().accelerations(&system);

    assert!(accel[0].x > 0.0);
    assert!(accel[1].x < 0.0);
    assert_eq!(accel[0].y, 0.0);
    assert_eq!(accel[0].z, 0.0);
}

#[test]
fn test_acceleration_magnitude() {
    let system = pair_system(5.0, 3.0, 10.0);
    let accel = DirectGravity::new().accelerations(&system);

    // a_0 = G * m_1 / (d² + ε)
    let expected = G * 3.0 / (100.0 + SOFTENING);
    assert_relative_eq!(accel[0].magnitude(), expected, max_relative = 1e-12);
}

#[test]
fn test_equal_and_opposite_forces() {
    for (m1, m2) in [(1.0, 1.0), (5.0, 0.1), (1.0e-3, 250.0)] {
        let system = pair_system(m1, m2, 7.5);
        let accel = DirectGravity::new().accelerations(&system);

        let f1 = accel[0] * m1;
        let f2 = accel[1] * m2;
        assert_relative_eq!(f1, -f2, max_relative = 1e-12);
    }
}

#[test]
fn test_single_body_feels_nothing() {
    let mut system = SystemState::new();
    system
        .add_body(5.0, 1.0, Point3::new(3.0, 4.0, 5.0), Vector3::new(1.0, 0.0, 0.0))
        .unwrap();

    let accel = DirectGravity::new().accelerations(&system);
    assert_eq!(accel, vec![Vector3::zeros()]);
}

#[test]
fn test_coincident_bodies_stay_finite() {
    let system = pair_system(5.0, 5.0, 0.0);
    let accel = DirectGravity::new().accelerations(&system);

    for a in &accel {
        assert!(a.iter().all(|c| c.is_finite()));
    }
    assert_eq!(accel[0], Vector3::zeros());
}

#[test]
fn test_nearly_coincident_bodies_are_bounded_by_softening() {
    let system = pair_system(5.0, 5.0, 1.0e-9);
    let accel = DirectGravity::new().accelerations(&system);

    // |a| can never exceed G * m / ε
    let bound = G * 5.0 / SOFTENING;
    assert!(accel[0].magnitude() <= bound * (1.0 + 1e-9));
    assert!(accel[0].iter().all(|c| c.is_finite()));
}

#[test]
fn test_dead_bodies_are_ignored() {
    let mut system = pair_system(5.0, 5.0, 10.0);
    system.bodies[1].tombstone();

    let accel = DirectGravity::new().accelerations(&system);
    assert_eq!(accel[0], Vector3::zeros());
    assert_eq!(accel[1], Vector3::zeros());
}

#[test]
fn test_three_body_superposition() {
    let mut system = SystemState::new();
    system.add_body(1.0, 0.1, Point3::origin(), Vector3::zeros()).unwrap();
    system
        .add_body(1.0, 0.1, Point3::new(10.0, 0.0, 0.0), Vector3::zeros())
        .unwrap();
    system
        .add_body(1.0, 0.1, Point3::new(-10.0, 0.0, 0.0), Vector3::zeros())
        .unwrap();

    // The middle body is pulled equally both ways
    let accel = DirectGravity::new().accelerations(&system);
    assert_relative_eq!(accel[0].magnitude(), 0.0, epsilon = 1e-15);

    // Momentum of the whole system stays balanced
    let net: Vector3<f64> = accel.iter().sum();
    assert_relative_eq!(net.magnitude(), 0.0, epsilon = 1e-15);
}

#[test]
fn test_softening_reduces_force() {
    let system = pair_system(5.0, 5.0, 0.5);

    let hard = DirectGravity::with_constants(G, 0.0).accelerations(&system);
    let soft = DirectGravity::with_constants(G, 1.0).accelerations(&system);

    assert!(soft[0].magnitude() < hard[0].magnitude());
}

#[test]
fn test_potential_energy_is_negative() {
    let system = pair_system(5.0, 5.0, 10.0);
    let pe = DirectGravity::new().potential_energy(&system);

    let expected = -G * 25.0 / (100.0 + SOFTENING).sqrt();
    assert_relative_eq!(pe, expected, max_relative = 1e-12);
}
