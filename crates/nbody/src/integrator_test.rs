use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::forces::{DirectGravity, ForceModel};
use crate::integrator::{Integrator, Leapfrog, SemiImplicitEuler};
use crate::state::SystemState;

fn make_pair() -> SystemState {
    let mut system = SystemState::new();
    system
        .add_body(5.0, 1.0, Point3::new(-10.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.3))
        .unwrap();
    system
        .add_body(5.0, 1.0, Point3::new(10.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -0.3))
        .unwrap();
    system
}

#[test]
fn test_euler_advances_time() {
    let mut system = make_pair();

    SemiImplicitEuler.step(&mut system, 0.25, &DirectGravity::new());
    assert_eq!(system.time, 0.25);
}

#[test]
fn test_euler_kicks_before_drift() {
    let mut system = make_pair();
    let force = DirectGravity::new();
    let dt = 1.0 / 60.0;

    let a0 = force.accelerations(&system)[0];
    let p0 = system.bodies[0].position;
    let v0 = system.bodies[0].velocity;

    SemiImplicitEuler.step(&mut system, dt, &force);

    let v1 = v0 + a0 * dt;
    let p1 = p0 + v1 * dt;
    assert_relative_eq!(system.bodies[0].velocity, v1, max_relative = 1e-12);
    assert_relative_eq!(system.bodies[0].position, p1, max_relative = 1e-12);
}

#[test]
fn test_lone_body_moves_with_constant_velocity() {
    let mut system = SystemState::new();
    system
        .add_body(5.0, 1.0, Point3::new(1.0, 2.0, 3.0), Vector3::new(2.0, 0.0, -1.0))
        .unwrap();

    SemiImplicitEuler.integrate(&mut system, 0.1, 10, &DirectGravity::new());

    assert_eq!(system.bodies[0].velocity, Vector3::new(2.0, 0.0, -1.0));
    assert_relative_eq!(
        system.bodies[0].position,
        Point3::new(3.0, 2.0, 2.0),
        max_relative = 1e-12
    );
}

#[test]
fn test_euler_conserves_momentum() {
    let mut system = make_pair();
    let initial = system.total_momentum();

    SemiImplicitEuler.integrate(&mut system, 1.0 / 60.0, 600, &DirectGravity::new());

    assert_relative_eq!(system.total_momentum(), initial, epsilon = 1e-9);
}

#[test]
fn test_dead_bodies_do_not_move() {
    let mut system = make_pair();
    system.bodies[1].tombstone();
    let frozen = system.bodies[1].position;

    SemiImplicitEuler.integrate(&mut system, 1.0 / 60.0, 30, &DirectGravity::new());

    assert_eq!(system.bodies[1].position, frozen);
    // The survivor no longer feels any pull
    assert_eq!(system.bodies[0].velocity, Vector3::new(0.0, 0.0, 0.3));
}

#[test]
fn test_leapfrog_energy_drift_is_small() {
    let mut system = make_pair();
    let force = DirectGravity::new();
    let initial = system.kinetic_energy() + force.potential_energy(&system);

    Leapfrog.integrate(&mut system, 1.0 / 120.0, 1200, &force);

    let final_energy = system.kinetic_energy() + force.potential_energy(&system);
    let error = ((final_energy - initial) / initial).abs();
    assert!(error < 1e-3, "Energy error: {:.2e}", error);
}

#[test]
fn test_zero_timestep_is_a_no_op() {
    let mut system = make_pair();
    let before = system.bodies.clone();

    SemiImplicitEuler.step(&mut system, 0.0, &DirectGravity::new());

    assert_eq!(system.bodies, before);
}
