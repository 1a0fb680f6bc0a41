use approx::assert_relative_eq;
use nalgebra::{Unit, Vector3};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::aim::{look_rotation, spread_direction};

#[test]
fn test_look_rotation_points_forward_axis_at_direction() {
    let directions = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::new(-3.0, 2.0, 5.0),
    ];
    for dir in directions {
        let rotation = look_rotation(&dir).unwrap();
        let forward = rotation * Vector3::z();
        assert_relative_eq!(forward, dir.normalize(), epsilon = 1e-9);
    }
}

#[test]
fn test_look_rotation_of_zero_is_none() {
    assert!(look_rotation(&Vector3::zeros()).is_none());
}

#[test]
fn test_zero_spread_keeps_heading() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let heading = Vector3::z_axis();
    let out = spread_direction(&heading, 0.0, &mut rng);
    assert_eq!(out, heading);
}

#[test]
fn test_spread_stays_within_arc() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let arc = 0.3;
    for heading in [
        Vector3::z_axis(),
        Vector3::y_axis(),
        Unit::new_normalize(Vector3::new(1.0, -2.0, 0.5)),
    ] {
        for _ in 0..200 {
            let out = spread_direction(&heading, arc, &mut rng);
            assert_relative_eq!(out.norm(), 1.0, epsilon = 1e-12);
            let angle = out.dot(&heading.into_inner()).clamp(-1.0, 1.0).acos();
            assert!(angle <= arc + 1e-9, "angle {angle} outside arc");
        }
    }
}

#[test]
fn test_spread_is_reproducible_from_seed() {
    let heading = Vector3::x_axis();
    let mut a = ChaChaRng::seed_from_u64(42);
    let mut b = ChaChaRng::seed_from_u64(42);
    for _ in 0..10 {
        assert_eq!(
            spread_direction(&heading, 0.1, &mut a),
            spread_direction(&heading, 0.1, &mut b)
        );
    }
}
