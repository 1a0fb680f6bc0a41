use approx::assert_relative_eq;
use nalgebra::Point3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::config::EffectsConfig;
use crate::effects::*;

#[test]
fn test_fade_curve_knots() {
    let fade = LinearSpline::fade();
    assert_eq!(fade.get(0.0), 0.0);
    assert_relative_eq!(fade.get(0.05), 0.5);
    assert_eq!(fade.get(0.1), 1.0);
    assert_eq!(fade.get(0.3), 1.0);
    assert_relative_eq!(fade.get(0.75), 0.5);
    assert_eq!(fade.get(1.0), 0.0);
    assert_eq!(fade.get(2.0), 0.0);
    assert_eq!(fade.get(-1.0), 0.0);
}

#[test]
fn test_empty_spline_is_zero() {
    assert_eq!(LinearSpline::new(Vec::new()).get(0.5), 0.0);
}

#[test]
fn test_burst_scatters_within_jitter() {
    let mut effects = ExplosionSystem::new(EffectsConfig::default());
    let mut rng = ChaChaRng::seed_from_u64(11);
    let origin = Point3::new(5.0, -3.0, 2.0);

    effects.burst(origin, &mut rng);

    assert_eq!(effects.particles().len(), 10);
    for p in effects.particles() {
        let offset = p.position - origin;
        assert!(offset.iter().all(|c| c.abs() <= 1.0));
        assert!(p.color.iter().all(|c| (0.0..1.0).contains(c)));
        assert!((0.0..1.0).contains(&p.alpha));
        assert_eq!(p.remaining_life, 0.1);
    }
}

#[test]
fn test_particles_die_after_their_life() {
    let mut effects = ExplosionSystem::new(EffectsConfig::default());
    let mut rng = ChaChaRng::seed_from_u64(0);
    effects.burst(Point3::origin(), &mut rng);

    effects.step(0.05);
    assert_eq!(effects.particles().len(), 10);

    effects.step(0.05);
    assert!(effects.particles().is_empty());
}

#[test]
fn test_step_spins_and_fades() {
    let config = EffectsConfig {
        particle_life: 1.0,
        ..EffectsConfig::default()
    };
    let mut effects = ExplosionSystem::new(config);
    let mut rng = ChaChaRng::seed_from_u64(0);
    effects.burst(Point3::origin(), &mut rng);
    let before: Vec<f64> = effects.particles().iter().map(|p| p.rotation).collect();

    effects.step(0.25);

    for (p, rotation) in effects.particles().iter().zip(before) {
        assert_relative_eq!(p.rotation, rotation + 0.5 * 0.25);
        assert_eq!(p.alpha, 1.0);
    }

    effects.step(0.5);
    for p in effects.particles() {
        assert_relative_eq!(p.alpha, 0.5, epsilon = 1e-6);
    }
}

#[test]
fn test_without_fade_alpha_is_kept() {
    let config = EffectsConfig {
        fade: false,
        ..EffectsConfig::default()
    };
    let mut effects = ExplosionSystem::new(config);
    let mut rng = ChaChaRng::seed_from_u64(4);
    effects.burst(Point3::origin(), &mut rng);
    let before: Vec<f32> = effects.particles().iter().map(|p| p.alpha).collect();

    effects.step(0.01);

    let after: Vec<f32> = effects.particles().iter().map(|p| p.alpha).collect();
    assert_eq!(before, after);
}

#[test]
fn test_zero_jitter_stacks_on_origin() {
    let config = EffectsConfig {
        jitter: 0.0,
        particles_per_burst: 3,
        ..EffectsConfig::default()
    };
    let mut effects = ExplosionSystem::new(config);
    let mut rng = ChaChaRng::seed_from_u64(4);
    effects.burst(Point3::new(1.0, 2.0, 3.0), &mut rng);

    assert_eq!(effects.particles().len(), 3);
    assert!(effects.particles().iter().all(|p| p.position == Point3::new(1.0, 2.0, 3.0)));
}
