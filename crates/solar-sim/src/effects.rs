//! Explosion particle effects
//!
//! Bursts of short-lived particles spawned where bodies collide and where
//! ships die. Particles carry no physics; they only age, spin and fade.

use crate::config::EffectsConfig;
use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand_chacha::ChaChaRng;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point3<f64>,
    pub color: [f32; 3],
    pub alpha: f32,
    pub size: f32,
    pub rotation: f64,
    /// Seconds left before the particle is dropped
    pub remaining_life: f64,
    pub life: f64,
}

impl Particle {
    /// Fraction of the particle's life already spent, in [0, 1]
    pub fn age_fraction(&self) -> f64 {
        if self.life > 0.0 {
            (1.0 - self.remaining_life / self.life).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Piecewise-linear curve through `(t, value)` knots sorted by `t`
///
/// Outside the knot range the curve holds its end values.
///
/// # Examples
///
/// ```
/// use solar_sim::effects::LinearSpline;
///
/// let spline = LinearSpline::new(vec![(0.0, 0.0), (1.0, 2.0)]);
/// assert_eq!(spline.get(0.25), 0.5);
/// assert_eq!(spline.get(3.0), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSpline {
    knots: Vec<(f64, f64)>,
}

impl LinearSpline {
    pub fn new(knots: Vec<(f64, f64)>) -> Self {
        LinearSpline { knots }
    }

    /// Alpha over normalized age: fade in fast, hold, fade out
    pub fn fade() -> Self {
        Self::new(vec![(0.0, 0.0), (0.1, 1.0), (0.5, 1.0), (1.0, 0.0)])
    }

    pub fn get(&self, t: f64) -> f64 {
        let Some(&(first_t, first_v)) = self.knots.first() else {
            return 0.0;
        };
        if t <= first_t {
            return first_v;
        }
        for pair in self.knots.windows(2) {
            let (t0, v0) = pair[0];
            let (t1, v1) = pair[1];
            if t <= t1 {
                let span = t1 - t0;
                if span <= 0.0 {
                    return v1;
                }
                return v0 + (v1 - v0) * (t - t0) / span;
            }
        }
        self.knots.last().map_or(first_v, |&(_, v)| v)
    }
}

#[derive(Debug, Clone)]
pub struct ExplosionSystem {
    config: EffectsConfig,
    alpha: LinearSpline,
    particles: Vec<Particle>,
}

impl ExplosionSystem {
    pub fn new(config: EffectsConfig) -> Self {
        ExplosionSystem {
            config,
            alpha: LinearSpline::fade(),
            particles: Vec::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Scatters one burst of particles around `origin`
    pub fn burst(&mut self, origin: Point3<f64>, rng: &mut ChaChaRng) {
        let jitter = self.config.jitter;
        for _ in 0..self.config.particles_per_burst {
            let offset = Vector3::from_fn(|_, _| {
                if jitter > 0.0 {
                    rng.random_range(-jitter..=jitter)
                } else {
                    0.0
                }
            });
            self.particles.push(Particle {
                position: origin + offset,
                color: [rng.random(), rng.random(), rng.random()],
                alpha: rng.random(),
                size: 1.0,
                rotation: rng.random::<f64>() * TAU,
                remaining_life: self.config.particle_life,
                life: self.config.particle_life,
            });
        }
    }

    /// Ages every particle by `dt` and drops the dead ones
    pub fn step(&mut self, dt: f64) {
        for particle in &mut self.particles {
            particle.remaining_life -= dt;
        }
        self.particles.retain(|p| p.remaining_life > 0.0);

        let spin = self.config.spin_rate * dt;
        for particle in &mut self.particles {
            particle.rotation += spin;
            if self.config.fade {
                particle.alpha = self.alpha.get(particle.age_fraction()) as f32;
            }
        }
    }
}
