//! Simulation configuration
//!
//! Every field has a default, so `{}` is a complete configuration. Keys are
//! camelCase to match what the browser sends.
//!
//! ```
//! use solar_sim::config::{IntegratorKind, SimConfig};
//!
//! let json = r#"{ "gravity": { "integrator": "leapfrog" }, "seed": 7 }"#;
//! let config = SimConfig::from_json(json).unwrap();
//! assert_eq!(config.gravity.integrator, IntegratorKind::Leapfrog);
//! assert_eq!(config.gravity.softening, 0.01);
//! assert_eq!(config.combat.hit_radius, 10.0);
//! ```

use crate::error::ConfigError;
use nbody::forces::{G, SOFTENING};
use serde::{Deserialize, Serialize};

pub use combat::CombatConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntegratorKind {
    #[default]
    SemiImplicitEuler,
    Leapfrog,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GravityConfig {
    pub g: f64,
    /// Added to the squared distance of every pair
    pub softening: f64,
    pub integrator: IntegratorKind,
}

impl Default for GravityConfig {
    fn default() -> Self {
        GravityConfig {
            g: G,
            softening: SOFTENING,
            integrator: IntegratorKind::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectsConfig {
    pub particles_per_burst: usize,
    /// Seconds each particle lives
    pub particle_life: f64,
    /// Radians per second
    pub spin_rate: f64,
    /// Half-width of the cube particles scatter in
    pub jitter: f64,
    /// Drive alpha from the fade curve instead of keeping the spawn alpha
    pub fade: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            particles_per_burst: 10,
            particle_life: 0.1,
            spin_rate: 0.5,
            jitter: 1.0,
            fade: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    pub gravity: GravityConfig,
    pub combat: CombatConfig,
    pub effects: EffectsConfig,
    /// Seed for spread jitter and particle scatter
    pub seed: u64,
}

fn check(
    field: &'static str,
    value: f64,
    expected: &'static str,
    ok: impl Fn(f64) -> bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected,
            value,
        })
    }
}

impl SimConfig {
    /// Parses and validates a JSON configuration
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::OutOfRange`]
    /// for values [`validate`](Self::validate) refuses.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("gravity.g", self.gravity.g, "non-negative", |v| v >= 0.0)?;
        check("gravity.softening", self.gravity.softening, "positive", |v| v > 0.0)?;
        check("combat.hitRadius", self.combat.hit_radius, "non-negative", |v| v >= 0.0)?;
        check("combat.muzzleOffset", self.combat.muzzle_offset, "finite", |_| true)?;
        check("effects.particleLife", self.effects.particle_life, "positive", |v| v > 0.0)?;
        check("effects.spinRate", self.effects.spin_rate, "finite", |_| true)?;
        check("effects.jitter", self.effects.jitter, "non-negative", |v| v >= 0.0)?;
        Ok(())
    }
}
