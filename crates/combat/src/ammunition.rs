//! Ammunition kinds and the projectile parameters they select

use serde::{Deserialize, Serialize};

/// What a ship fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AmmunitionKind {
    Bullet,
    Missile,
    /// Drone munitions fired by carriers alongside their launched drones
    Drone,
}

/// Fixed parameters for one ammunition kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmmunitionSpec {
    /// Asset id of the projectile model
    pub model: &'static str,
    /// Uniform scale applied to the model
    pub scale: f64,
    /// Muzzle speed in world units per second
    pub speed: f64,
    /// Health removed from the target on a hit
    pub damage: f64,
    /// Seconds before an unspent projectile is reaped
    pub lifetime: f64,
}

impl AmmunitionKind {
    pub const ALL: [AmmunitionKind; 3] = [Self::Bullet, Self::Missile, Self::Drone];

    /// Projectile parameters for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use combat::ammunition::AmmunitionKind;
    ///
    /// let missile = AmmunitionKind::Missile.spec();
    /// assert!(missile.speed > AmmunitionKind::Bullet.spec().speed);
    /// ```
    pub const fn spec(self) -> AmmunitionSpec {
        match self {
            Self::Bullet => AmmunitionSpec {
                model: "bullet",
                scale: 0.5,
                speed: 100.0,
                damage: 1.0,
                lifetime: 5.0,
            },
            Self::Missile => AmmunitionSpec {
                model: "missile",
                scale: 20.0,
                speed: 1000.0,
                damage: 5.0,
                lifetime: 3.0,
            },
            Self::Drone => AmmunitionSpec {
                model: "drones",
                scale: 1.0,
                speed: 60.0,
                damage: 2.0,
                lifetime: 8.0,
            },
        }
    }
}
