use serde::{Deserialize, Serialize};

/// Engagement constants shared by every agent in a roster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombatConfig {
    /// A projectile hits an agent closer than this
    pub hit_radius: f64,
    /// Distance ahead of the ship at which projectiles appear
    pub muzzle_offset: f64,
    /// Spawn agents Active instead of waiting for their model to load
    pub instant_load: bool,
}

impl Default for CombatConfig {
    fn default() -> Self {
        CombatConfig {
            hit_radius: 10.0,
            muzzle_offset: 1.5,
            instant_load: false,
        }
    }
}
