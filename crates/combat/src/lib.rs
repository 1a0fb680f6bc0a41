//! Ship combat.
//!
//! Ships are autonomous agents. Each frame an Active agent picks the nearest
//! hostile, turns toward it, moves according to its class, fires volleys of
//! projectiles and, for carriers, launches drones. Projectiles are then
//! hit-tested against every agent, and each one damages at most once.

pub mod agent;
pub mod aim;
pub mod ammunition;
pub mod class;
pub mod config;
pub mod projectile;
pub mod roster;
pub mod targeting;

pub use agent::{Agent, AgentId, AgentState, Health, TeamId};
pub use ammunition::AmmunitionKind;
pub use class::BehaviorKind;
pub use config::CombatConfig;
pub use hit_test::HitEvent;
pub use projectile::Projectile;
pub use roster::{AgentRoster, AgentSpawn, DroneLaunch, SpawnError};

#[cfg(test)]
mod aim_test;
