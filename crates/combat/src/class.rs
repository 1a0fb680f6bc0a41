//! Ship classes
//!
//! Each [`BehaviorKind`] maps to a fixed [`ShipClass`] record describing its
//! model, durability, weapon and movement strategy. Per-ship overrides are
//! applied at spawn time and never touch the table.

use crate::ammunition::AmmunitionKind;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BehaviorKind {
    Fighter,
    Cruiser,
    Carrier,
    Drone,
}

/// How a ship moves while engaging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Movement {
    /// Stays where it was placed and only turns to face its target
    Stationary,
    /// Flies straight at the target, then circles it while firing
    Orbit {
        /// Strafing circle radius around the target
        radius: f64,
        /// Radians per second along the strafing circle
        angular_speed: f64,
        /// Straight-line speed while closing in
        approach_speed: f64,
    },
}

/// Drone launch bay carried by carrier-class ships
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LauncherSpec {
    /// Seconds until the first launch
    pub first_launch: f64,
    /// Seconds between launches
    pub interval: f64,
    /// Living drones a single carrier may have at once
    pub max_drones: usize,
    /// How far ahead of the carrier a drone appears
    pub launch_distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipClass {
    pub kind: BehaviorKind,
    /// Asset id of the ship model
    pub model: &'static str,
    pub scale: f64,
    pub max_health: f64,
    /// Seconds between volleys
    pub fire_rate: f64,
    /// Cooldown at spawn
    pub initial_cooldown: f64,
    pub volley_size: u32,
    /// Radians of random jitter per shot
    pub spread_arc: f64,
    pub ammunition: AmmunitionKind,
    pub movement: Movement,
    pub launcher: Option<LauncherSpec>,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 4] = [Self::Fighter, Self::Cruiser, Self::Carrier, Self::Drone];

    /// Class record for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use combat::class::{BehaviorKind, Movement};
    ///
    /// let drone = BehaviorKind::Drone.class();
    /// assert!(matches!(drone.movement, Movement::Orbit { .. }));
    /// assert!(BehaviorKind::Carrier.class().launcher.is_some());
    /// ```
    pub const fn class(self) -> ShipClass {
        match self {
            Self::Fighter => ShipClass {
                kind: self,
                model: "fighter",
                scale: 0.1,
                max_health: 100.0,
                fire_rate: 0.1,
                initial_cooldown: 0.0,
                volley_size: 1,
                spread_arc: 0.05,
                ammunition: AmmunitionKind::Bullet,
                movement: Movement::Stationary,
                launcher: None,
            },
            Self::Cruiser => ShipClass {
                kind: self,
                model: "cruiser",
                scale: 0.1,
                max_health: 300.0,
                fire_rate: 0.5,
                initial_cooldown: 0.0,
                volley_size: 2,
                spread_arc: 0.1,
                ammunition: AmmunitionKind::Missile,
                movement: Movement::Stationary,
                launcher: None,
            },
            Self::Carrier => ShipClass {
                kind: self,
                model: "carrier",
                scale: 20.0,
                max_health: 1000.0,
                fire_rate: 1.0,
                initial_cooldown: 0.0,
                volley_size: 1,
                spread_arc: 0.05,
                ammunition: AmmunitionKind::Drone,
                movement: Movement::Stationary,
                launcher: Some(LauncherSpec {
                    first_launch: 1.0,
                    interval: 5.0,
                    max_drones: 6,
                    launch_distance: 300.0,
                }),
            },
            Self::Drone => ShipClass {
                kind: self,
                model: "drones",
                scale: 30.0,
                max_health: 20.0,
                fire_rate: 0.5,
                initial_cooldown: 0.0,
                volley_size: 3,
                spread_arc: 0.3,
                ammunition: AmmunitionKind::Bullet,
                movement: Movement::Orbit {
                    radius: 10.0,
                    angular_speed: PI,
                    approach_speed: 40.0,
                },
                launcher: None,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fighter => "Fighter",
            Self::Cruiser => "Cruiser",
            Self::Carrier => "Carrier",
            Self::Drone => "Drone",
        }
    }
}
