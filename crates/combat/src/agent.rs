//! Combat agents
//!
//! An agent is a ship driven by its class's behavior. It is created
//! `Loading`, becomes `Active` once its model is ready, and ends
//! `Destroyed` either by damage or by an external request. Destroyed is
//! terminal.
//!
//! Agents never see the roster directly. The roster picks a target and hands
//! it to [`Agent::update`]; anything the agent wants added to the roster
//! (a drone launch) comes back as a [`LaunchRequest`].

use crate::aim::{look_rotation, spread_direction};
use crate::ammunition::AmmunitionKind;
use crate::class::{BehaviorKind, LauncherSpec, Movement, ShipClass};
use crate::config::CombatConfig;
use crate::projectile::Projectile;
use nalgebra::{Point3, UnitQuaternion, Vector3};
use rand_chacha::ChaChaRng;
use tracing::debug;

/// Stable handle to an agent; an index into its roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl AgentId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Hostility group. Agents on the same team never engage each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    /// Waiting for the renderer to finish loading the model
    Loading,
    Active,
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Health { current: max, max }
    }

    /// Remaining health in [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

/// Where an orbiting agent is in its attack run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Maneuver {
    Holding,
    Approaching,
    /// Circling the target; `angle` is the bearing in the XZ plane
    Strafing { angle: f64 },
}

/// Drone bay state of a carrier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launcher {
    pub cooldown: f64,
    pub spec: LauncherSpec,
}

/// Target chosen for an agent this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetInfo {
    pub id: AgentId,
    pub position: Point3<f64>,
}

/// A carrier asking its roster for a new drone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchRequest {
    pub carrier: AgentId,
    pub team: TeamId,
    pub position: Point3<f64>,
    pub target: AgentId,
    pub max_drones: usize,
}

/// Result of [`Agent::apply_damage`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    /// Damage actually counted after sanitising the input
    pub applied: f64,
    pub health: Health,
    /// The hit took the agent's health to zero
    pub destroyed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: AgentId,
    pub team: TeamId,
    pub class: ShipClass,
    pub ammunition: AmmunitionKind,
    pub position: Point3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub health: Health,
    /// Seconds between volleys
    pub fire_rate: f64,
    /// Seconds until the next volley
    pub cooldown: f64,
    pub volley_size: u32,
    pub spread_arc: f64,
    pub state: AgentState,
    pub projectiles: Vec<Projectile>,
    /// Target engaged during the last update
    pub target: Option<AgentId>,
    /// Target wired in at launch; kept while it stays engageable
    pub assigned_target: Option<AgentId>,
    /// Carrier that launched this agent
    pub owner: Option<AgentId>,
    pub maneuver: Maneuver,
    pub launcher: Option<Launcher>,
}

impl Agent {
    /// Creates a `Loading` agent with its class defaults
    ///
    /// # Examples
    ///
    /// ```
    /// use combat::agent::{Agent, AgentId, AgentState, TeamId};
    /// use combat::class::BehaviorKind;
    /// use nalgebra::Point3;
    ///
    /// let cruiser = Agent::new(AgentId(0), TeamId(0), BehaviorKind::Cruiser, Point3::origin());
    /// assert_eq!(cruiser.state, AgentState::Loading);
    /// assert_eq!(cruiser.volley_size, 2);
    /// assert_eq!(cruiser.health.current, 300.0);
    /// ```
    pub fn new(id: AgentId, team: TeamId, kind: BehaviorKind, position: Point3<f64>) -> Self {
        let class = kind.class();
        let maneuver = match class.movement {
            Movement::Stationary => Maneuver::Holding,
            Movement::Orbit { .. } => Maneuver::Approaching,
        };
        Agent {
            id,
            team,
            class,
            ammunition: class.ammunition,
            position,
            orientation: UnitQuaternion::identity(),
            health: Health::full(class.max_health),
            fire_rate: class.fire_rate,
            cooldown: class.initial_cooldown,
            volley_size: class.volley_size,
            spread_arc: class.spread_arc,
            state: AgentState::Loading,
            projectiles: Vec::new(),
            target: None,
            assigned_target: None,
            owner: None,
            maneuver,
            launcher: class.launcher.map(|spec| Launcher {
                cooldown: spec.first_launch,
                spec,
            }),
        }
    }

    pub fn kind(&self) -> BehaviorKind {
        self.class.kind
    }

    pub fn is_active(&self) -> bool {
        self.state == AgentState::Active
    }

    pub fn is_alive(&self) -> bool {
        self.state != AgentState::Destroyed
    }

    /// Unit vector the model's nose points along
    pub fn forward(&self) -> Vector3<f64> {
        self.orientation * Vector3::z()
    }

    /// Loading → Active. Returns `false` in any other state.
    pub fn mark_loaded(&mut self) -> bool {
        if self.state != AgentState::Loading {
            return false;
        }
        self.state = AgentState::Active;
        true
    }

    /// Advances the agent by `dt` against `target`
    ///
    /// Loading and destroyed agents are left untouched. Without a target the
    /// agent neither turns, moves, fires nor launches, but its projectiles
    /// still fly and expire.
    pub fn update(
        &mut self,
        dt: f64,
        target: Option<TargetInfo>,
        config: &CombatConfig,
        rng: &mut ChaChaRng,
    ) -> Option<LaunchRequest> {
        if !self.is_active() {
            return None;
        }

        let target_id = target.map(|t| t.id);
        if self.target != target_id {
            self.target = target_id;
            if let Maneuver::Strafing { .. } = self.maneuver {
                self.maneuver = Maneuver::Approaching;
            }
        }

        let mut launch = None;
        if let Some(target) = target {
            self.maneuver_around(&target.position, dt);
            self.face(&target.position);

            self.cooldown = (self.cooldown - dt).max(0.0);
            if self.cooldown <= 0.0 {
                self.fire_volley(config.muzzle_offset, rng);
                self.cooldown = self.fire_rate;
            }

            launch = self.tick_launcher(dt, target.id);
        }

        self.advance_projectiles(dt);
        launch
    }

    /// Turns the agent to face `point`; a coincident point leaves it as is
    pub fn face(&mut self, point: &Point3<f64>) {
        if let Some(rotation) = look_rotation(&(point - self.position)) {
            self.orientation = rotation;
        }
    }

    fn maneuver_around(&mut self, target: &Point3<f64>, dt: f64) {
        let Movement::Orbit {
            radius,
            angular_speed,
            approach_speed,
        } = self.class.movement
        else {
            return;
        };

        match self.maneuver {
            Maneuver::Holding => {}
            Maneuver::Approaching => {
                let offset = self.position - target;
                let distance = offset.magnitude();
                if distance <= radius {
                    self.maneuver = Maneuver::Strafing {
                        angle: offset.z.atan2(offset.x),
                    };
                    return;
                }
                let step = approach_speed * dt;
                if step >= distance - radius {
                    self.position = target + offset * (radius / distance);
                } else {
                    self.position -= offset * (step / distance);
                }
            }
            Maneuver::Strafing { angle } => {
                let angle = angle + angular_speed * dt;
                self.position = target + Vector3::new(angle.cos(), 0.0, angle.sin()) * radius;
                self.maneuver = Maneuver::Strafing { angle };
            }
        }
    }

    fn fire_volley(&mut self, muzzle_offset: f64, rng: &mut ChaChaRng) {
        let heading = self.orientation * Vector3::z_axis();
        let origin = self.position + heading.into_inner() * muzzle_offset;
        for _ in 0..self.volley_size {
            let direction = spread_direction(&heading, self.spread_arc, rng);
            self.projectiles
                .push(Projectile::of_kind(self.ammunition, origin, direction.into_inner()));
        }
    }

    fn tick_launcher(&mut self, dt: f64, target: AgentId) -> Option<LaunchRequest> {
        let forward = self.forward();
        let launcher = self.launcher.as_mut()?;
        launcher.cooldown = (launcher.cooldown - dt).max(0.0);
        if launcher.cooldown > 0.0 {
            return None;
        }
        launcher.cooldown = launcher.spec.interval;
        Some(LaunchRequest {
            carrier: self.id,
            team: self.team,
            position: self.position + forward * launcher.spec.launch_distance,
            target,
            max_drones: launcher.spec.max_drones,
        })
    }

    fn advance_projectiles(&mut self, dt: f64) {
        for projectile in &mut self.projectiles {
            projectile.update(dt);
        }
        self.projectiles.retain(|p| p.is_live());
    }

    /// Removes `amount` health from an Active agent
    ///
    /// Negative, NaN or infinite amounts count as zero. Returns `None` when
    /// the agent is not Active; such agents take no damage.
    ///
    /// # Examples
    ///
    /// ```
    /// use combat::agent::{Agent, AgentId, TeamId};
    /// use combat::class::BehaviorKind;
    /// use nalgebra::Point3;
    ///
    /// let mut drone = Agent::new(AgentId(0), TeamId(0), BehaviorKind::Drone, Point3::origin());
    /// drone.mark_loaded();
    /// let outcome = drone.apply_damage(25.0).unwrap();
    /// assert!(outcome.destroyed);
    /// assert_eq!(drone.health.current, 0.0);
    /// assert!(!drone.is_alive());
    /// ```
    pub fn apply_damage(&mut self, amount: f64) -> Option<DamageOutcome> {
        if !self.is_active() {
            return None;
        }
        let applied = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        self.health.current = (self.health.current - applied).max(0.0);

        let destroyed = self.health.is_depleted();
        if destroyed {
            self.destroy();
        }
        Some(DamageOutcome {
            applied,
            health: self.health,
            destroyed,
        })
    }

    /// Moves the agent to `Destroyed` and drops its projectiles
    ///
    /// Returns `false` if it was already destroyed.
    pub fn destroy(&mut self) -> bool {
        if self.state == AgentState::Destroyed {
            return false;
        }
        self.state = AgentState::Destroyed;
        self.projectiles.clear();
        self.target = None;
        debug!(agent = self.id.0, kind = self.kind().label(), "agent destroyed");
        true
    }
}
