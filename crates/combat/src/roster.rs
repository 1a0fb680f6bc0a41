use crate::agent::{Agent, AgentId, AgentState, Health, LaunchRequest, TeamId};
use crate::ammunition::AmmunitionKind;
use crate::class::BehaviorKind;
use crate::config::CombatConfig;
use crate::hit_test::{HitEvent, resolve_hits};
use crate::targeting::select_target;
use nalgebra::Point3;
use rand_chacha::ChaChaRng;
use thiserror::Error;
use tracing::debug;

/// Reasons an agent can be refused at spawn time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpawnError {
    #[error("volley size must be at least 1")]
    EmptyVolley,
    #[error("agent health must be positive and finite, got {0}")]
    InvalidHealth(f64),
    #[error("spread arc must be non-negative and finite, got {0}")]
    InvalidSpread(f64),
    #[error("fire rate must be non-negative and finite, got {0}")]
    InvalidFireRate(f64),
    #[error("agent position must be finite")]
    NonFinitePosition,
}

/// Request to add one agent to a roster
///
/// Anything left as `None` takes the class default. Without a team the
/// agent is put on a fresh team of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSpawn {
    pub kind: BehaviorKind,
    pub position: Point3<f64>,
    pub team: Option<TeamId>,
    pub ammunition: Option<AmmunitionKind>,
    pub health: Option<f64>,
    pub volley_size: Option<u32>,
    pub spread_arc: Option<f64>,
    pub fire_rate: Option<f64>,
}

impl AgentSpawn {
    pub fn new(kind: BehaviorKind, position: Point3<f64>) -> Self {
        AgentSpawn {
            kind,
            position,
            team: None,
            ammunition: None,
            health: None,
            volley_size: None,
            spread_arc: None,
            fire_rate: None,
        }
    }

    pub fn with_team(mut self, team: TeamId) -> Self {
        self.team = Some(team);
        self
    }

    pub fn with_ammunition(mut self, ammunition: AmmunitionKind) -> Self {
        self.ammunition = Some(ammunition);
        self
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_volley_size(mut self, volley_size: u32) -> Self {
        self.volley_size = Some(volley_size);
        self
    }

    pub fn with_spread_arc(mut self, spread_arc: f64) -> Self {
        self.spread_arc = Some(spread_arc);
        self
    }

    pub fn with_fire_rate(mut self, fire_rate: f64) -> Self {
        self.fire_rate = Some(fire_rate);
        self
    }
}

/// A drone added to the roster by its carrier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneLaunch {
    pub carrier: AgentId,
    pub drone: AgentId,
    pub position: Point3<f64>,
}

/// Every agent in a scene, living or destroyed
///
/// Agents are only appended; an [`AgentId`] is the agent's index and stays
/// valid for the lifetime of the roster.
#[derive(Debug, Clone, Default)]
pub struct AgentRoster {
    agents: Vec<Agent>,
    next_team: u32,
}

impl AgentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// A team no agent in the roster belongs to yet
    pub fn fresh_team(&mut self) -> TeamId {
        let team = TeamId(self.next_team);
        self.next_team += 1;
        team
    }

    /// Validates `spawn` and appends the agent
    ///
    /// # Errors
    ///
    /// Returns a [`SpawnError`] if an override is out of range; the roster
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use combat::class::BehaviorKind;
    /// use combat::config::CombatConfig;
    /// use combat::roster::{AgentRoster, AgentSpawn};
    /// use nalgebra::Point3;
    ///
    /// let mut roster = AgentRoster::new();
    /// let config = CombatConfig::default();
    ///
    /// let id = roster
    ///     .spawn(AgentSpawn::new(BehaviorKind::Fighter, Point3::origin()), &config)
    ///     .unwrap();
    /// assert_eq!(id.0, 0);
    ///
    /// let bad = AgentSpawn::new(BehaviorKind::Fighter, Point3::origin()).with_volley_size(0);
    /// assert!(roster.spawn(bad, &config).is_err());
    /// assert_eq!(roster.len(), 1);
    /// ```
    pub fn spawn(
        &mut self,
        spawn: AgentSpawn,
        config: &CombatConfig,
    ) -> Result<AgentId, SpawnError> {
        if !spawn.position.coords.iter().all(|c| c.is_finite()) {
            return Err(SpawnError::NonFinitePosition);
        }
        let class = spawn.kind.class();

        let health = spawn.health.unwrap_or(class.max_health);
        if !(health.is_finite() && health > 0.0) {
            return Err(SpawnError::InvalidHealth(health));
        }
        let volley_size = spawn.volley_size.unwrap_or(class.volley_size);
        if volley_size == 0 {
            return Err(SpawnError::EmptyVolley);
        }
        let spread_arc = spawn.spread_arc.unwrap_or(class.spread_arc);
        if !(spread_arc.is_finite() && spread_arc >= 0.0) {
            return Err(SpawnError::InvalidSpread(spread_arc));
        }
        let fire_rate = spawn.fire_rate.unwrap_or(class.fire_rate);
        if !(fire_rate.is_finite() && fire_rate >= 0.0) {
            return Err(SpawnError::InvalidFireRate(fire_rate));
        }

        let team = match spawn.team {
            Some(team) => {
                self.next_team = self.next_team.max(team.0.saturating_add(1));
                team
            }
            None => self.fresh_team(),
        };

        let id = AgentId(self.agents.len() as u32);
        let mut agent = Agent::new(id, team, spawn.kind, spawn.position);
        agent.ammunition = spawn.ammunition.unwrap_or(class.ammunition);
        agent.health = Health::full(health);
        agent.volley_size = volley_size;
        agent.spread_arc = spread_arc;
        agent.fire_rate = fire_rate;
        if config.instant_load {
            agent.state = AgentState::Active;
        }

        debug!(agent = id.0, team = team.0, kind = spawn.kind.label(), "spawned agent");
        self.agents.push(agent);
        Ok(id)
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Number of agents, including destroyed ones
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_alive()).count()
    }

    pub fn active_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_active()).count()
    }

    /// Living drones launched by `carrier`
    pub fn drones_of(&self, carrier: AgentId) -> usize {
        self.agents
            .iter()
            .filter(|a| a.owner == Some(carrier) && a.is_alive())
            .count()
    }

    /// Updates every Active agent in roster order
    ///
    /// Each agent sees the positions of agents updated before it this frame.
    /// Drone launches are collected during the pass and appended afterwards,
    /// so new drones first act on the next frame.
    pub fn update(
        &mut self,
        dt: f64,
        config: &CombatConfig,
        rng: &mut ChaChaRng,
    ) -> Vec<DroneLaunch> {
        let mut requests = Vec::new();
        for index in 0..self.agents.len() {
            if !self.agents[index].is_active() {
                continue;
            }
            let target = select_target(&self.agents, index);
            if let Some(request) = self.agents[index].update(dt, target, config, rng) {
                requests.push(request);
            }
        }

        requests
            .into_iter()
            .filter_map(|request| self.launch_drone(request, config))
            .collect()
    }

    fn launch_drone(
        &mut self,
        request: LaunchRequest,
        config: &CombatConfig,
    ) -> Option<DroneLaunch> {
        if self.drones_of(request.carrier) >= request.max_drones {
            debug!(carrier = request.carrier.0, "drone bay full");
            return None;
        }

        let id = AgentId(self.agents.len() as u32);
        let mut drone = Agent::new(id, request.team, BehaviorKind::Drone, request.position);
        drone.owner = Some(request.carrier);
        drone.assigned_target = Some(request.target);
        if let Some(target) = self.get(request.target) {
            drone.face(&target.position);
        }
        if config.instant_load {
            drone.state = AgentState::Active;
        }

        debug!(
            carrier = request.carrier.0,
            drone = id.0,
            target = request.target.0,
            "launched drone"
        );
        self.agents.push(drone);
        Some(DroneLaunch {
            carrier: request.carrier,
            drone: id,
            position: request.position,
        })
    }

    /// Resolves projectile hits; see [`resolve_hits`]
    pub fn hit_test(&mut self, hit_radius: f64) -> Vec<HitEvent> {
        resolve_hits(&mut self.agents, hit_radius)
    }
}
