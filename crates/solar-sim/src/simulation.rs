//! The frame driver
//!
//! [`Simulation`] owns the free-body system, the agent roster, the particle
//! effects and the random stream they share. Each call to
//! [`Simulation::advance`] runs one frame in a fixed order:
//!
//! 1. agents update (targeting, movement, firing, drone launches) and move
//!    their own projectiles;
//! 2. projectiles are hit-tested against agents;
//! 3. gravity integrates the living bodies;
//! 4. overlapping bodies are destroyed in pairs;
//! 5. explosion particles age.

use crate::config::{IntegratorKind, SimConfig};
use crate::effects::{ExplosionSystem, Particle};
use crate::error::SimError;
use crate::events::{ExplosionCause, FrameReport, SimEvent};
use crate::spawn::{AgentSpawn, BodySpawn};
use combat::{Agent, AgentId, AgentRoster, BehaviorKind};
use nbody::collisions::handle_collisions;
use nbody::forces::{DirectGravity, ForceModel};
use nbody::integrator::{Integrator, Leapfrog, SemiImplicitEuler};
use nbody::{Body, BodyId, SystemState};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::{debug, trace, warn};

fn integrator(kind: IntegratorKind) -> &'static dyn Integrator {
    match kind {
        IntegratorKind::SemiImplicitEuler => &SemiImplicitEuler,
        IntegratorKind::Leapfrog => &Leapfrog,
    }
}

pub struct Simulation {
    config: SimConfig,
    state: SystemState,
    gravity: DirectGravity,
    roster: AgentRoster,
    effects: ExplosionSystem,
    rng: ChaChaRng,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::build(SimConfig::default())
    }
}

impl Simulation {
    /// Creates an empty scene
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use solar_sim::{SimConfig, Simulation};
    ///
    /// let sim = Simulation::new(SimConfig::default()).unwrap();
    /// assert!(sim.bodies().is_empty());
    /// assert!(sim.agents().is_empty());
    /// ```
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SimConfig) -> Self {
        Simulation {
            gravity: DirectGravity::with_constants(config.gravity.g, config.gravity.softening),
            state: SystemState::new(),
            roster: AgentRoster::new(),
            effects: ExplosionSystem::new(config.effects),
            rng: ChaChaRng::seed_from_u64(config.seed),
            config,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn time(&self) -> f64 {
        self.state.time
    }

    /// Adds a free body
    ///
    /// # Examples
    ///
    /// ```
    /// use solar_sim::Simulation;
    /// use solar_sim::spawn::BodySpawn;
    /// use nalgebra::Point3;
    ///
    /// let mut sim = Simulation::default();
    /// let id = sim.spawn_body(BodySpawn::planet(Point3::new(0.0, 0.0, -10.0), 1.0)).unwrap();
    /// assert!(sim.body(id).unwrap().alive);
    /// assert!(sim.spawn_body(BodySpawn::planet(Point3::origin(), -1.0)).is_err());
    /// ```
    pub fn spawn_body(&mut self, spawn: BodySpawn) -> Result<BodyId, SimError> {
        self.state
            .add_body(spawn.mass, spawn.radius, spawn.position, spawn.velocity)
            .map_err(|err| {
                warn!(%err, "rejected body spawn");
                err.into()
            })
    }

    /// Adds a ship
    ///
    /// The ship starts `Loading` unless `combat.instantLoad` is set; call
    /// [`mark_agent_loaded`](Self::mark_agent_loaded) once its model is ready.
    pub fn spawn_agent(&mut self, spawn: AgentSpawn) -> Result<AgentId, SimError> {
        self.roster.spawn(spawn, &self.config.combat).map_err(|err| {
            warn!(%err, kind = spawn.kind.label(), "rejected agent spawn");
            err.into()
        })
    }

    /// Loading → Active. `Ok(false)` if the agent was not loading.
    pub fn mark_agent_loaded(&mut self, id: AgentId) -> Result<bool, SimError> {
        let agent = self.roster.get_mut(id).ok_or(SimError::UnknownAgent(id.0))?;
        Ok(agent.mark_loaded())
    }

    /// Destroys an agent outside of combat. `Ok(false)` if already destroyed.
    pub fn destroy_agent(&mut self, id: AgentId) -> Result<bool, SimError> {
        let agent = self.roster.get_mut(id).ok_or(SimError::UnknownAgent(id.0))?;
        Ok(agent.destroy())
    }

    /// Runs one frame of `dt` seconds
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidTimestep`] for a negative or non-finite `dt`; the
    /// scene is left untouched.
    pub fn advance(&mut self, dt: f64) -> Result<FrameReport, SimError> {
        if !(dt.is_finite() && dt >= 0.0) {
            warn!(dt, "rejected timestep");
            return Err(SimError::InvalidTimestep(dt));
        }
        let mut events = Vec::new();

        for launch in self.roster.update(dt, &self.config.combat, &mut self.rng) {
            events.push(SimEvent::AgentSpawned {
                agent: launch.drone,
                kind: BehaviorKind::Drone,
                owner: Some(launch.carrier),
                position: launch.position,
            });
        }

        for hit in self.roster.hit_test(self.config.combat.hit_radius) {
            events.push(SimEvent::HealthChanged {
                agent: hit.target,
                current: hit.health.current,
                max: hit.health.max,
            });
            if hit.destroyed {
                debug!(agent = hit.target.0, by = hit.attacker.0, "agent killed");
                events.push(SimEvent::AgentDestroyed {
                    agent: hit.target,
                    by: Some(hit.attacker),
                });
                events.push(SimEvent::Explosion {
                    point: hit.position,
                    cause: ExplosionCause::Kill { agent: hit.target },
                });
                self.effects.burst(hit.position, &mut self.rng);
            }
        }

        integrator(self.config.gravity.integrator).step(&mut self.state, dt, &self.gravity);

        for explosion in handle_collisions(&mut self.state) {
            events.push(SimEvent::BodyDestroyed {
                body: explosion.body_a,
            });
            events.push(SimEvent::BodyDestroyed {
                body: explosion.body_b,
            });
            events.push(SimEvent::Explosion {
                point: explosion.point,
                cause: ExplosionCause::Collision {
                    body_a: explosion.body_a,
                    body_b: explosion.body_b,
                },
            });
            self.effects.burst(explosion.point, &mut self.rng);
        }

        self.effects.step(dt);

        trace!(
            time = self.state.time,
            bodies = self.state.alive_count(),
            agents = self.roster.alive_count(),
            particles = self.effects.particles().len(),
            events = events.len(),
            "frame"
        );
        Ok(FrameReport {
            time: self.state.time,
            events,
        })
    }

    /// Every body ever spawned, including destroyed ones
    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    /// Every agent ever spawned, including destroyed ones
    pub fn agents(&self) -> &[Agent] {
        self.roster.agents()
    }

    pub fn particles(&self) -> &[Particle] {
        self.effects.particles()
    }

    pub fn body(&self, id: BodyId) -> Result<&Body, SimError> {
        self.state.get_body(id).ok_or(SimError::UnknownBody(id.0))
    }

    pub fn agent(&self, id: AgentId) -> Result<&Agent, SimError> {
        self.roster.get(id).ok_or(SimError::UnknownAgent(id.0))
    }

    /// Kinetic plus softened potential energy of the living bodies
    pub fn total_energy(&self) -> f64 {
        self.state.kinetic_energy() + self.gravity.potential_energy(&self.state)
    }
}
