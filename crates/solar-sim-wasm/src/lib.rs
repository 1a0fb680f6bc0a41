//! WASM bindings for the solar-system skirmish.
//!
//! The renderer owns models, textures and input; this crate owns the
//! simulation. Scenes live in thread-local storage (WASM is single-threaded)
//! and are addressed by opaque IDs. Every read returns a serializable
//! snapshot.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const simId = simulation_create({ seed: 7 });
//!
//! // Drop a planet 10 units down the pick ray
//! const at = placement_point({ origin: [0, 0, 20], direction: [0, 0, -1], target: "planet" });
//! simulation_spawn_planet(simId, { position: at, sizeMultiplier: 1.5 });
//!
//! // Place a carrier; it starts loading until its model is in the scene
//! const shipId = simulation_spawn_ship(simId, { kind: "carrier", position: [0, 0, -1000] });
//! loader.load("carrier").then(() => simulation_mark_ship_loaded(simId, shipId));
//!
//! function frame(dt) {
//!   const { events } = simulation_advance(simId, dt);
//!   renderShips(simulation_get_ships(simId));
//!   renderParticles(simulation_get_particles(simId));
//! }
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use combat::{Agent, AgentId, AgentState, AmmunitionKind, BehaviorKind, TeamId};
use nalgebra::{Point3, Vector3};
use nbody::Body;
use solar_sim::effects::Particle;
use solar_sim::placement::{PLANET_DISTANCE, SHIP_DISTANCE, point_along_ray};
use solar_sim::{
    AgentSpawn, BodySpawn, ExplosionCause, FrameReport, SimConfig, SimEvent, Simulation,
};

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn point(p: [f64; 3]) -> Point3<f64> {
    Point3::new(p[0], p[1], p[2])
}

fn coords(p: &Point3<f64>) -> [f64; 3] {
    [p.x, p.y, p.z]
}

fn components(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

// =============================================================================
// Thread-local storage for simulations
// =============================================================================

thread_local! {
    static SIMULATIONS: RefCell<HashMap<u32, Simulation>> = RefCell::new(HashMap::new());
    static NEXT_SIM_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn not_found(sim_id: u32) -> JsError {
    JsError::new(&format!("Simulation {} not found", sim_id))
}

fn with_simulation<R>(
    sim_id: u32,
    f: impl FnOnce(&Simulation) -> Result<R, JsError>,
) -> Result<R, JsError> {
    SIMULATIONS.with(|sims| {
        let sims = sims.borrow();
        let sim = sims.get(&sim_id).ok_or_else(|| not_found(sim_id))?;
        f(sim)
    })
}

fn with_simulation_mut<R>(
    sim_id: u32,
    f: impl FnOnce(&mut Simulation) -> Result<R, JsError>,
) -> Result<R, JsError> {
    SIMULATIONS.with(|sims| {
        let mut sims = sims.borrow_mut();
        let sim = sims.get_mut(&sim_id).ok_or_else(|| not_found(sim_id))?;
        f(sim)
    })
}

// =============================================================================
// Serializable types for JavaScript interop
// =============================================================================

/// Planet placement
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetInput {
    pub position: [f64; 3],
    /// Radius multiplier from the size slider
    #[serde(default = "default_size_multiplier")]
    pub size_multiplier: f64,
    #[serde(default)]
    pub velocity: [f64; 3],
}

fn default_size_multiplier() -> f64 {
    1.0
}

impl From<&PlanetInput> for BodySpawn {
    fn from(input: &PlanetInput) -> Self {
        BodySpawn::planet(point(input.position), input.size_multiplier)
            .with_velocity(Vector3::from(input.velocity))
    }
}

/// Ship placement. Omitted fields take the class defaults; without a team
/// the ship fights everyone.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipInput {
    pub kind: BehaviorKind,
    pub position: [f64; 3],
    #[serde(default)]
    pub team: Option<u32>,
    #[serde(default)]
    pub ammunition: Option<AmmunitionKind>,
    #[serde(default)]
    pub health: Option<f64>,
    #[serde(default)]
    pub volley_size: Option<u32>,
    #[serde(default)]
    pub spread_arc: Option<f64>,
    #[serde(default)]
    pub fire_rate: Option<f64>,
}

impl From<&ShipInput> for AgentSpawn {
    fn from(input: &ShipInput) -> Self {
        AgentSpawn {
            team: input.team.map(TeamId),
            ammunition: input.ammunition,
            health: input.health,
            volley_size: input.volley_size,
            spread_arc: input.spread_arc,
            fire_rate: input.fire_rate,
            ..AgentSpawn::new(input.kind, point(input.position))
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PlacementTarget {
    Planet,
    Ship,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementInput {
    /// Camera position
    pub origin: [f64; 3],
    /// Pick ray direction, need not be normalized
    pub direction: [f64; 3],
    pub target: PlacementTarget,
    /// Overrides the distance implied by `target`
    #[serde(default)]
    pub distance: Option<f64>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: u32,
    pub mass: f64,
    pub radius: f64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub alive: bool,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id.0,
            mass: body.mass,
            radius: body.radius,
            position: coords(&body.position),
            velocity: components(&body.velocity),
            alive: body.alive,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ShipState {
    Loading,
    Active,
    Destroyed,
}

impl From<AgentState> for ShipState {
    fn from(state: AgentState) -> Self {
        match state {
            AgentState::Loading => ShipState::Loading,
            AgentState::Active => ShipState::Active,
            AgentState::Destroyed => ShipState::Destroyed,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipSnapshot {
    pub id: u32,
    pub team: u32,
    pub kind: BehaviorKind,
    /// Asset id the renderer loads
    pub model: &'static str,
    pub scale: f64,
    pub state: ShipState,
    pub position: [f64; 3],
    /// Quaternion as [x, y, z, w]
    pub orientation: [f64; 4],
    pub health: f64,
    pub max_health: f64,
    pub target: Option<u32>,
    pub owner: Option<u32>,
}

impl From<&Agent> for ShipSnapshot {
    fn from(agent: &Agent) -> Self {
        let q = agent.orientation.quaternion();
        Self {
            id: agent.id.0,
            team: agent.team.0,
            kind: agent.kind(),
            model: agent.class.model,
            scale: agent.class.scale,
            state: agent.state.into(),
            position: coords(&agent.position),
            orientation: [q.i, q.j, q.k, q.w],
            health: agent.health.current,
            max_health: agent.health.max,
            target: agent.target.map(|t| t.0),
            owner: agent.owner.map(|o| o.0),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectileSnapshot {
    pub owner: u32,
    pub kind: AmmunitionKind,
    pub model: &'static str,
    pub scale: f64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticleSnapshot {
    pub position: [f64; 3],
    pub color: [f32; 3],
    pub alpha: f32,
    pub size: f32,
    pub rotation: f64,
}

impl From<&Particle> for ParticleSnapshot {
    fn from(p: &Particle) -> Self {
        Self {
            position: coords(&p.position),
            color: p.color,
            alpha: p.alpha,
            size: p.size,
            rotation: p.rotation,
        }
    }
}

/// One frame's events for the renderer
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EventSnapshot {
    Explosion {
        point: [f64; 3],
        /// "collision" or "kill"
        cause: &'static str,
    },
    HealthChanged {
        ship: u32,
        current: f64,
        max: f64,
    },
    ShipDestroyed {
        ship: u32,
        by: Option<u32>,
    },
    ShipSpawned {
        ship: u32,
        kind: BehaviorKind,
        owner: Option<u32>,
        position: [f64; 3],
    },
    BodyDestroyed {
        body: u32,
    },
}

impl From<&SimEvent> for EventSnapshot {
    fn from(event: &SimEvent) -> Self {
        match *event {
            SimEvent::Explosion { point, cause } => EventSnapshot::Explosion {
                point: coords(&point),
                cause: match cause {
                    ExplosionCause::Collision { .. } => "collision",
                    ExplosionCause::Kill { .. } => "kill",
                },
            },
            SimEvent::HealthChanged {
                agent,
                current,
                max,
            } => EventSnapshot::HealthChanged {
                ship: agent.0,
                current,
                max,
            },
            SimEvent::AgentDestroyed { agent, by } => EventSnapshot::ShipDestroyed {
                ship: agent.0,
                by: by.map(|a| a.0),
            },
            SimEvent::AgentSpawned {
                agent,
                kind,
                owner,
                position,
            } => EventSnapshot::ShipSpawned {
                ship: agent.0,
                kind,
                owner: owner.map(|o| o.0),
                position: coords(&position),
            },
            SimEvent::BodyDestroyed { body } => EventSnapshot::BodyDestroyed { body: body.0 },
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub time: f64,
    pub events: Vec<EventSnapshot>,
}

impl From<&FrameReport> for FrameSnapshot {
    fn from(report: &FrameReport) -> Self {
        Self {
            time: report.time,
            events: report.events.iter().map(EventSnapshot::from).collect(),
        }
    }
}

fn projectile_snapshots(agents: &[Agent]) -> Vec<ProjectileSnapshot> {
    agents
        .iter()
        .filter(|a| a.is_alive())
        .flat_map(|agent| {
            agent.projectiles.iter().map(move |p| {
                let spec = p.kind.spec();
                ProjectileSnapshot {
                    owner: agent.id.0,
                    kind: p.kind,
                    model: spec.model,
                    scale: spec.scale,
                    position: coords(&p.position),
                    velocity: components(&p.velocity),
                }
            })
        })
        .collect()
}

fn placement(input: &PlacementInput) -> [f64; 3] {
    let distance = input.distance.unwrap_or(match input.target {
        PlacementTarget::Planet => PLANET_DISTANCE,
        PlacementTarget::Ship => SHIP_DISTANCE,
    });
    coords(&point_along_ray(
        point(input.origin),
        Vector3::from(input.direction),
        distance,
    ))
}

// =============================================================================
// Simulation management
// =============================================================================

/// Create a new simulation.
///
/// # Arguments
/// * `config` - Configuration object (see `SimConfig`); `undefined` for defaults
///
/// # Returns
/// A simulation ID for use with the other functions
#[wasm_bindgen]
pub fn simulation_create(config: JsValue) -> Result<u32, JsError> {
    let config: SimConfig = if config.is_undefined() || config.is_null() {
        SimConfig::default()
    } else {
        from_js(config)?
    };
    let simulation = Simulation::new(config)?;

    let id = NEXT_SIM_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SIMULATIONS.with(|sims| {
        sims.borrow_mut().insert(id, simulation);
    });

    Ok(id)
}

/// Delete a simulation to free memory.
#[wasm_bindgen]
pub fn simulation_delete(sim_id: u32) {
    SIMULATIONS.with(|sims| {
        sims.borrow_mut().remove(&sim_id);
    });
}

// =============================================================================
// Spawning
// =============================================================================

/// Add a planet.
///
/// # Arguments
/// * `sim_id` - Simulation ID
/// * `planet` - `{ position, sizeMultiplier?, velocity? }`
///
/// # Returns
/// The new body's ID
#[wasm_bindgen]
pub fn simulation_spawn_planet(sim_id: u32, planet: JsValue) -> Result<u32, JsError> {
    let planet: PlanetInput = from_js(planet)?;
    with_simulation_mut(sim_id, |sim| Ok(sim.spawn_body(BodySpawn::from(&planet))?.0))
}

/// Add a ship. It stays inert until `simulation_mark_ship_loaded`.
///
/// # Arguments
/// * `sim_id` - Simulation ID
/// * `ship` - `{ kind, position, team?, ammunition?, health?, volleySize?, spreadArc?, fireRate? }`
///
/// # Returns
/// The new ship's ID
#[wasm_bindgen]
pub fn simulation_spawn_ship(sim_id: u32, ship: JsValue) -> Result<u32, JsError> {
    let ship: ShipInput = from_js(ship)?;
    with_simulation_mut(sim_id, |sim| Ok(sim.spawn_agent(AgentSpawn::from(&ship))?.0))
}

/// Tell the simulation a ship's model has finished loading.
///
/// # Returns
/// true if the ship was loading and is now active
#[wasm_bindgen]
pub fn simulation_mark_ship_loaded(sim_id: u32, ship_id: u32) -> Result<bool, JsError> {
    with_simulation_mut(sim_id, |sim| Ok(sim.mark_agent_loaded(AgentId(ship_id))?))
}

/// Destroy a ship outside of combat.
///
/// # Returns
/// true if the ship was still alive
#[wasm_bindgen]
pub fn simulation_destroy_ship(sim_id: u32, ship_id: u32) -> Result<bool, JsError> {
    with_simulation_mut(sim_id, |sim| Ok(sim.destroy_agent(AgentId(ship_id))?))
}

// =============================================================================
// Stepping
// =============================================================================

/// Advance the simulation by one frame.
///
/// # Arguments
/// * `sim_id` - Simulation ID
/// * `dt` - Frame time in seconds
///
/// # Returns
/// `{ time, events }` where each event carries a `type` tag
#[wasm_bindgen]
pub fn simulation_advance(sim_id: u32, dt: f64) -> Result<JsValue, JsError> {
    with_simulation_mut(sim_id, |sim| {
        let report = sim.advance(dt)?;
        to_js(&FrameSnapshot::from(&report))
    })
}

// =============================================================================
// State queries
// =============================================================================

/// Get every body, destroyed ones included, for rendering.
#[wasm_bindgen]
pub fn simulation_get_bodies(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| {
        let bodies: Vec<BodySnapshot> = sim.bodies().iter().map(BodySnapshot::from).collect();
        to_js(&bodies)
    })
}

/// Get every ship, destroyed ones included, for rendering.
#[wasm_bindgen]
pub fn simulation_get_ships(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| {
        let ships: Vec<ShipSnapshot> = sim.agents().iter().map(ShipSnapshot::from).collect();
        to_js(&ships)
    })
}

/// Get every projectile in flight.
#[wasm_bindgen]
pub fn simulation_get_projectiles(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| to_js(&projectile_snapshots(sim.agents())))
}

/// Get the live explosion particles.
#[wasm_bindgen]
pub fn simulation_get_particles(sim_id: u32) -> Result<JsValue, JsError> {
    with_simulation(sim_id, |sim| {
        let particles: Vec<ParticleSnapshot> =
            sim.particles().iter().map(ParticleSnapshot::from).collect();
        to_js(&particles)
    })
}

// =============================================================================
// Utility functions
// =============================================================================

/// Where a new object lands along the camera's pick ray.
///
/// # Arguments
/// * `input` - `{ origin, direction, target: "planet" | "ship", distance? }`
///
/// # Returns
/// `[x, y, z]`
#[wasm_bindgen]
pub fn placement_point(input: JsValue) -> Result<JsValue, JsError> {
    let input: PlacementInput = from_js(input)?;
    to_js(&placement(&input))
}

#[cfg(test)]
mod lib_test;
