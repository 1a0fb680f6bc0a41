use combat::{AgentId, BehaviorKind};
use nalgebra::Point3;
use nbody::BodyId;

/// What set off an explosion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplosionCause {
    Collision { body_a: BodyId, body_b: BodyId },
    Kill { agent: AgentId },
}

/// Something the renderer should react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    Explosion {
        point: Point3<f64>,
        cause: ExplosionCause,
    },
    HealthChanged {
        agent: AgentId,
        current: f64,
        max: f64,
    },
    AgentDestroyed {
        agent: AgentId,
        /// Agent whose projectile landed the final hit
        by: Option<AgentId>,
    },
    /// A carrier launched a drone
    AgentSpawned {
        agent: AgentId,
        kind: BehaviorKind,
        owner: Option<AgentId>,
        position: Point3<f64>,
    },
    BodyDestroyed {
        body: BodyId,
    },
}

/// Everything that happened during one call to
/// [`Simulation::advance`](crate::Simulation::advance), in the order it happened
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Simulation time at the end of the frame
    pub time: f64,
    pub events: Vec<SimEvent>,
}

impl FrameReport {
    pub fn explosions(&self) -> impl Iterator<Item = (Point3<f64>, ExplosionCause)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SimEvent::Explosion { point, cause } => Some((point, cause)),
            _ => None,
        })
    }

    pub fn destroyed_agents(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SimEvent::AgentDestroyed { agent, .. } => Some(agent),
            _ => None,
        })
    }

    pub fn destroyed_bodies(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SimEvent::BodyDestroyed { body } => Some(body),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
