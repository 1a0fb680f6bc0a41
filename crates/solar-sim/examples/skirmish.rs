//! Headless skirmish: a carrier group against a cruiser line, with a pair of
//! planets drifting into each other in the background.
//!
//! Run with `RUST_LOG=solar_sim=debug,combat=debug` to watch the battle.

use combat::{BehaviorKind, TeamId};
use nalgebra::{Point3, Vector3};
use solar_sim::{AgentSpawn, BodySpawn, SimConfig, SimError, SimEvent, Simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SimConfig::from_json(r#"{ "combat": { "instantLoad": true }, "seed": 2024 }"#)?;
    let mut sim = Simulation::new(config)?;

    let drifting = BodySpawn::planet(Point3::new(-12.0, 0.0, -10.0), 1.0);
    sim.spawn_body(drifting.with_velocity(Vector3::new(0.0, 0.0, 0.2)))?;
    sim.spawn_body(BodySpawn::planet(Point3::new(12.0, 0.0, -10.0), 1.5))?;

    let blue = TeamId(0);
    let red = TeamId(1);
    let carrier = AgentSpawn::new(BehaviorKind::Carrier, Point3::new(0.0, 0.0, -200.0));
    let escort = AgentSpawn::new(BehaviorKind::Fighter, Point3::new(-20.0, 0.0, -180.0));
    sim.spawn_agent(carrier.with_team(blue))?;
    sim.spawn_agent(escort.with_team(blue))?;
    for x in [-40.0, 0.0, 40.0] {
        let cruiser = AgentSpawn::new(BehaviorKind::Cruiser, Point3::new(x, 0.0, 150.0));
        sim.spawn_agent(cruiser.with_team(red))?;
    }

    let dt = 1.0 / 60.0;
    for frame in 0..(60 * 60) {
        let report = sim.advance(dt)?;
        for event in &report.events {
            match event {
                SimEvent::AgentDestroyed { agent, by } => {
                    let by = by.map(|a| a.0);
                    info!(time = report.time, agent = agent.0, ?by, "ship destroyed");
                }
                SimEvent::BodyDestroyed { body } => {
                    info!(time = report.time, body = body.0, "planet destroyed");
                }
                SimEvent::AgentSpawned { agent, .. } => {
                    info!(time = report.time, agent = agent.0, "drone launched");
                }
                _ => {}
            }
        }

        let teams_alive = [blue, red]
            .map(|team| sim.agents().iter().any(|a| a.team == team && a.is_alive()));
        if teams_alive.iter().filter(|alive| **alive).count() < 2 {
            info!(frame, winner = if teams_alive[0] { "blue" } else { "red" }, "battle over");
            break;
        }
    }

    info!(
        time = sim.time(),
        ships_alive = sim.agents().iter().filter(|a| a.is_alive()).count(),
        planets_alive = sim.bodies().iter().filter(|b| b.alive).count(),
        "done"
    );
    Ok(())
}
