use combat::{BehaviorKind, TeamId};
use nalgebra::Point3;
use solar_sim::{AgentSpawn, BodySpawn, SimConfig, Simulation};

use super::*;

fn ship_input(kind: BehaviorKind) -> ShipInput {
    ShipInput {
        kind,
        position: [1.0, 2.0, 3.0],
        team: None,
        ammunition: None,
        health: None,
        volley_size: None,
        spread_arc: None,
        fire_rate: None,
    }
}

#[test]
fn test_planet_input_becomes_planet_spawn() {
    let input = PlanetInput {
        position: [0.0, 0.0, -10.0],
        size_multiplier: 2.0,
        velocity: [0.0, 1.0, 0.0],
    };

    let spawn = BodySpawn::from(&input);

    assert_eq!(spawn.mass, BodySpawn::PLANET_MASS);
    assert_eq!(spawn.radius, 2.0);
    assert_eq!(spawn.position, Point3::new(0.0, 0.0, -10.0));
    assert_eq!(spawn.velocity.y, 1.0);
}

#[test]
fn test_ship_input_carries_overrides() {
    let mut input = ship_input(BehaviorKind::Cruiser);
    input.team = Some(3);
    input.volley_size = Some(4);
    input.ammunition = Some(AmmunitionKind::Bullet);

    let spawn = AgentSpawn::from(&input);

    assert_eq!(spawn.kind, BehaviorKind::Cruiser);
    assert_eq!(spawn.position, Point3::new(1.0, 2.0, 3.0));
    assert_eq!(spawn.team, Some(TeamId(3)));
    assert_eq!(spawn.volley_size, Some(4));
    assert_eq!(spawn.ammunition, Some(AmmunitionKind::Bullet));
    assert_eq!(spawn.health, None);
}

#[test]
fn test_ship_snapshot_reports_model_and_state() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    let id = sim.spawn_agent(AgentSpawn::from(&ship_input(BehaviorKind::Carrier))).unwrap();

    let snapshot = ShipSnapshot::from(sim.agent(id).unwrap());

    assert_eq!(snapshot.model, "carrier");
    assert_eq!(snapshot.scale, 20.0);
    assert_eq!(snapshot.state, ShipState::Loading);
    assert_eq!(snapshot.orientation, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(snapshot.health, 1000.0);
    assert_eq!(snapshot.target, None);
}

#[test]
fn test_frame_snapshot_tags_collision_explosions() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    sim.spawn_body(BodySpawn::planet(Point3::origin(), 1.0)).unwrap();
    sim.spawn_body(BodySpawn::planet(Point3::new(1.5, 0.0, 0.0), 1.0)).unwrap();

    let report = sim.advance(1.0 / 60.0).unwrap();
    let snapshot = FrameSnapshot::from(&report);

    assert_eq!(snapshot.events.len(), 3);
    assert_eq!(snapshot.events[0], EventSnapshot::BodyDestroyed { body: 0 });
    assert_eq!(snapshot.events[1], EventSnapshot::BodyDestroyed { body: 1 });
    assert!(matches!(
        snapshot.events[2],
        EventSnapshot::Explosion { cause: "collision", .. }
    ));
}

#[test]
fn test_projectiles_are_listed_per_owner() {
    let mut config = SimConfig::default();
    config.combat.instant_load = true;
    let mut sim = Simulation::new(config).unwrap();
    sim.spawn_agent(AgentSpawn::new(BehaviorKind::Cruiser, Point3::origin())).unwrap();
    sim.spawn_agent(AgentSpawn::new(BehaviorKind::Fighter, Point3::new(0.0, 0.0, 500.0)))
        .unwrap();

    sim.advance(0.01).unwrap();
    let projectiles = projectile_snapshots(sim.agents());

    assert_eq!(projectiles.iter().filter(|p| p.owner == 0).count(), 2);
    assert_eq!(projectiles.iter().filter(|p| p.owner == 1).count(), 1);
    assert!(projectiles.iter().filter(|p| p.owner == 0).all(|p| p.model == "missile"));
}

#[test]
fn test_placement_distances_by_target() {
    let planet = PlacementInput {
        origin: [0.0, 0.0, 0.0],
        direction: [0.0, 0.0, -2.0],
        target: PlacementTarget::Planet,
        distance: None,
    };
    assert_eq!(placement(&planet), [0.0, 0.0, -10.0]);

    let ship = PlacementInput {
        target: PlacementTarget::Ship,
        ..planet.clone()
    };
    assert_eq!(placement(&ship), [0.0, 0.0, -1000.0]);

    let custom = PlacementInput {
        distance: Some(3.0),
        ..planet
    };
    assert_eq!(placement(&custom), [0.0, 0.0, -3.0]);
}
