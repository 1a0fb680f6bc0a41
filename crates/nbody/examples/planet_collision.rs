//! Planets falling together
//!
//! Drops a ring of planets at rest and lets softened gravity pull them
//! inward until they destroy each other in pairs.
//!
//! Run with: cargo run --package nbody --example planet_collision

use nalgebra::{Point3, Vector3};
use nbody::collisions::handle_collisions;
use nbody::forces::{DirectGravity, ForceModel};
use nbody::integrator::{Integrator, SemiImplicitEuler};
use nbody::state::SystemState;
use std::f64::consts::TAU;

fn main() {
    println!("Planet Collision Demo\n");
    println!("{}", "=".repeat(60));

    let mut system = SystemState::new();
    let count = 6;
    for i in 0..count {
        let angle = TAU * i as f64 / count as f64;
        let ring = 12.0 + (i % 2) as f64 * 3.0;
        let position = Point3::new(ring * angle.cos(), 0.0, ring * angle.sin() - 10.0);
        if let Err(err) = system.add_body(5.0, 1.0, position, Vector3::zeros()) {
            eprintln!("could not place planet {i}: {err}");
            return;
        }
        println!(
            "  Planet {}: pos=({:.2}, {:.2}, {:.2})",
            i, position.x, position.y, position.z
        );
    }

    let force = DirectGravity::new();
    let dt = 1.0 / 60.0;
    let initial_energy = system.kinetic_energy() + force.potential_energy(&system);
    println!("\nInitial energy: {:.4}", initial_energy);

    for frame in 0..(60 * 60) {
        SemiImplicitEuler.step(&mut system, dt, &force);

        for explosion in handle_collisions(&mut system) {
            println!(
                "  t={:6.2}s  planets {} and {} collided at ({:.2}, {:.2}, {:.2})",
                system.time,
                explosion.body_a.0,
                explosion.body_b.0,
                explosion.point.x,
                explosion.point.y,
                explosion.point.z
            );
        }

        if system.alive_count() < 2 {
            println!("\nSettled after {} frames", frame + 1);
            break;
        }
    }

    println!("{}", "=".repeat(60));
    println!("Surviving planets: {}", system.alive_count());
    println!("Tombstones kept:   {}", system.body_count() - system.alive_count());
    let p = system.total_momentum();
    println!("Momentum drift:    ({:.2e}, {:.2e}, {:.2e})", p.x, p.y, p.z);
}
