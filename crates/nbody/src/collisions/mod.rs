//! Collision detection and resolution for free bodies
//!
//! Overlapping bodies destroy each other. Destruction is a tombstone, never a
//! removal, so body indices held elsewhere in the same frame stay valid.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod detection_test;

pub use detection::{CollisionEvent, detect_collisions};
pub use resolution::{Explosion, handle_collisions, resolve_collisions};
