use crate::ammunition::AmmunitionKind;
use nalgebra::{Point3, Vector3};

/// A single fired round
///
/// Velocity is fixed at spawn; projectiles ignore gravity. A projectile is
/// dropped by its owner once it is `spent` (it scored a hit) or has outlived
/// its `lifetime`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub kind: AmmunitionKind,
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
    pub damage: f64,
    /// Seconds since spawn
    pub age: f64,
    pub lifetime: f64,
    pub spent: bool,
}

impl Projectile {
    /// Creates a projectile travelling along `direction` at `speed`
    ///
    /// A zero direction yields a projectile at rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use combat::projectile::Projectile;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let p = Projectile::spawn(Point3::origin(), Vector3::new(0.0, 0.0, 2.0), 100.0, 1.0, 5.0);
    /// assert_eq!(p.velocity, Vector3::new(0.0, 0.0, 100.0));
    /// assert!(!p.spent);
    /// ```
    pub fn spawn(
        origin: Point3<f64>,
        direction: Vector3<f64>,
        speed: f64,
        damage: f64,
        lifetime: f64,
    ) -> Self {
        let heading = direction
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros);
        Projectile {
            kind: AmmunitionKind::Bullet,
            position: origin,
            velocity: heading * speed,
            damage,
            age: 0.0,
            lifetime,
            spent: false,
        }
    }

    /// Creates a projectile with the speed, damage and lifetime of `kind`
    pub fn of_kind(kind: AmmunitionKind, origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        let spec = kind.spec();
        Projectile {
            kind,
            ..Self::spawn(origin, direction, spec.speed, spec.damage, spec.lifetime)
        }
    }

    pub fn update(&mut self, dt: f64) {
        self.position += self.velocity * dt;
        self.age += dt;
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Whether the projectile can still score a hit
    pub fn is_live(&self) -> bool {
        !self.spent && !self.is_expired()
    }
}
