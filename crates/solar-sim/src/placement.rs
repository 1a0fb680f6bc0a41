//! Placing new objects along the viewer's pick ray

use nalgebra::{Point3, Vector3};

/// How far down the ray a new planet lands
pub const PLANET_DISTANCE: f64 = 10.0;
/// How far down the ray a new ship lands
pub const SHIP_DISTANCE: f64 = 1000.0;

/// The point `distance` along the ray from `origin` toward `direction`
///
/// A zero direction returns `origin`.
///
/// # Examples
///
/// ```
/// use solar_sim::placement::{point_along_ray, PLANET_DISTANCE};
/// use nalgebra::{Point3, Vector3};
///
/// let camera = Point3::new(0.0, 5.0, 0.0);
/// let p = point_along_ray(camera, Vector3::new(0.0, 0.0, -4.0), PLANET_DISTANCE);
/// assert_eq!(p, Point3::new(0.0, 5.0, -10.0));
/// ```
pub fn point_along_ray(origin: Point3<f64>, direction: Vector3<f64>, distance: f64) -> Point3<f64> {
    match direction.try_normalize(f64::EPSILON) {
        Some(dir) => origin + dir * distance,
        None => origin,
    }
}
