//! Orientation and firing-direction helpers

use nalgebra::{Unit, UnitQuaternion, Vector3};
use rand::Rng;
use rand_chacha::ChaChaRng;
use std::f64::consts::PI;

/// Rotation that turns the model's forward axis (+Z) toward `direction`
///
/// Returns `None` for a zero direction. When `direction` points straight
/// back along -Z the rotation is a half turn about +Y.
///
/// # Examples
///
/// ```
/// use combat::aim::look_rotation;
/// use nalgebra::Vector3;
///
/// let rotation = look_rotation(&Vector3::new(1.0, 0.0, 0.0)).unwrap();
/// let forward = rotation * Vector3::z();
/// assert!((forward - Vector3::x()).norm() < 1e-12);
/// ```
pub fn look_rotation(direction: &Vector3<f64>) -> Option<UnitQuaternion<f64>> {
    let dir = direction.try_normalize(f64::EPSILON)?;
    Some(
        UnitQuaternion::rotation_between(&Vector3::z(), &dir)
            .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI)),
    )
}

/// Heading jittered by a uniform angle in `[-arc, arc]`
///
/// The jitter rotates about the heading's local up axis, so shots fan out
/// sideways. An arc of zero returns the heading unchanged.
pub fn spread_direction(
    heading: &Unit<Vector3<f64>>,
    arc: f64,
    rng: &mut ChaChaRng,
) -> Unit<Vector3<f64>> {
    if !(arc > 0.0) {
        return *heading;
    }
    let angle = rng.random_range(-arc..=arc);

    let right = heading
        .cross(&Vector3::y())
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::x);
    let up = Unit::new_normalize(right.cross(heading));

    UnitQuaternion::from_axis_angle(&up, angle) * *heading
}
