use nalgebra::{Rotation3, Unit, Vector3};

/// The direction an un-rotated observer looks along.
pub fn canonical_forward() -> Vector3<f64> {
    -Vector3::z()
}

pub fn reject(u: &Vector3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    // Computes the vector rejection of u from v. v must be non-zero.
    let u_proj_v = u.dot(v) * v / v.norm_squared();
    u - u_proj_v
}

/// Rotation about the world X axis that tilts the orbital plane.
pub fn inclination_rotation(inclination: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), inclination)
}

/// Applies yaw (about Y) after pitch (about X) to the canonical forward vector.
/// This is the intrinsic Y-X-Z Euler ordering with zero roll, so pitching up by
/// a quarter turn points straight along +Y regardless of yaw.
pub fn look_direction(pitch: f64, yaw: f64) -> Unit<Vector3<f64>> {
    let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), yaw)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), pitch);
    Unit::new_normalize(rotation * canonical_forward())
}

/// Picks an up vector for a camera looking along `direction`: world Y with the
/// part along `direction` removed. Falls back to Z when looking straight up or
/// down.
pub fn camera_up(direction: &Vector3<f64>, tolerance: f64) -> Vector3<f64> {
    let up = reject(&Vector3::y(), direction);
    if up.norm() < tolerance {
        -direction.y.signum() * Vector3::z()
    } else {
        up.normalize()
    }
}
