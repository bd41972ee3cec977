//! Closed-form pieces of the toy orbit model. Lengths are in units of the
//! central mass radius, so the horizon sits at r = 1.

/// Ceiling on the angular speed. The dilated delta needs |w| < 1, and the
/// stable-orbit bound climbs past 1 for r below about 1.297.
pub const SPEED_LIMIT: f64 = 0.999;

/// Stable-orbit angular speed bound at radius `r`. Only meaningful for r > 1.
pub fn max_angular_velocity(r: f64) -> f64 {
    1.0 / (2.0 * (r - 1.0)).sqrt() / r
}

/// Largest angular speed the observer may reach at radius `r`: the stable-orbit
/// bound, capped at `SPEED_LIMIT`.
pub fn speed_cap(r: f64) -> f64 {
    max_angular_velocity(r).min(SPEED_LIMIT)
}

/// Proper time that passes for an observer at radius `r` moving with angular
/// speed `angular_velocity` while `wall_delta` passes on the wall clock.
///
/// This is an empirical blend of the gravitational and kinematic factors, not
/// a derivation from the metric. Requires r > 1 and |angular_velocity| < 1.
pub fn dilated_delta(wall_delta: f64, angular_velocity: f64, r: f64) -> f64 {
    let kinematic = 1.0 - angular_velocity * angular_velocity;
    let gravitational = 1.0 - 1.0 / r;
    (wall_delta * wall_delta * kinematic / gravitational).sqrt()
}
