use nalgebra::{Unit, Vector3};

use super::kinematics::{dilated_delta, speed_cap};
use crate::consts::DEFAULT_INCLINATION;
use crate::error::{ObserverError, ObserverResult};
use crate::math::geometry::{canonical_forward, inclination_rotation, look_direction};

/// An observer circling the central mass at a fixed radius.
///
/// This is plain state; the render camera reads it, but doesn't own it.
#[derive(Debug, Clone)]
pub struct OrbitalObserver {
    // Invariants:
    //   - radius > 1
    //   - 0 <= angular_velocity <= max_angular_velocity < 1
    // -- orbit --
    radius: f64,
    max_angular_velocity: f64,
    inclination: f64,
    // -- kinematic state --
    theta: f64,
    angular_velocity: f64,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    direction: Unit<Vector3<f64>>,
    // -- clocks --
    proper_time: f64,
    last_delta: f64,
    // -- intents --
    moving: bool,
    time_dilation: bool,
}

impl OrbitalObserver {
    pub fn new(radius: f64) -> ObserverResult<Self> {
        Self::with_inclination(radius, DEFAULT_INCLINATION)
    }

    pub fn with_inclination(radius: f64, inclination: f64) -> ObserverResult<Self> {
        let mut observer = OrbitalObserver {
            radius: 1.0,
            max_angular_velocity: 0.0,
            inclination,
            theta: 0.0,
            angular_velocity: 0.0,
            position: Vector3::z(),
            velocity: Vector3::zeros(),
            direction: Unit::new_unchecked(canonical_forward()),
            proper_time: 0.0,
            last_delta: 0.0,
            moving: false,
            time_dilation: false,
        };
        observer.set_orbital_radius(radius)?;
        Ok(observer)
    }

    /// Moves the observer onto a new circle. Radii at or inside the horizon are
    /// rejected and leave the observer untouched.
    ///
    /// The speed bound is the stable-orbit bound, capped at
    /// [`SPEED_LIMIT`](super::kinematics::SPEED_LIMIT) so the dilated delta
    /// stays real at every accepted radius.
    pub fn set_orbital_radius(&mut self, radius: f64) -> ObserverResult<()> {
        if !radius.is_finite() || radius <= 1.0 {
            return Err(ObserverError::InvalidRadius(radius));
        }

        self.radius = radius;
        self.max_angular_velocity = speed_cap(radius);
        self.angular_velocity = self.angular_velocity.min(self.max_angular_velocity);
        self.position = self.position.normalize() * radius;

        log::debug!(
            "orbital radius set to {}, max angular velocity {}",
            radius,
            self.max_angular_velocity
        );
        Ok(())
    }

    /// Points the observer using yaw-then-pitch, with no roll. Doesn't touch
    /// the orbit.
    pub fn set_orientation(&mut self, pitch: f64, yaw: f64) {
        self.direction = look_direction(pitch, yaw);
    }

    /// Advances the orbit by `wall_delta` seconds of wall-clock time.
    ///
    /// Rejected input leaves the state exactly as it was.
    pub fn step(&mut self, wall_delta: f64) -> ObserverResult<()> {
        if !wall_delta.is_finite() || wall_delta < 0.0 {
            return Err(ObserverError::InvalidDelta(wall_delta));
        }

        let delta = if self.time_dilation {
            dilated_delta(wall_delta, self.angular_velocity, self.radius)
        } else {
            wall_delta
        };
        if !delta.is_finite() {
            return Err(ObserverError::NonFinite);
        }

        self.theta += self.angular_velocity * delta;
        let (sin, cos) = self.theta.sin_cos();

        let position = Vector3::new(self.radius * sin, 0.0, self.radius * cos);
        let velocity = Vector3::new(cos, 0.0, -sin) * self.angular_velocity;

        let incline = inclination_rotation(self.inclination);
        self.position = incline * position;
        self.velocity = incline * velocity;

        // Speed changes only show up in next step's position
        let speed_change = delta / self.radius;
        if self.moving {
            self.angular_velocity =
                (self.angular_velocity + speed_change).min(self.max_angular_velocity);
        } else {
            self.angular_velocity = (self.angular_velocity - speed_change).max(0.0);
            if self.angular_velocity == 0.0 {
                self.velocity = Vector3::zeros();
            }
        }

        self.proper_time += delta;
        self.last_delta = delta;
        Ok(())
    }

    pub fn orbital_radius(&self) -> f64 {
        self.radius
    }

    pub fn max_angular_velocity(&self) -> f64 {
        self.max_angular_velocity
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn angular_position(&self) -> f64 {
        self.theta
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    pub fn velocity(&self) -> &Vector3<f64> {
        &self.velocity
    }

    pub fn direction(&self) -> &Unit<Vector3<f64>> {
        &self.direction
    }

    /// Total time accumulated by `step`, in the observer's own frame when
    /// dilation is on.
    pub fn proper_time(&self) -> f64 {
        self.proper_time
    }

    /// Effective delta of the most recent step.
    pub fn last_delta(&self) -> f64 {
        self.last_delta
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    pub fn toggle_moving(&mut self) {
        self.moving = !self.moving;
    }

    pub fn has_time_dilation(&self) -> bool {
        self.time_dilation
    }

    pub fn set_time_dilation(&mut self, time_dilation: bool) {
        self.time_dilation = time_dilation;
    }

    pub fn toggle_time_dilation(&mut self) {
        self.time_dilation = !self.time_dilation;
    }

    pub fn is_at_rest(&self) -> bool {
        self.angular_velocity == 0.0
    }
}
