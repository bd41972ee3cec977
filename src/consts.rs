use std::f64::consts::PI;

/// Tilt of the orbital plane about the world X axis.
pub const DEFAULT_INCLINATION: f64 = -5.0 * PI / 180.0;

/// Orbital radius used when nothing else is configured, in units of the
/// central mass radius.
pub const DEFAULT_ORBITAL_RADIUS: f64 = 10.0;

// Base projection parameters of the render camera
pub const DEFAULT_FOVY_DEGREES: f32 = 60.0;
pub const DEFAULT_ZNEAR: f32 = 1.0;
pub const DEFAULT_ZFAR: f32 = 80000.0;
