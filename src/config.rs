use clap::Args;

use crate::consts::{DEFAULT_INCLINATION, DEFAULT_ORBITAL_RADIUS};
use crate::error::ObserverResult;
use crate::model::OrbitalObserver;

/// Observer settings shared by the viewer and the trajectory tool.
#[derive(Debug, Clone, Args)]
pub struct ObserverConfig {
    /// Orbital radius, in units of the central mass radius (must be > 1)
    #[arg(short, long, default_value_t = DEFAULT_ORBITAL_RADIUS)]
    pub radius: f64,

    /// Tilt of the orbital plane, in degrees
    #[arg(long, default_value_t = DEFAULT_INCLINATION.to_degrees(), allow_negative_numbers = true)]
    pub inclination: f64,

    /// Scale elapsed time by the dilation factor
    #[arg(long)]
    pub time_dilation: bool,

    /// Start out accelerating instead of at rest
    #[arg(long)]
    pub moving: bool,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        ObserverConfig {
            radius: DEFAULT_ORBITAL_RADIUS,
            inclination: DEFAULT_INCLINATION.to_degrees(),
            time_dilation: false,
            moving: false,
        }
    }
}

impl ObserverConfig {
    pub fn build(&self) -> ObserverResult<OrbitalObserver> {
        let mut observer =
            OrbitalObserver::with_inclination(self.radius, self.inclination.to_radians())?;
        observer.set_time_dilation(self.time_dilation);
        observer.set_moving(self.moving);
        Ok(observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;

    use crate::error::ObserverError;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        observer: ObserverConfig,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["test"]);
        assert_eq!(cli.observer.radius, 10.0);
        approx::assert_relative_eq!(cli.observer.inclination, -5.0, max_relative = 1e-12);
        assert!(!cli.observer.time_dilation);
        assert!(!cli.observer.moving);

        let observer = cli.observer.build().unwrap();
        approx::assert_relative_eq!(observer.inclination(), DEFAULT_INCLINATION);
    }

    #[test]
    fn test_flags() {
        let cli = TestCli::parse_from([
            "test",
            "--radius",
            "3.5",
            "--inclination",
            "-12",
            "--time-dilation",
            "--moving",
        ]);
        let observer = cli.observer.build().unwrap();
        assert_eq!(observer.orbital_radius(), 3.5);
        approx::assert_relative_eq!(observer.inclination(), (-12.0_f64).to_radians());
        assert!(observer.has_time_dilation());
        assert!(observer.is_moving());
    }

    #[test]
    fn test_bad_radius() {
        let config = ObserverConfig {
            radius: 0.75,
            ..ObserverConfig::default()
        };
        assert_eq!(
            config.build().unwrap_err(),
            ObserverError::InvalidRadius(0.75)
        );
    }
}
