use approx::{assert_abs_diff_eq, assert_relative_eq};
use blackhole_observer::config::ObserverConfig;
use blackhole_observer::error::ObserverError;
use blackhole_observer::gui::{ObserverUniforms, RenderQuality};
use blackhole_observer::model::OrbitalObserver;
use nalgebra::Vector3;

/// Runs `steps` steps of `dt` and records (theta, omega, proper time) after each.
fn run(observer: &mut OrbitalObserver, dt: f64, steps: usize) -> Vec<(f64, f64, f64)> {
    (0..steps)
        .map(|_| {
            observer.step(dt).unwrap();
            (
                observer.angular_position(),
                observer.angular_velocity(),
                observer.proper_time(),
            )
        })
        .collect()
}

/// r = 10, accelerating from rest, no dilation, 50ms frames. The bound is
/// 1/sqrt(18)/10, which the speed hits on the fifth step.
#[test]
fn test_accelerating_fixture() {
    let expected = [
        (0.0, 0.005),
        (0.00025, 0.01),
        (0.00075, 0.015),
        (0.0015, 0.02),
        (0.0025, 0.023570226039551587),
        (0.0036785113019775794, 0.023570226039551587),
    ];

    let config = ObserverConfig {
        radius: 10.0,
        moving: true,
        ..ObserverConfig::default()
    };
    let mut observer = config.build().unwrap();
    assert_relative_eq!(
        observer.max_angular_velocity(),
        1.0 / 18.0_f64.sqrt() / 10.0,
        max_relative = 1e-15
    );

    let actual = run(&mut observer, 0.05, expected.len());
    for (i, ((theta, omega), (actual_theta, actual_omega, time))) in
        expected.iter().zip(actual).enumerate()
    {
        assert_abs_diff_eq!(*theta, actual_theta, epsilon = 1e-15);
        assert_relative_eq!(*omega, actual_omega, max_relative = 1e-12);
        assert_relative_eq!(time, 0.05 * (i + 1) as f64, max_relative = 1e-12);
    }

    // Position is on the tilted circle at the last theta
    let theta = observer.angular_position();
    let incline = observer.inclination();
    assert_relative_eq!(
        *observer.position(),
        Vector3::new(
            10.0 * theta.sin(),
            -10.0 * theta.cos() * incline.sin(),
            10.0 * theta.cos() * incline.cos(),
        ),
        max_relative = 1e-12
    );
    // A negative inclination lifts the +z half of the orbit above the plane
    assert!(observer.position().y > 0.0);
}

/// r = 3 with dilation on. At rest the gravitational factor alone stretches
/// each 0.5s frame to 0.5 * sqrt(1.5).
#[test]
fn test_dilated_fixture() {
    let expected = [
        (0.0, 1.0 / 6.0, 0.6123724356957945),
        (0.10063456073742666, 1.0 / 6.0, 1.2161798001203543),
        (0.20126912147485332, 1.0 / 6.0, 1.8199871645449144),
        (0.30190368221228, 1.0 / 6.0, 2.4237945289694744),
    ];

    let mut observer = OrbitalObserver::new(3.0).unwrap();
    observer.set_moving(true);
    observer.set_time_dilation(true);

    let actual = run(&mut observer, 0.5, expected.len());
    for (expected, actual) in expected.iter().zip(actual) {
        assert_abs_diff_eq!(expected.0, actual.0, epsilon = 1e-12);
        assert_relative_eq!(expected.1, actual.1, max_relative = 1e-12);
        assert_relative_eq!(expected.2, actual.2, max_relative = 1e-12);
    }
}

#[test]
fn test_full_lap_then_stop() {
    let mut observer = OrbitalObserver::new(4.0).unwrap();
    observer.set_moving(true);
    observer.set_time_dilation(true);

    let mut wall_time = 0.0;
    while observer.angular_position() < 2.0 * std::f64::consts::PI {
        observer.step(1.0 / 60.0).unwrap();
        wall_time += 1.0 / 60.0;
        assert!(observer.angular_velocity() <= observer.max_angular_velocity());
        assert_relative_eq!(observer.position().norm(), 4.0, max_relative = 1e-9);
    }

    // Near the mass, the local clock runs ahead of the wall clock in this model
    assert!(observer.proper_time() > wall_time);

    observer.set_moving(false);
    let mut steps = 0;
    while !observer.is_at_rest() {
        let omega = observer.angular_velocity();
        observer.step(1.0 / 60.0).unwrap();
        assert!(omega - observer.angular_velocity() <= observer.last_delta() / 4.0 + 1e-15);
        steps += 1;
        assert!(steps < 100_000);
    }
    assert_eq!(*observer.velocity(), Vector3::zeros());
}

#[test]
fn test_frame_loop_rejections() {
    let mut observer = OrbitalObserver::new(10.0).unwrap();
    observer.set_moving(true);
    observer.step(0.1).unwrap();

    // A clock reset shows up as a negative delta
    assert_eq!(observer.step(-0.5), Err(ObserverError::InvalidDelta(-0.5)));
    assert_eq!(
        observer.set_orbital_radius(1.0),
        Err(ObserverError::InvalidRadius(1.0))
    );
    assert_eq!(observer.orbital_radius(), 10.0);
    assert_relative_eq!(observer.proper_time(), 0.1);
}

#[test]
fn test_uniforms_track_observer() {
    let mut observer = OrbitalObserver::new(6.0).unwrap();
    observer.set_moving(true);
    observer.set_orientation(std::f64::consts::FRAC_PI_2, 0.0);
    run(&mut observer, 0.25, 40);

    let uniforms = ObserverUniforms::from_observer(&observer, 1280, 720, RenderQuality::Low);
    assert_relative_eq!(uniforms.cam_pos.norm(), 6.0, max_relative = 1e-6);
    assert_abs_diff_eq!(uniforms.cam_dir, Vector3::y(), epsilon = 1e-6);
    assert_relative_eq!(uniforms.time as f64, observer.proper_time(), max_relative = 1e-6);
    assert_relative_eq!(
        uniforms.speed() as f64,
        observer.max_angular_velocity(),
        max_relative = 1e-5
    );
    assert_eq!(uniforms.quality.num_steps(), 300);
}
