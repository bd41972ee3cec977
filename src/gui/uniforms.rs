use nalgebra::{Vector2, Vector3};

use super::quality::RenderQuality;
use crate::model::OrbitalObserver;

/// Everything the ray-marching shader reads about the observer for one frame.
///
/// The shader works in single precision, so the values are narrowed here once
/// rather than at every use.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverUniforms {
    pub cam_pos: Vector3<f32>,
    pub cam_vel: Vector3<f32>,
    pub cam_dir: Vector3<f32>,
    pub time: f32,
    pub resolution: Vector2<f32>,
    pub quality: RenderQuality,
}

impl ObserverUniforms {
    pub fn from_observer(
        observer: &OrbitalObserver,
        width: u32,
        height: u32,
        quality: RenderQuality,
    ) -> Self {
        ObserverUniforms {
            cam_pos: nalgebra::convert(*observer.position()),
            cam_vel: nalgebra::convert(*observer.velocity()),
            cam_dir: nalgebra::convert(observer.direction().into_inner()),
            time: observer.proper_time() as f32,
            resolution: Vector2::new(width as f32, height as f32),
            quality,
        }
    }

    /// Magnitude of the velocity uniform. The orbit model scales the tangent by
    /// the angular velocity alone, so this equals the angular speed.
    pub fn speed(&self) -> f32 {
        self.cam_vel.norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot() {
        let mut observer = OrbitalObserver::new(10.0).unwrap();
        observer.set_moving(true);
        observer.set_orientation(0.0, std::f64::consts::FRAC_PI_2);
        for _ in 0..10 {
            observer.step(0.5).unwrap();
        }

        let uniforms = ObserverUniforms::from_observer(&observer, 800, 600, RenderQuality::High);
        approx::assert_relative_eq!(
            uniforms.cam_pos,
            nalgebra::convert::<_, Vector3<f32>>(*observer.position())
        );
        approx::assert_relative_eq!(uniforms.cam_pos.norm(), 10.0, max_relative = 1e-6);
        approx::assert_abs_diff_eq!(
            uniforms.cam_dir,
            Vector3::new(-1.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        approx::assert_relative_eq!(uniforms.time, 5.0, max_relative = 1e-6);
        assert_eq!(uniforms.resolution, Vector2::new(800.0, 600.0));
        assert_eq!(uniforms.quality, RenderQuality::High);
        approx::assert_relative_eq!(
            uniforms.speed() as f64,
            observer.velocity().norm(),
            max_relative = 1e-6
        );
    }
}
