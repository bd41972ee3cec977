use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, Renderer};
use nalgebra::{Point3, Rotation3, Vector3};

use self::sphere_renderer::SphereRenderer;
use self::utils::{circle_path, draw_path};

mod sphere_renderer;
mod utils;

const CIRCLE_SEGMENTS: usize = 128;

/// Wireframe stand-in for the ray-marched image: the horizon outline, the
/// accretion disk and the observer's orbit.
pub struct CompoundRenderer {
    sphere_renderer: SphereRenderer,
    line_renderer: LineRenderer,
}

impl CompoundRenderer {
    pub fn new() -> Self {
        CompoundRenderer {
            sphere_renderer: SphereRenderer::new(),
            line_renderer: LineRenderer::new(),
        }
    }

    pub fn draw_horizon(&mut self, radius: f32, color: Point3<f32>) {
        self.sphere_renderer.add_sphere(Point3::origin(), radius, color);
    }

    /// Draws `num_rings` concentric circles in the horizontal plane, fading
    /// from `color` at the inner edge to a quarter of it at the outer edge.
    pub fn draw_disk(&mut self, inner: f32, outer: f32, num_rings: usize, color: Point3<f32>) {
        let plane = Rotation3::identity();
        for i in 0..num_rings {
            let u = i as f32 / (num_rings.max(2) - 1) as f32;
            let radius = inner + u * (outer - inner);
            let ring_color = Point3::from(color.coords * (1.0 - 0.75 * u));
            draw_path(
                &mut self.line_renderer,
                circle_path(radius, &plane, CIRCLE_SEGMENTS),
                &ring_color,
            );
        }
    }

    pub fn draw_orbit(&mut self, radius: f32, inclination: f32, color: Point3<f32>) {
        let plane = Rotation3::from_axis_angle(&Vector3::x_axis(), inclination);
        draw_path(
            &mut self.line_renderer,
            circle_path(radius, &plane, CIRCLE_SEGMENTS),
            &color,
        );
    }

    pub fn draw_arrow(&mut self, start: Point3<f32>, direction: Vector3<f32>, color: Point3<f32>) {
        self.line_renderer
            .draw_line(start, start + direction, color);
    }
}

impl Renderer for CompoundRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.sphere_renderer.render(pass, camera);
        self.line_renderer.render(pass, camera);
    }
}
