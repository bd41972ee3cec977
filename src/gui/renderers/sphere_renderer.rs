use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, Renderer};
use nalgebra::{Point3, Vector3};

use super::utils::{draw_path, path_iter_parametric};

struct SphereData {
    pub center: Point3<f32>,
    pub radius: f32,
    pub color: Point3<f32>,
}

/// Draws spheres as their silhouette: the circle where sight lines from the
/// eye graze the surface.
pub struct SphereRenderer {
    line_renderer: LineRenderer,
    spheres: Vec<SphereData>,
}

/// Center and radius of the silhouette of a sphere seen from `eye`, or `None`
/// if the eye is inside the sphere.
fn silhouette(eye: &Point3<f32>, center: &Point3<f32>, radius: f32) -> Option<(Point3<f32>, f32)> {
    let to_eye = eye - center;
    let distance = to_eye.norm();
    if distance <= radius {
        return None;
    }

    // The tangent points form a circle slightly in front of the center
    let offset = radius * radius / distance;
    let circle_radius = radius * (distance * distance - radius * radius).sqrt() / distance;
    Some((center + to_eye.normalize() * offset, circle_radius))
}

impl SphereRenderer {
    pub fn new() -> Self {
        SphereRenderer {
            line_renderer: LineRenderer::new(),
            spheres: vec![],
        }
    }

    pub fn add_sphere(&mut self, center: Point3<f32>, radius: f32, color: Point3<f32>) {
        let sphere = SphereData {
            center,
            radius,
            color,
        };
        self.spheres.push(sphere);
    }

    fn load_sphere_into_renderer(
        line_renderer: &mut LineRenderer,
        camera: &dyn Camera,
        sphere: &SphereData,
    ) {
        let eye = camera.eye();
        let (circle_center, circle_radius) = match silhouette(&eye, &sphere.center, sphere.radius)
        {
            Some(s) => s,
            None => return,
        };

        // Span the plane facing the eye with the camera's screen axes
        let camera_transform = camera.view_transform().inverse();
        let normal = (eye - sphere.center).normalize();
        let mut x_vec = camera_transform.transform_vector(&Vector3::x());
        x_vec = (x_vec - normal * x_vec.dot(&normal)).normalize();
        let y_vec = normal.cross(&x_vec);

        let f = |theta: f32| {
            let v = x_vec * theta.cos() + y_vec * theta.sin();
            circle_center + circle_radius * v
        };
        draw_path(
            line_renderer,
            path_iter_parametric(f, 0.0, std::f32::consts::TAU, 100),
            &sphere.color,
        );
    }
}

impl Renderer for SphereRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        for sphere in self.spheres.iter() {
            SphereRenderer::load_sphere_into_renderer(&mut self.line_renderer, camera, sphere);
        }
        self.line_renderer.render(pass, camera);
        self.spheres.clear();
    }
}
