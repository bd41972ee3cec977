use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};
use nalgebra::{Point2, Point3, Vector3};

use self::camera::ObserverCamera;
use self::controller::Controller;
use self::renderers::CompoundRenderer;
use crate::model::OrbitalObserver;

pub mod camera;
pub mod controller;
pub mod quality;
mod renderers;
pub mod uniforms;

pub use self::quality::RenderQuality;
pub use self::uniforms::ObserverUniforms;

// Everything is in units of the central mass radius
const HORIZON_RADIUS: f32 = 1.0;
const PHOTON_SPHERE_RADIUS: f32 = 1.5;
const DISK_INNER_RADIUS: f32 = 3.0;
const DISK_OUTER_RADIUS: f32 = 12.0;
const DISK_RINGS: usize = 10;
const VELOCITY_ARROW_SCALE: f32 = 50.0;

pub struct Simulation {
    observer: OrbitalObserver,
    camera: ObserverCamera,
    controller: Controller,
    renderer: CompoundRenderer,
    uniforms: ObserverUniforms,
}

impl Simulation {
    pub fn new(observer: OrbitalObserver, quality: RenderQuality, window: &mut Window) -> Self {
        let camera = ObserverCamera::new(&observer);

        // Solid black ball so the horizon hides whatever is behind it
        let mut horizon = window.add_sphere(HORIZON_RADIUS);
        horizon.set_color(0.0, 0.0, 0.0);

        let uniforms =
            ObserverUniforms::from_observer(&observer, camera.width(), camera.height(), quality);

        log::info!(
            "Observer at r = {}, max angular velocity {:.5}",
            observer.orbital_radius(),
            observer.max_angular_velocity()
        );
        let controller = Controller::new(quality);
        log::debug!("Shader prelude:\n{}", controller.shader_prelude());

        Simulation {
            observer,
            camera,
            controller,
            renderer: CompoundRenderer::new(),
            uniforms,
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        for event in events.iter() {
            self.controller.process_event(&event.value, &mut self.observer);
        }
    }

    fn update_observer(&mut self) {
        let (pitch, yaw) = self.camera.orientation();
        self.observer.set_orientation(pitch, yaw);

        let delta = self.controller.frame_delta();
        if self.controller.is_paused() {
            return;
        }

        let was_at_rest = self.observer.is_at_rest();
        if let Err(e) = self.observer.step(delta) {
            log::warn!("Skipping frame: {}", e);
            return;
        }
        if !was_at_rest && self.observer.is_at_rest() {
            log::debug!("Observer came to rest at t = {:.3}", self.observer.proper_time());
        }
    }

    fn prerender_scene(&mut self, window: &mut Window) {
        let orbit_color = Point3::new(0.3, 0.3, 0.8);
        let disk_color = Point3::new(1.0, 0.6, 0.2);

        self.renderer
            .draw_horizon(PHOTON_SPHERE_RADIUS, Point3::new(0.4, 0.4, 0.4));
        self.renderer
            .draw_disk(DISK_INNER_RADIUS, DISK_OUTER_RADIUS, DISK_RINGS, disk_color);
        self.renderer.draw_orbit(
            self.observer.orbital_radius() as f32,
            self.observer.inclination() as f32,
            orbit_color,
        );

        // Seen from the observer this is mostly hidden; it shows up when
        // looking back along the orbit.
        let velocity: Vector3<f32> = nalgebra::convert(*self.observer.velocity());
        self.renderer.draw_arrow(
            Point3::from(self.uniforms.cam_pos),
            velocity * VELOCITY_ARROW_SCALE,
            Point3::new(0.2, 1.0, 0.2),
        );

        let default_font = kiss3d::text::Font::default();
        let text_color = Point3::new(1.0, 1.0, 1.0);
        window.draw_text(
            &self.status_text(),
            &Point2::origin(),
            50.0,
            &default_font,
            &text_color,
        );
    }

    fn status_text(&self) -> String {
        let observer = &self.observer;
        format!(
            "r = {:.2}\n\
             w = {:.5} / {:.5}\n\
             |v| = {:.4}\n\
             t = {:.2} s{}\n\
             quality: {}  fps: {:.0}{}",
            observer.orbital_radius(),
            observer.angular_velocity(),
            observer.max_angular_velocity(),
            self.uniforms.speed(),
            observer.proper_time(),
            if observer.has_time_dilation() {
                " (dilated)"
            } else {
                ""
            },
            self.controller.quality(),
            self.controller.fps(),
            if self.controller.is_paused() {
                "  [paused]"
            } else {
                ""
            },
        )
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (
            Some(&mut self.camera),
            None,
            Some(&mut self.renderer),
            None,
        )
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());
        self.update_observer();

        self.camera.sync(&self.observer);
        self.uniforms = ObserverUniforms::from_observer(
            &self.observer,
            self.camera.width(),
            self.camera.height(),
            self.controller.quality(),
        );

        self.prerender_scene(window);
        self.controller.increment_frame_counter();
    }
}
