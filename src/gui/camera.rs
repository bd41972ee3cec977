use std::f32::consts::PI;

use kiss3d::camera::Camera;
use kiss3d::event::{Action, Key, MouseButton, WindowEvent};
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector2, Vector3};

use crate::consts::{DEFAULT_FOVY_DEGREES, DEFAULT_ZFAR, DEFAULT_ZNEAR};
use crate::math::geometry::camera_up;
use crate::model::OrbitalObserver;

const KEY_LOOK_UP: Key = Key::Up;
const KEY_LOOK_DOWN: Key = Key::Down;
const KEY_LOOK_LEFT: Key = Key::Left;
const KEY_LOOK_RIGHT: Key = Key::Right;

const KEY_ANGLE_STEP: f32 = 0.1;

// A camera that rides along with an OrbitalObserver. The observer decides
// where the eye is; this only adds the projection and lets the user drag the
// view around. Dragging changes pitch and yaw, which the simulation hands back
// to the observer, so the observer's facing direction stays the one source of
// truth for both the scene and the shader.
pub struct ObserverCamera {
    // -- pose, copied from the observer --
    eye: Point3<f32>,
    direction: Vector3<f32>,
    up: Vector3<f32>,
    // -- look angles, driven by the user --
    pitch: f32,
    yaw: f32,
    // -- perspective --
    width: u32,
    height: u32,
    fovy: f32,
    znear: f32,
    zfar: f32,
    // -- other --
    last_cursor_pos: Vector2<f32>,
    // -- knobs to fiddle with --
    drag_step: f32,
    pitch_limit: f32,
}

impl ObserverCamera {
    pub fn new(observer: &OrbitalObserver) -> Self {
        let mut camera = ObserverCamera {
            eye: Point3::origin(),
            direction: -Vector3::z(),
            up: Vector3::y(),
            pitch: 0.0,
            yaw: 0.0,
            width: 800,
            height: 600,
            fovy: DEFAULT_FOVY_DEGREES.to_radians(),
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
            last_cursor_pos: Vector2::zeros(),
            drag_step: 0.005,
            pitch_limit: 0.001,
        };
        camera.sync(observer);
        camera
    }

    /// Copies the observer's pose into the camera.
    pub fn sync(&mut self, observer: &OrbitalObserver) {
        let direction = observer.direction().into_inner();
        self.eye = Point3::from(nalgebra::convert::<_, Vector3<f32>>(*observer.position()));
        self.direction = nalgebra::convert(direction);
        self.up = nalgebra::convert(camera_up(&direction, 1e-9));
    }

    /// Look angles as (pitch, yaw), ready for `OrbitalObserver::set_orientation`.
    pub fn orientation(&self) -> (f64, f64) {
        (self.pitch as f64, self.yaw as f64)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        let max_pitch = PI / 2.0 - self.pitch_limit;
        self.yaw = (self.yaw + dyaw) % (2.0 * PI);
        self.pitch = nalgebra::clamp(self.pitch + dpitch, -max_pitch, max_pitch);
    }

    /// Tracks the framebuffer size. A minimized window reports 0x0; the
    /// projection keeps the last usable aspect instead of degenerating.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
    }

    fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(
            self.width as f32 / self.height as f32,
            self.fovy,
            self.znear,
            self.zfar,
        )
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }
}

impl Camera for ObserverCamera {
    fn handle_event(&mut self, canvas: &Canvas, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                let curr_pos = Vector2::new(x as f32, y as f32);

                if canvas.get_mouse_button(MouseButton::Button1) == Action::Press {
                    // Grab-and-drag: the scene follows the cursor
                    let dpos = curr_pos - self.last_cursor_pos;
                    self.rotate(dpos.x * self.drag_step, dpos.y * self.drag_step);
                }

                self.last_cursor_pos = curr_pos;
            }
            WindowEvent::FramebufferSize(w, h) => self.resize(w, h),
            WindowEvent::Key(KEY_LOOK_UP, Action::Press, _) => self.rotate(0.0, KEY_ANGLE_STEP),
            WindowEvent::Key(KEY_LOOK_DOWN, Action::Press, _) => {
                self.rotate(0.0, -KEY_ANGLE_STEP)
            }
            WindowEvent::Key(KEY_LOOK_LEFT, Action::Press, _) => self.rotate(KEY_ANGLE_STEP, 0.0),
            WindowEvent::Key(KEY_LOOK_RIGHT, Action::Press, _) => {
                self.rotate(-KEY_ANGLE_STEP, 0.0)
            }
            _ => {}
        }
    }

    fn eye(&self) -> Point3<f32> {
        self.eye
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye, &(self.eye + self.direction), &self.up)
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        self.transformation()
            .try_inverse()
            .unwrap_or_else(Matrix4::identity)
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }

    fn update(&mut self, _canvas: &Canvas) {}

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection_matrix());
        view.upload(&self.view_matrix());
    }
}
