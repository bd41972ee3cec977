use std::time::Instant;

use kiss3d::event::{Action, Key, WindowEvent};

use super::quality::RenderQuality;
use crate::model::OrbitalObserver;

// Key config, all in one place
const KEY_TOGGLE_MOVING: Key = Key::Space;
const KEY_TOGGLE_DILATION: Key = Key::T;
const KEY_TOGGLE_PAUSE: Key = Key::P;
const KEY_QUALITY_LOW: Key = Key::Key1;
const KEY_QUALITY_MEDIUM: Key = Key::Key2;
const KEY_QUALITY_HIGH: Key = Key::Key3;

/// Turns key presses into observer intents and viewer settings.
pub struct Controller {
    paused: bool,
    quality: RenderQuality,
    // `#define` block for the current quality; rebuilt whenever it changes
    shader_prelude: String,
    // Frame deltas above this are treated as a hitch (window drag, breakpoint)
    // and clamped, so the observer doesn't jump around the orbit.
    max_frame_delta: f64,
    last_frame: Option<Instant>,
    fps_counter: FpsCounter,
}

pub struct FpsCounter {
    instant: Instant,
    counter: usize,
    window_size_millis: usize,
    previous_fps: f64,
}

impl FpsCounter {
    pub fn new(window_size_millis: usize) -> Self {
        FpsCounter {
            instant: Instant::now(),
            counter: 0,
            previous_fps: 0.0,
            window_size_millis,
        }
    }

    pub fn reset(&mut self) {
        self.instant = Instant::now();
        self.counter = 0;
    }

    pub fn value(&self) -> f64 {
        self.previous_fps
    }

    pub fn increment(&mut self) {
        self.counter += 1;

        let elapsed = self.instant.elapsed();
        if elapsed.as_millis() > self.window_size_millis as u128 {
            self.previous_fps = (1000 * self.counter) as f64 / elapsed.as_millis() as f64;
            self.reset();
        }
    }
}

impl Controller {
    pub fn new(quality: RenderQuality) -> Self {
        Controller {
            paused: false,
            quality,
            shader_prelude: quality.shader_defines(),
            max_frame_delta: 0.25,
            last_frame: None,
            fps_counter: FpsCounter::new(1000),
        }
    }

    pub fn process_event(&mut self, event: &WindowEvent, observer: &mut OrbitalObserver) {
        match *event {
            WindowEvent::Key(KEY_TOGGLE_MOVING, Action::Press, _) => {
                observer.toggle_moving();
                log::info!("Moving: {}", observer.is_moving());
            }
            WindowEvent::Key(KEY_TOGGLE_DILATION, Action::Press, _) => {
                observer.toggle_time_dilation();
                log::info!("Time dilation: {}", observer.has_time_dilation());
            }
            WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Press, _) => {
                self.paused = !self.paused;
                // Don't count the pause as elapsed time
                self.last_frame = None;
            }
            WindowEvent::Key(KEY_QUALITY_LOW, Action::Press, _) => {
                self.set_quality(RenderQuality::Low)
            }
            WindowEvent::Key(KEY_QUALITY_MEDIUM, Action::Press, _) => {
                self.set_quality(RenderQuality::Medium)
            }
            WindowEvent::Key(KEY_QUALITY_HIGH, Action::Press, _) => {
                self.set_quality(RenderQuality::High)
            }
            _ => {}
        }
    }

    fn set_quality(&mut self, quality: RenderQuality) {
        if quality != self.quality {
            log::info!("Render quality: {}", quality);
            self.quality = quality;
            self.shader_prelude = quality.shader_defines();
            log::debug!("Shader prelude:\n{}", self.shader_prelude);
        }
    }

    /// Shader `#define` block matching the current render quality.
    pub fn shader_prelude(&self) -> &str {
        &self.shader_prelude
    }

    /// Wall-clock seconds since the previous frame, or zero on the first one.
    pub fn frame_delta(&mut self) -> f64 {
        let now = Instant::now();
        let delta = match self.last_frame {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f64(),
            None => 0.0,
        };
        self.last_frame = Some(now);
        self.clamp_delta(delta)
    }

    fn clamp_delta(&self, delta: f64) -> f64 {
        nalgebra::clamp(delta, 0.0, self.max_frame_delta)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn quality(&self) -> RenderQuality {
        self.quality
    }

    pub fn fps(&self) -> f64 {
        self.fps_counter.value()
    }

    pub fn increment_frame_counter(&mut self) {
        self.fps_counter.increment()
    }
}
