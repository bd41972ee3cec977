use blackhole_observer::config::ObserverConfig;
use blackhole_observer::gui::{RenderQuality, Simulation};
use kiss3d::light::Light;
use kiss3d::window::Window;

use clap::Parser;

/// Rides along on a circular orbit around a black hole.
///
/// Space toggles acceleration, T toggles time dilation, 1/2/3 pick the render
/// quality, P pauses. Drag with the left mouse button to look around.
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    observer: ObserverConfig,

    /// Ray-march quality tier
    #[arg(short, long, value_enum, default_value_t = RenderQuality::Medium)]
    quality: RenderQuality,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let observer = args.observer.build()?;

    let mut window = Window::new("Black Hole Observer");
    window.set_light(Light::StickToCamera);
    window.set_background_color(0.01, 0.01, 0.03);
    window.set_framerate_limit(Some(60));

    let simulation = Simulation::new(observer, args.quality, &mut window);
    window.render_loop(simulation);
    Ok(())
}
