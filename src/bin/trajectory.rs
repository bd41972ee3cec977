use blackhole_observer::config::ObserverConfig;
use blackhole_observer::model::OrbitalObserver;
use plotters::prelude::*;

use clap::Parser;

/// Integrates the observer without a window and prints every step.
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    observer: ObserverConfig,

    /// Wall-clock seconds per step
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Number of steps to run
    #[arg(short = 'n', long, default_value_t = 600)]
    steps: usize,

    /// Only print every k-th step
    #[arg(long, default_value_t = 1)]
    every: usize,

    /// Also plot angular velocity and proper time into this PNG
    #[arg(long)]
    plot: Option<String>,
}

struct Sample {
    wall_time: f64,
    angular_velocity: f64,
    proper_time: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut observer = args.observer.build()?;
    log::info!(
        "r = {}, max angular velocity = {}, dilation = {}",
        observer.orbital_radius(),
        observer.max_angular_velocity(),
        observer.has_time_dilation()
    );

    println!("step\ttheta\tomega\tproper_time\tx\ty\tz");
    let mut samples = Vec::with_capacity(args.steps + 1);
    samples.push(sample(&observer, 0.0));
    for i in 1..=args.steps {
        observer.step(args.dt)?;
        samples.push(sample(&observer, i as f64 * args.dt));

        if i % args.every.max(1) == 0 {
            let p = observer.position();
            println!(
                "{}\t{:.9}\t{:.9}\t{:.9}\t{:.6}\t{:.6}\t{:.6}",
                i,
                observer.angular_position(),
                observer.angular_velocity(),
                observer.proper_time(),
                p.x,
                p.y,
                p.z
            );
        }
    }

    if let Some(path) = args.plot {
        draw_plot(&path, &samples, observer.max_angular_velocity())?;
        log::info!("Wrote {}", path);
    }
    Ok(())
}

fn sample(observer: &OrbitalObserver, wall_time: f64) -> Sample {
    Sample {
        wall_time,
        angular_velocity: observer.angular_velocity(),
        proper_time: observer.proper_time(),
    }
}

fn draw_plot(
    name: &str,
    samples: &[Sample],
    max_angular_velocity: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(name, (960, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(320);

    let end_time = samples.last().map_or(1.0, |s| s.wall_time).max(1e-9);

    let mut chart = ChartBuilder::on(&upper)
        .caption("angular velocity", ("sans-serif", 20))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..end_time, 0.0..max_angular_velocity * 1.1)?;
    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(
        samples.iter().map(|s| (s.wall_time, s.angular_velocity)),
        &RED,
    ))?;
    chart.draw_series(LineSeries::new(
        vec![(0.0, max_angular_velocity), (end_time, max_angular_velocity)],
        &BLACK,
    ))?;

    let max_proper_time = samples
        .iter()
        .map(|s| s.proper_time)
        .fold(end_time, f64::max);
    let mut chart = ChartBuilder::on(&lower)
        .caption("proper time vs wall time", ("sans-serif", 20))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..end_time, 0.0..max_proper_time)?;
    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(
        samples.iter().map(|s| (s.wall_time, s.proper_time)),
        &BLUE,
    ))?;
    chart.draw_series(LineSeries::new(
        vec![(0.0, 0.0), (end_time, end_time)],
        &BLACK,
    ))?;

    root.present()?;
    Ok(())
}
