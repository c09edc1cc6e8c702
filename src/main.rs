use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser};
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use sketchloop::config::Config;
use sketchloop::{FrameLoop, IntervalScheduler, StopHandle, demo};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchloop")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHLOOP_GIT_HASH"), ")"),
    about = "Render frame-loop sketches headlessly with cairo"
)]
struct Cli {
    /// Built-in sketch to run
    #[arg(long, short = 'd', value_name = "NAME", default_value = "spinner")]
    demo: String,

    /// List built-in sketches and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_demos: bool,

    /// Stop after this many frames (0 runs until interrupted)
    #[arg(long, short = 'n', value_name = "N")]
    frames: Option<u64>,

    /// Target frames per second
    #[arg(long, value_name = "FPS")]
    fps: Option<f64>,

    /// Surface size, e.g. 800x600
    #[arg(long, short = 's', value_name = "WxH", value_parser = parse_size)]
    size: Option<(i32, i32)>,

    /// Export every rendered frame as PNG into this directory
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Export frames into the directory configured under [export]
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "output")]
    export: bool,

    /// Config file to use instead of ~/.config/sketchloop/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_size(value: &str) -> Result<(i32, i32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width: i32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{width}'"))?;
    let height: i32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{height}'"))?;
    if width <= 0 || height <= 0 {
        return Err(format!("size must be positive, got {width}x{height}"));
    }
    Ok((width, height))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_demos {
        for (name, description) in demo::DEMOS {
            println!("{name:<10} {description}");
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some((width, height)) = cli.size {
        config.canvas.width = width;
        config.canvas.height = height;
    }
    if let Some(fps) = cli.fps {
        config.frames.fps = fps;
    }
    if let Some(frames) = cli.frames {
        config.frames.max_frames = frames;
    }
    config.validate_and_clamp();

    let mut sketch = demo::by_name(&cli.demo, config.canvas.background.clone()).ok_or_else(|| {
        anyhow!(
            "Unknown demo '{}' (try --list-demos)",
            cli.demo
        )
    })?;

    let surface = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        config.canvas.width,
        config.canvas.height,
    )
    .context("Failed to create off-screen surface")?;

    let stop = StopHandle::new();
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, stop.flag())
            .with_context(|| format!("Failed to register handler for signal {signal}"))?;
    }

    let mut frame_loop = FrameLoop::new(IntervalScheduler::new(config.frames.fps))
        .max_frames(config.frames.max_frames)
        .with_stop_handle(stop);
    if let Some(directory) = cli.output {
        frame_loop = frame_loop.with_exporter(config.frame_exporter_in(directory)?);
    } else if cli.export {
        frame_loop = frame_loop.with_exporter(config.frame_exporter()?);
    }

    log::info!(
        "Running '{}' at {}x{}, {} fps",
        cli.demo,
        config.canvas.width,
        config.canvas.height,
        config.frames.fps
    );
    let summary = frame_loop.run(&surface, &mut sketch)?;

    println!(
        "Rendered {} frame(s), exported {}",
        summary.frames, summary.exported
    );
    if let Some(exporter) = frame_loop.exporter() {
        println!("Frames written to {}", exporter.directory().display());
    }

    Ok(())
}
