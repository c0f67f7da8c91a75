use anyhow::{Context, Result};
use clap::Parser;
use image::RgbaImage;
use renderer::{
    FrameRenderer, FrameStats, RenderSession, RendererConfig, SceneConfig, create_tutorial_scene,
    diagnostics,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "renderer")]
#[command(about = "Headless DDA voxel renderer", long_about = None)]
struct Cli {
    /// Number of frames to render
    #[arg(short, long, default_value_t = 60)]
    frames: u32,

    /// Scene time advanced per frame, in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Hold the camera at its fixed position
    #[arg(long)]
    freeze: bool,

    /// Renderer configuration (RON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scene description (RON). Defaults to the built-in tutorial scene
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Write the last frame to this PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log the diagnostics summary after the last frame
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RendererConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RendererConfig::default(),
    };

    let grid = match &cli.scene {
        Some(path) => SceneConfig::load_from_file(path)
            .and_then(|scene| scene.build())
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => create_tutorial_scene(),
    };

    info!(
        width = config.width(),
        height = config.height(),
        solid = grid.solid_count(),
        frames = cli.frames,
        "starting render"
    );

    let renderer = FrameRenderer::with_config(grid, config);
    let mut session = RenderSession::new();
    session.set_frozen(cli.freeze);

    let mut image = RgbaImage::new(renderer.config().width(), renderer.config().height());
    let mut stats = FrameStats::default();

    for frame in 0..cli.frames {
        if session.should_quit() {
            break;
        }

        let started = Instant::now();
        let ctx = *session.context();
        // Wall time is only known once the sweep is done
        stats = renderer.render_into(&ctx, 0.0, &mut image);
        let elapsed = started.elapsed().as_secs_f32();
        stats.set_frame_time(elapsed);
        session.tick(cli.dt);

        debug!(
            frame,
            ms = elapsed * 1000.0,
            hits = stats.hits,
            avg_steps = stats.avg_steps_per_ray,
            "frame done"
        );

        if frame + 1 == cli.frames {
            session.request_quit();
        }
    }

    info!(
        rays = stats.rays,
        hits = stats.hits,
        hit_ratio = stats.hit_ratio,
        mrays_per_sec = stats.rays_per_sec / 1_000_000.0,
        "render finished"
    );

    if cli.report {
        let dims = (renderer.config().width(), renderer.config().height());
        for line in diagnostics::overlay_lines(&stats, &session, renderer.grid().size(), dims) {
            info!("{line}");
        }
    }

    if let Some(path) = &cli.output {
        image
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
