use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::load_scene;
use lumen_renderer::{render, RayTracer};

/// Render a scene description file to a PNG image.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
struct Args {
    /// Scene description file
    scene: PathBuf,

    /// Output image path, overriding the scene's `output` directive
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::info!("Starting Lumen");

    let scene = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&scene.output));

    let tracer = RayTracer::new(&scene);
    let image = render(&tracer);

    image
        .save(&output)
        .with_context(|| format!("Failed to write image {}", output.display()))?;

    Ok(())
}
