use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use sketchpad::config::Config;
use sketchpad::input::SketchState;
use sketchpad::output;
use sketchpad::replay::{self, Script};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHPAD_GIT_HASH"), ")"),
    about = "Replay mouse, touch, and stylus input into a raster sketch"
)]
struct Cli {
    /// Stroke script to replay (TOML with [[step]] tables)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Configuration file (defaults to ~/.config/sketchpad/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output PNG path (defaults to the configured filename template)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print each coalesced damage rectangle as x,y,width,height
    #[arg(long, action = ArgAction::SetTrue)]
    print_damage: bool,

    /// Write the image even if nothing was drawn
    #[arg(long, action = ArgAction::SetTrue)]
    allow_empty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let script = Script::load(&cli.script)?;

    let mut state = SketchState::from_config(&config).context("Failed to allocate canvas")?;
    let report = replay::run_script(&mut state, &script).context("Replay failed")?;
    log::info!(
        "Replayed {} steps: {} segments on a {}x{} canvas",
        script.steps.len(),
        report.segments,
        state.width(),
        state.height()
    );

    if cli.print_damage {
        for rect in &report.damage {
            println!("{},{},{},{}", rect.x, rect.y, rect.width, rect.height);
        }
    }

    if !state.has_content() && !cli.allow_empty {
        log::error!("Nothing was drawn; refusing to write an empty sketch.");
        bail!("Canvas is empty; nothing to write (use --allow-empty to override)");
    }

    let path = cli
        .output
        .unwrap_or_else(|| output::default_output_path(&config.output));
    output::save_png(&state.snapshot(), &path)?;
    println!("Saved sketch to {}", path.display());

    Ok(())
}
