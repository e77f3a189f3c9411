//! Command line host: configuration and commands.

use crate::error::{AppError, AppResult};
use crate::script::{parse_script, run_script};
use clap::{Parser, Subcommand};
use peniko::Color;
use sketchbook_core::style::parse_color;
use sketchbook_core::{DrawingState, EngineConfig};
use sketchbook_render::{engine_to_png, new_engine, render_state_to_png};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Surface width in pixels.
    #[arg(long, global = true)]
    pub width: Option<u32>,
    /// Surface height in pixels.
    #[arg(long, global = true)]
    pub height: Option<u32>,
    /// Background color (hex, rgb() or name).
    #[arg(long, global = true)]
    pub background: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a saved drawing state and write it as PNG.
    Render {
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run a gesture script and write the result as PNG.
    Play {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Also save the resulting drawing state as JSON.
        #[arg(long)]
        state_out: Option<PathBuf>,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            width: engine.width,
            height: engine.height,
            background_color: engine.background,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by whatever flags were given.
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            width: cli.width.unwrap_or(defaults.width),
            height: cli.height.unwrap_or(defaults.height),
            background_color: cli
                .background
                .as_deref()
                .map_or(defaults.background_color, parse_color),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            width: self.width,
            height: self.height,
            background: self.background_color,
        }
    }
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::from_cli(&cli);
    match &cli.command {
        Command::Render { state, out } => render_state(&config, state, out),
        Command::Play { script, out, state_out } => play_script(&config, script, out, state_out.as_deref()),
    }
}

/// Replay the drawing state stored at `state_path` into a PNG at `out`.
pub fn render_state(config: &AppConfig, state_path: &Path, out: &Path) -> AppResult<()> {
    let state = DrawingState::from_json(&read(state_path)?)?;
    log::info!("Rendering {} paths from {}", state.paths.len(), state_path.display());
    let png = render_state_to_png(&state, &config.engine_config())?;
    write(out, &png.data)?;
    log::info!("Wrote {}x{} image to {}", png.width, png.height, out.display());
    Ok(())
}

/// Run the script at `script_path` and write the resulting surface to `out`.
pub fn play_script(config: &AppConfig, script_path: &Path, out: &Path, state_out: Option<&Path>) -> AppResult<()> {
    let commands = parse_script(&read(script_path)?)?;
    log::info!("Playing {} commands from {}", commands.len(), script_path.display());

    let mut engine = new_engine(&config.engine_config())?;
    run_script(&mut engine, &commands);
    // A script may stop mid-gesture
    engine.force_end_gesture();

    let png = engine_to_png(&engine)?;
    write(out, &png.data)?;
    log::info!("Wrote {}x{} image to {}", png.width, png.height, out.display());

    if let Some(path) = state_out {
        write(path, engine.export_state_json()?.as_bytes())?;
        log::info!("Saved drawing state to {}", path.display());
    }
    Ok(())
}

fn read(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, data: &[u8]) -> AppResult<()> {
    std::fs::write(path, data).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
