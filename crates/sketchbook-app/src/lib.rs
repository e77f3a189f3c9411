//! Sketchbook Application
//!
//! Headless host for the drawing engine: renders saved drawings and
//! replays gesture scripts to PNG files.

mod app;
mod error;
pub mod script;

pub use app::{AppConfig, Cli, Command, play_script, render_state, run};
pub use error::{AppError, AppResult};
pub use script::{ScriptCommand, parse_script, run_script};
