//! Command-line interface for `overscroll-sim`.
//!
//! # Examples
//!
//! ```bash
//! # Play the built-in scenario
//! overscroll-sim
//!
//! # Play a scenario file at 120 FPS as JSON lines
//! overscroll-sim scenarios/bounce.toml --fps 120 --json
//!
//! # Try a softer spring
//! overscroll-sim --config soft.toml -v
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Play overscroll gesture scenarios frame by frame.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "overscroll-sim",
    author,
    version,
    about = "Play overscroll gesture scenarios frame by frame",
    long_about = "Drives a spring overscroll scroll view on a virtual surface and prints \
                  the vertical shift after every input sample and frame."
)]
pub struct Cli {
    /// Scenario TOML file
    ///
    /// Defaults to a drag on the top edge followed by a fling into the bottom edge
    pub scenario: Option<PathBuf>,

    /// Overscroll tuning TOML file
    #[arg(long, short = 'c', env = "OVERSCROLL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Frames per second of the simulated ticker
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Emit JSON lines instead of a table
    #[arg(long)]
    pub json: bool,

    /// Override the scenario surface width
    #[arg(long)]
    pub width: Option<i32>,

    /// Override the scenario surface height
    #[arg(long)]
    pub height: Option<i32>,

    /// Print the effective tuning as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
