#![forbid(unsafe_code)]

//! # Overscroll Simulator CLI
//!
//! ## Usage
//!
//! ```bash
//! overscroll-sim [SCENARIO] [--config FILE] [--fps N] [--json]
//! ```

mod cli;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use overscroll::OverscrollConfig;
use overscroll_sim::output::{Format, write_records};
use overscroll_sim::{Scenario, Simulator};
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<OverscrollConfig> {
    let Some(path) = path else {
        return Ok(OverscrollConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    OverscrollConfig::from_toml_str(&source)
        .with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    if let Some(width) = cli.width {
        scenario.surface.width = width;
    }
    if let Some(height) = cli.height {
        scenario.surface.height = height;
    }

    tracing::info!(
        steps = scenario.steps.len(),
        width = scenario.surface.width,
        height = scenario.surface.height,
        fps = cli.fps,
        "starting simulation"
    );

    let mut sim = Simulator::new(config, scenario.surface, cli.fps)?;
    sim.run(&scenario)?;

    let format = if cli.json {
        Format::JsonLines
    } else {
        Format::Text
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, sim.records(), format)?;
    if format == Format::Text {
        writeln!(
            out,
            "finished after {} frames, {} redraws",
            sim.frames(),
            sim.redraws()
        )?;
    }
    Ok(())
}
