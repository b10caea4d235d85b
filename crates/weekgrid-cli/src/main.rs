//! Weekgrid CLI Application
//!
//! Command-line interface for the weekgrid weekly time-block planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, ListArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use weekgrid_core::PlannerBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        slot_height,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_slot_height(slot_height)
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Weekgrid started");

    let cli = Cli::new(planner, renderer);
    match command {
        Some(command) => cli.handle_command(command),
        None => cli.list(&ListArgs { day: None }),
    }
}
