//! Development tasks for the simulation workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Replay, SelfCheck, ShowMap, Snapshot};
use tracing_subscriber::EnvFilter;

/// Development tasks for the simulation workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Audit generation and spawning for one or more seeds
    SelfCheck(SelfCheck),

    /// Render a generated dungeon as ASCII
    ShowMap(ShowMap),

    /// Dump a session snapshot as JSON
    Snapshot(Snapshot),

    /// Replay a scripted intent sequence and print the state digest
    Replay(Replay),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::SelfCheck(cmd) => cmd.execute(),
        Command::ShowMap(cmd) => cmd.execute(),
        Command::Snapshot(cmd) => cmd.execute(),
        Command::Replay(cmd) => cmd.execute(),
    }
}
