//! create-rooms - Create a room in every enclosed region of every level
//!
//! Usage:
//!   create-rooms run --model <model.json>   - Create missing rooms
//!   create-rooms inspect --model <file>     - Show levels, circuits and tag types
//!   create-rooms init [dir]                 - Write a default roomgen.yaml

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use roomgen_cli::commands::{InitCommand, InspectCommand, RunCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "create-rooms")]
#[command(about = "Create rooms on every level and make sure the room tag family is loaded")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the missing rooms in a model
    Run(RunCommand),
    /// Show what a model contains
    Inspect(InspectCommand),
    /// Write a default configuration file
    Init(InitCommand),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run(cmd) => {
            let outcome = cmd.run()?;
            Ok(if outcome.is_failure() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Inspect(cmd) => cmd.run().map(|_| ExitCode::SUCCESS),
        Commands::Init(cmd) => cmd.run().map(|_| ExitCode::SUCCESS),
    }
}
