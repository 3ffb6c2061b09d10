//! Command implementations for the athletics normalizer CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module:
//! - `ingest`: normalization pipeline with bulk file output
//! - `prepare`: wind-column reordering pass over raw sheets
//! - `mapping`: published index mapping emitter

pub mod ingest;
pub mod mapping;
pub mod prepare;
pub mod shared;

// Re-export the main types for easy access
pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner, dispatching to the subcommand handlers
pub async fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Ingest(ingest_args) => ingest::run_ingest(ingest_args).await,
        Commands::Prepare(prepare_args) => prepare::run_prepare(prepare_args).await,
        Commands::Mapping(mapping_args) => mapping::run_mapping(mapping_args).await,
    }
}
