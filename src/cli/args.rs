//! Command-line argument definitions for the athletics normalizer
//!
//! This module defines the complete CLI interface using the clap derive
//! API: the main `ingest` pipeline, the `prepare` pre-cleaning pass, and
//! the `mapping` emitter for the published index mapping.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants::DEFAULT_INDEX_NAME;
use crate::{Error, Result};

/// CLI arguments for the athletics result normalizer
///
/// Normalizes heterogeneous athletics result sheets (one CSV row per
/// competitor per event) into a structured schema suitable for search
/// indexing.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "athletics-normalizer",
    version,
    about = "Normalize athletics result sheets into search-index-ready documents",
    long_about = "Reads result sheets from the men/ and women/ folders of a data directory, \
                  normalizes marks, positions, venues and partial dates into one structured \
                  schema, and writes OpenSearch bulk files ready for indexing."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the normalizer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Normalize result sheets and write bulk index files (main command)
    Ingest(IngestArgs),
    /// Move WIND columns to the end of each raw result sheet
    Prepare(PrepareArgs),
    /// Emit the published index mapping as JSON
    Mapping(MappingArgs),
}

/// Arguments for the ingest command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct IngestArgs {
    /// Input path to the data directory
    ///
    /// Should contain the category folders men/ and women/ with one CSV
    /// result sheet per discipline. Defaults to ./data
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the data directory"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path for generated bulk files
    ///
    /// Will be created if it doesn't exist. Defaults to ./output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for generated bulk files"
    )]
    pub output_path: Option<PathBuf>,

    /// Search index name written into bulk action lines
    #[arg(
        long = "index-name",
        value_name = "NAME",
        default_value = DEFAULT_INDEX_NAME,
        help = "Search index name for the bulk output"
    )]
    pub index_name: String,

    /// Number of parallel file workers
    ///
    /// Controls how many result sheets are processed concurrently.
    /// 0 means one worker per logical CPU.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = 0,
        help = "Number of parallel workers (0 = logical CPUs)"
    )]
    pub workers: usize,

    /// Perform a dry run without actual processing
    ///
    /// Shows which result sheets would be processed without writing any
    /// output files.
    #[arg(
        long = "dry-run",
        help = "Show what would be processed without writing output"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the prepare command (raw sheet pre-cleaning)
#[derive(Debug, Clone, Parser)]
pub struct PrepareArgs {
    /// Input path to the data directory with raw result sheets
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the data directory"
    )]
    pub input_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the mapping command
#[derive(Debug, Clone, Parser)]
pub struct MappingArgs {
    /// Output file for the mapping JSON
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the mapping JSON"
    )]
    pub output_file: Option<PathBuf>,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl IngestArgs {
    /// Validate the ingest command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is not a directory: {}",
                    input_path.display()
                )));
            }
        }

        if self.workers > 100 {
            return Err(Error::configuration(
                "Number of workers cannot exceed 100",
            ));
        }

        if self.index_name.is_empty() {
            return Err(Error::configuration("Index name cannot be empty"));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl PrepareArgs {
    /// Validate the prepare command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is not a directory: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for IngestArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            index_name: DEFAULT_INDEX_NAME.to_string(),
            workers: 0,
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }
}
