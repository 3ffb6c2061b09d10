//! Configuration management and validation.
//!
//! Resolves CLI arguments and defaults into one validated [`Config`]
//! used by the ingest pipeline: input/output paths, index name and the
//! worker pool size.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::args::IngestArgs;
use crate::constants::DEFAULT_INDEX_NAME;
use crate::{Error, Result};

/// Default input directory when none is given
pub const DEFAULT_INPUT_DIR: &str = "data";

/// Default output directory when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Resolved runtime configuration for an ingest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory containing the category folders
    pub input_path: PathBuf,

    /// Directory receiving the bulk output file
    pub output_path: PathBuf,

    /// Search index name written into bulk action lines
    pub index_name: String,

    /// Number of concurrent file workers
    pub workers: usize,

    /// Preview the run without writing output
    pub dry_run: bool,
}

impl Config {
    /// Resolve configuration from ingest arguments and defaults.
    ///
    /// A worker count of 0 resolves to the number of logical CPUs.
    pub fn from_ingest_args(args: &IngestArgs) -> Result<Self> {
        let config = Self {
            input_path: args
                .input_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            output_path: args
                .output_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            index_name: args.index_name.clone(),
            workers: if args.workers == 0 {
                num_cpus::get()
            } else {
                args.workers
            },
            dry_run: args.dry_run,
        };

        config.validate()?;
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    /// Validate the resolved configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.is_dir() {
            return Err(Error::data_dir_not_found(self.input_path.clone()));
        }

        if self.index_name.is_empty() {
            return Err(Error::configuration("Index name cannot be empty"));
        }

        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Path of the bulk output file for this run
    pub fn bulk_output_path(&self) -> PathBuf {
        self.output_path.join(format!("{}.bulk.ndjson", self.index_name))
    }

    /// Create the output directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.output_path.exists() {
            std::fs::create_dir_all(&self.output_path).map_err(|e| {
                Error::io(
                    format!(
                        "failed to create output directory '{}'",
                        self.output_path.display()
                    ),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_DIR),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            workers: num_cpus::get(),
            dry_run: false,
        }
    }
}
