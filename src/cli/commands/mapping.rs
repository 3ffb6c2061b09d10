//! Mapping command: emit the published index mapping.
//!
//! Prints (or writes) the JSON body used to create the search index, so
//! index lifecycle management can stay outside this tool.

use tracing::info;

use crate::app::services::index_sink::index_mapping;
use crate::cli::args::MappingArgs;
use crate::cli::commands::shared::RunStats;
use crate::{Error, Result};

/// Run the mapping command
pub async fn run_mapping(args: MappingArgs) -> Result<RunStats> {
    let mapping = index_mapping();
    let body = serde_json::to_string_pretty(&mapping)
        .map_err(|e| Error::index_sink(format!("failed to render mapping: {}", e)))?;

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, body)
                .map_err(|e| Error::io("failed to write mapping file", e))?;
            info!("Mapping written to {}", path.display());
        }
        None => println!("{}", body),
    }

    Ok(RunStats::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_mapping_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mapping.json");

        let args = MappingArgs {
            output_file: Some(path.clone()),
        };
        run_mapping(args).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(
            parsed["mappings"]["properties"]["world_rank"]["type"],
            "integer"
        );
    }
}
