//! Ingest command: the main normalization pipeline.
//!
//! Runs a worker pool keyed by file: each worker parses one result sheet
//! into assembled documents, and a single sink consumer assigns the
//! monotonically increasing document ids and writes the bulk output.
//! Rows are embarrassingly parallel; order information survives in each
//! document's `world_rank`, so no cross-row ordering is enforced.

use std::sync::Arc;

use colored::Colorize;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::app::models::NormalizedResult;
use crate::app::services::index_sink::{BulkFileSink, IndexSink};
use crate::app::services::normalizer::assembler::{self, RowContext};
use crate::app::services::normalizer::stats::FileStats;
use crate::app::services::row_reader::{self, SourceFile};
use crate::cli::args::IngestArgs;
use crate::cli::commands::shared::{self, RunStats, create_progress_bar};
use crate::config::Config;
use crate::constants::FIRST_DOCUMENT_ID;
use crate::Result;

/// Output of one file worker
struct FileOutput {
    documents: Vec<NormalizedResult>,
    stats: FileStats,
    /// True when the file itself was unreadable
    file_failed: bool,
}

/// Run the ingest command
pub async fn run_ingest(args: IngestArgs) -> Result<RunStats> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    let config = Config::from_ingest_args(&args)?;
    let stats = ingest_data(&config, args.show_progress()).await?;

    if !args.quiet {
        print_summary(&config, &stats);
    }

    Ok(stats)
}

/// Normalize all discovered result sheets and write the bulk output.
///
/// Exposed separately from [`run_ingest`] so the pipeline can be driven
/// without touching global logging or terminal output.
pub async fn ingest_data(config: &Config, show_progress: bool) -> Result<RunStats> {
    let start_time = std::time::Instant::now();

    let files = row_reader::discover_source_files(&config.input_path)?;
    info!(
        "Discovered {} result sheets under {}",
        files.len(),
        config.input_path.display()
    );

    if config.dry_run {
        for file in &files {
            info!("Would process: {}/{}", file.gender_folder, file.file_name);
        }
        return Ok(RunStats {
            processing_time: start_time.elapsed(),
            ..Default::default()
        });
    }

    config.ensure_output_directory()?;
    let mut sink = BulkFileSink::create(&config.bulk_output_path(), &config.index_name)?;

    let progress_bar = if show_progress && !files.is_empty() {
        Some(create_progress_bar(
            files.len() as u64,
            "Normalizing result sheets...",
        ))
    } else {
        None
    };

    // Worker pool keyed by file: each permit admits one file task
    let semaphore = Arc::new(Semaphore::new(config.workers));
    let (tx, mut rx) = mpsc::channel::<FileOutput>(config.workers.max(1) * 2);

    let mut join_set = JoinSet::new();
    for file in files {
        let semaphore = semaphore.clone();
        let tx = tx.clone();
        join_set.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("semaphore closed while workers are running");
            let output = process_source_file(&file);
            // Receiver gone means the run already failed; nothing to do
            let _ = tx.send(output).await;
        });
    }
    drop(tx);

    // Single consumer: assigns global document ids and writes the bulk file
    let mut stats = RunStats::default();
    let mut next_document_id = FIRST_DOCUMENT_ID;

    while let Some(output) = rx.recv().await {
        if output.file_failed {
            stats.files_failed += 1;
        } else {
            stats.files_processed += 1;
        }

        for document in &output.documents {
            sink.index(next_document_id, document)?;
            next_document_id += 1;
            stats.documents_indexed += 1;
        }

        stats.rows_failed += output.stats.rows_failed;
        stats.file_stats.push(output.stats);

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    while let Some(result) = join_set.join_next().await {
        if let Err(e) = result {
            warn!("File worker task failed: {}", e);
            stats.files_failed += 1;
        }
    }

    sink.finish()?;
    stats.processing_time = start_time.elapsed();

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!(
            "Completed: {} files, {} documents written",
            stats.files_processed, stats.documents_indexed
        ));
    }

    info!(
        "Ingest complete: {} documents from {} files in {:.2}s ({:.1} files/sec)",
        stats.documents_indexed,
        stats.files_processed,
        stats.processing_time.as_secs_f64(),
        stats.files_per_second()
    );

    Ok(stats)
}

/// Parse and assemble one result sheet.
///
/// Row-scoped failures are logged with file name and row ordinal and
/// counted per file; they never abort the file. An unreadable file is
/// reported as a whole-file failure and skipped.
fn process_source_file(file: &SourceFile) -> FileOutput {
    let mut stats = FileStats::new(&file.file_name);

    let rows = match row_reader::read_rows(&file.path) {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Skipping unreadable file {}: {}", file.path.display(), e);
            stats.errors.push(e.to_string());
            return FileOutput {
                documents: Vec::new(),
                stats,
                file_failed: true,
            };
        }
    };

    let mut documents = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let ctx = RowContext {
            file_name: file.file_name.clone(),
            gender_folder: file.gender_folder.clone(),
            row_ordinal: index + 1,
        };

        stats.rows_total += 1;
        let assembled = assembler::assemble(row, &ctx);

        if assembled.is_clean() {
            stats.rows_indexed += 1;
            documents.push(assembled.document);
        } else {
            stats.rows_failed += 1;
            for issue in &assembled.issues {
                warn!(
                    "Row failure in {} row {}: {}",
                    file.file_name, ctx.row_ordinal, issue
                );
                stats
                    .errors
                    .push(format!("row {}: {}", ctx.row_ordinal, issue));
            }
        }
    }

    FileOutput {
        documents,
        stats,
        file_failed: false,
    }
}

/// Print the end-of-run summary
fn print_summary(config: &Config, stats: &RunStats) {
    println!();
    println!("{}", "Ingest Summary".bold());
    println!("{}", "==============".bold());
    println!(
        "  Files:     {} processed, {} failed",
        stats.files_processed.to_string().green(),
        if stats.files_failed > 0 {
            stats.files_failed.to_string().red()
        } else {
            stats.files_failed.to_string().normal()
        }
    );
    println!(
        "  Rows:      {} total, {} indexed, {} failed ({:.1}% success)",
        stats.rows_total(),
        stats.documents_indexed.to_string().green(),
        if stats.rows_failed > 0 {
            stats.rows_failed.to_string().red()
        } else {
            stats.rows_failed.to_string().normal()
        },
        stats.success_rate()
    );
    println!(
        "  Duration:  {:.2}s ({:.1} files/sec)",
        stats.processing_time.as_secs_f64(),
        stats.files_per_second()
    );
    if !config.dry_run {
        println!("  Output:    {}", config.bulk_output_path().display());
    }

    for file_stats in stats.file_stats.iter().filter(|s| !s.is_successful()) {
        println!(
            "  {} {}: {}/{} rows indexed",
            "!".yellow(),
            file_stats.file,
            file_stats.rows_indexed,
            file_stats.rows_total
        );
    }
}
