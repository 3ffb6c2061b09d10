use athletics_normalizer::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Athletics Normalizer - Result Sheet Converter");
    println!("=============================================");
    println!();
    println!("Normalize heterogeneous athletics result sheets into a structured");
    println!("schema and write OpenSearch bulk files ready for indexing.");
    println!();
    println!("USAGE:");
    println!("    athletics-normalizer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    ingest      Normalize result sheets and write bulk files (main command)");
    println!("    prepare     Move WIND columns to the end of each raw sheet");
    println!("    mapping     Emit the published index mapping as JSON");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Normalize the default ./data directory:");
    println!("    athletics-normalizer ingest");
    println!();
    println!("    # Custom paths and index name:");
    println!("    athletics-normalizer ingest --input /path/to/data --output /path/to/output \\");
    println!("                                --index-name sport-results");
    println!();
    println!("    # Pre-clean raw sheets in place:");
    println!("    athletics-normalizer prepare --input /path/to/data");
    println!();
    println!("For detailed help on any command, use:");
    println!("    athletics-normalizer <COMMAND> --help");
}
