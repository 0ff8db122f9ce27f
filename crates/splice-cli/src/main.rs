//! Splice CLI - Command-line interface for `.splice` drum patterns
//!
//! This binary decodes, inspects, converts and verifies drum machine pattern files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Use modules from the library crate
use splice_cli::commands;

/// Splice - drum machine pattern tool
#[derive(Parser)]
#[command(name = "splice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a pattern as a step grid
    Show {
        /// Path to the .splice file
        file: String,
    },

    /// Report header fields, payload accounting and tracks of a pattern file
    Inspect {
        /// Path to the .splice file
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Convert a pattern file to JSON
    Export {
        /// Path to the .splice file
        file: String,

        /// Output JSON file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Encode a JSON pattern into a .splice file
    Import {
        /// Path to the JSON pattern
        input: String,

        /// Output .splice file path
        #[arg(short, long)]
        output: String,
    },

    /// Check that a pattern survives an encode/decode cycle
    Verify {
        /// Path to the .splice file
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Show { file } => commands::show::run(&file),
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
        Commands::Export {
            file,
            output,
            pretty,
        } => commands::export::run(&file, output.as_deref(), pretty),
        Commands::Import { input, output } => commands::import::run(&input, &output),
        Commands::Verify { file, json } => commands::verify::run(&file, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
