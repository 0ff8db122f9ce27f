//! Import command implementation
//!
//! Reads a JSON pattern and encodes it to a `.splice` file.

use anyhow::{Context, Result};
use colored::Colorize;
use splice_drum::{encode_to_file, Pattern, SpliceEncoder};
use std::fs;
use std::process::ExitCode;

/// Run the import command
///
/// # Arguments
/// * `input` - Path to a JSON pattern (as produced by `export`)
/// * `output` - Path of the `.splice` file to write
///
/// # Returns
/// Exit code: 0 on success
pub fn run(input: &str, output: &str) -> Result<ExitCode> {
    let json =
        fs::read_to_string(input).with_context(|| format!("Failed to read JSON file: {}", input))?;
    let pattern: Pattern = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse pattern JSON: {}", input))?;
    tracing::debug!(input, tracks = pattern.tracks.len(), "parsed pattern JSON");

    encode_to_file(output, &pattern)
        .with_context(|| format!("Failed to encode pattern to: {}", output))?;

    println!(
        "{} {} -> {} ({} bytes payload)",
        "Imported:".green().bold(),
        input,
        output,
        SpliceEncoder::payload_len(&pattern)
    );
    Ok(ExitCode::SUCCESS)
}
