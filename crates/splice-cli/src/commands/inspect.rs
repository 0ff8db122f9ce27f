//! Inspect command implementation
//!
//! Reports the header fields, payload accounting and per-track summary of a
//! pattern file.

use anyhow::Result;
use colored::Colorize;
use splice_drum::render::{format_tempo, step_grid};
use splice_drum::splice::SPLICE_HEADER_LEN;
use splice_drum::{SpliceDecoder, SpliceEncoder, SpliceError, SpliceFormatError};
use std::fs;
use std::process::ExitCode;

use super::json_output::{
    error_codes, splice_error_to_json, InspectOutput, InspectResult, JsonError, TrackSummary,
};

/// Run the inspect command
///
/// # Arguments
/// * `path` - Path to the `.splice` file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the file decodes, 1 otherwise
pub fn run(path: &str, json_output: bool) -> Result<ExitCode> {
    let inspected = inspect_file(path);

    if json_output {
        let (output, code) = match inspected {
            Ok(result) => (InspectOutput::success(result), ExitCode::SUCCESS),
            Err(err) => (InspectOutput::failure(vec![err]), ExitCode::from(1)),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(code);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), path);
    match inspected {
        Ok(result) => {
            print_human(&result);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("  {} [{}]: {}", "x".red(), err.code.red(), err.message);
            println!("\n{} File could not be decoded", "FAILED".red().bold());
            Ok(ExitCode::from(1))
        }
    }
}

/// Read and decode a file into an inspection report.
pub fn inspect_file(path: &str) -> Result<InspectResult, JsonError> {
    let data = fs::read(path).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("failed to read {}: {}", path, e))
            .with_file(path)
    })?;
    let to_json = |e: SpliceFormatError| splice_error_to_json(&SpliceError::from(e), path);

    let header = SpliceDecoder::decode_header(&data).map_err(to_json)?;
    let pattern = SpliceDecoder::decode(&data).map_err(to_json)?;
    tracing::debug!(path, bytes = data.len(), "inspected pattern file");

    let tracks = pattern
        .tracks
        .iter()
        .map(|t| TrackSummary {
            id: t.id,
            name: t.name_lossy().into_owned(),
            hits: t.hit_count(),
            unknown_steps: t.steps.iter().filter(|&&s| s > 1).count(),
            grid: step_grid(t),
        })
        .collect();

    Ok(InspectResult {
        file: path.to_string(),
        file_size: data.len(),
        file_hash: blake3::hash(&data).to_hex().to_string(),
        version: pattern.version_lossy().into_owned(),
        tempo: pattern.tempo,
        declared_payload_len: header.payload_len as usize,
        computed_payload_len: SpliceEncoder::payload_len(&pattern),
        trailing_bytes: data.len() - header.file_len(),
        tracks,
    })
}

/// Version and tempo lines, formatted the way `show` prints them.
fn header_lines(result: &InspectResult) -> [String; 2] {
    [
        format!("{} {}", "Version:".dimmed(), result.version),
        format!("{} {}", "Tempo:".dimmed(), format_tempo(result.tempo)),
    ]
}

fn print_human(result: &InspectResult) {
    for line in header_lines(result) {
        println!("{}", line);
    }
    println!(
        "{} {} bytes ({})",
        "Size:".dimmed(),
        result.file_size,
        &result.file_hash[..16]
    );
    println!(
        "{} {} declared, {} computed",
        "Payload:".dimmed(),
        result.declared_payload_len,
        result.computed_payload_len
    );
    if result.trailing_bytes > 0 {
        println!(
            "  {} {} bytes after payload boundary (ignored)",
            "!".yellow(),
            result.trailing_bytes
        );
    }

    println!("\n{} ({})", "Tracks:".cyan().bold(), result.tracks.len());
    for track in &result.tracks {
        println!(
            "  ({}) {:<12} {} {} hits",
            track.id, track.name, track.grid, track.hits
        );
        if track.unknown_steps > 0 {
            println!(
                "    {} {} step bytes other than 0/1",
                "!".yellow(),
                track.unknown_steps
            );
        }
    }

    println!(
        "\n{} {} bytes of header + {} bytes of payload",
        "OK".green().bold(),
        SPLICE_HEADER_LEN,
        result.declared_payload_len
    );
}
