//! Verify command implementation
//!
//! Decodes a pattern file, re-encodes it and decodes the result again, checking
//! that nothing is lost on the way.

use anyhow::Result;
use colored::Colorize;
use splice_drum::{SpliceDecoder, SpliceEncoder, SpliceError, SpliceFormatError};
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, splice_error_to_json, JsonError, VerifyOutput, VerifyResult};

/// Run the verify command
///
/// # Arguments
/// * `path` - Path to the `.splice` file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the pattern round-trips, 1 otherwise
pub fn run(path: &str, json_output: bool) -> Result<ExitCode> {
    let verified = verify_file(path);
    let passed = matches!(&verified, Ok(r) if r.round_trip);

    if json_output {
        let output = match verified {
            Ok(result) => {
                let errors = if result.round_trip {
                    Vec::new()
                } else {
                    vec![JsonError::new(
                        error_codes::ROUND_TRIP,
                        "re-decoded pattern differs from the original",
                    )
                    .with_file(path)]
                };
                VerifyOutput {
                    success: result.round_trip,
                    errors,
                    result: Some(result),
                }
            }
            Err(err) => VerifyOutput {
                success: false,
                errors: vec![err],
                result: None,
            },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Verifying:".cyan().bold(), path);
        match &verified {
            Ok(result) => {
                println!("{} {}", "Pattern hash:".dimmed(), &result.pattern_hash[..16]);
                if !result.byte_identical {
                    println!(
                        "  {} re-encoded bytes differ (reserved bytes or length byte were not canonical)",
                        "!".yellow()
                    );
                }
                if result.round_trip {
                    println!("\n{} Pattern round-trips", "SUCCESS".green().bold());
                } else {
                    println!("\n{} Pattern changed on round-trip", "FAILED".red().bold());
                }
            }
            Err(err) => {
                println!("  {} [{}]: {}", "x".red(), err.code.red(), err.message);
                println!("\n{} File could not be decoded", "FAILED".red().bold());
            }
        }
    }

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Decode, re-encode and re-decode a file.
pub fn verify_file(path: &str) -> Result<VerifyResult, JsonError> {
    let original = fs::read(path).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("failed to read {}: {}", path, e))
            .with_file(path)
    })?;
    let to_json = |e: SpliceFormatError| splice_error_to_json(&SpliceError::from(e), path);

    let header = SpliceDecoder::decode_header(&original).map_err(to_json)?;
    let pattern = SpliceDecoder::decode(&original).map_err(to_json)?;
    let encoded = SpliceEncoder::encode(&pattern).map_err(to_json)?;
    let redecoded = SpliceDecoder::decode(&encoded).map_err(to_json)?;

    let byte_identical =
        header.file_len() == encoded.len() && original.get(..encoded.len()) == Some(&encoded[..]);

    tracing::debug!(path, byte_identical, "verified pattern file");

    Ok(VerifyResult {
        file: path.to_string(),
        round_trip: redecoded.bitwise_eq(&pattern),
        byte_identical,
        pattern_hash: SpliceEncoder::compute_hash(&pattern).map_err(to_json)?,
    })
}
