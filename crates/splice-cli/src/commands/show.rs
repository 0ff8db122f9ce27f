//! Show command implementation
//!
//! Decodes a pattern file and prints its step-grid rendering.

use anyhow::{Context, Result};
use splice_drum::{decode_file, Pattern};
use std::process::ExitCode;

/// Run the show command
///
/// # Arguments
/// * `path` - Path to the `.splice` file
///
/// # Returns
/// Exit code: 0 on success
pub fn run(path: &str) -> Result<ExitCode> {
    let pattern = load(path)?;
    print!("{}", pattern);
    Ok(ExitCode::SUCCESS)
}

/// Decode a pattern file, attaching the path to any error.
pub(crate) fn load(path: &str) -> Result<Pattern> {
    let pattern =
        decode_file(path).with_context(|| format!("Failed to decode pattern file: {}", path))?;
    tracing::debug!(
        path,
        version = %pattern.version_lossy(),
        tracks = pattern.tracks.len(),
        "decoded pattern"
    );
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use splice_drum::{encode_to_file, Track};

    #[test]
    fn show_decodes_valid_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("p.splice");
        let pattern = Pattern::new("0.808-alpha", 120.0).with_track(Track::new(0, "kick", [1; 16]));
        encode_to_file(&path, &pattern).unwrap();

        let code = run(path.to_str().unwrap()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn show_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.splice");

        let err = run(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to decode pattern file"));
    }

    #[test]
    fn show_reports_bad_header() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.splice");
        std::fs::write(&path, b"RIFF0000WAVE").unwrap();

        let err = run(path.to_str().unwrap()).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("header missing"), "{}", chain);
    }
}
