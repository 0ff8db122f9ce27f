//! Export command implementation
//!
//! Decodes a pattern file and writes it as JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use super::show::load;

/// Run the export command
///
/// # Arguments
/// * `path` - Path to the `.splice` file
/// * `output` - Output JSON path (default: stdout)
/// * `pretty` - Pretty-print the JSON
///
/// # Returns
/// Exit code: 0 on success
pub fn run(path: &str, output: Option<&str>, pretty: bool) -> Result<ExitCode> {
    let pattern = load(path)?;

    let json = if pretty {
        serde_json::to_string_pretty(&pattern)?
    } else {
        serde_json::to_string(&pattern)?
    };

    match output {
        Some(out) => {
            fs::write(out, format!("{}\n", json))
                .with_context(|| format!("Failed to write JSON file: {}", out))?;
            println!(
                "{} {} -> {} ({} tracks)",
                "Exported:".green().bold(),
                path,
                out,
                pattern.tracks.len()
            );
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use splice_drum::{encode_to_file, Pattern, Track};

    #[test]
    fn export_writes_json_pattern() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("p.splice");
        let output = tmp.path().join("p.json");

        let pattern = Pattern::new("0.708-alpha", 999.0).with_track(Track::new(1, "snare", [0; 16]));
        encode_to_file(&input, &pattern).unwrap();

        let code = run(
            input.to_str().unwrap(),
            Some(output.to_str().unwrap()),
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let json = fs::read_to_string(&output).unwrap();
        let parsed: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pattern);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "0.708-alpha");
        assert_eq!(value["tracks"][0]["name"], "snare");
        assert_eq!(value["tracks"][0]["steps"].as_array().unwrap().len(), 16);
    }

    #[test]
    fn export_then_import_keeps_non_utf8_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("p.splice");
        let json = tmp.path().join("p.json");
        let output = tmp.path().join("q.splice");

        let pattern = Pattern::new(&[0xB0u8; 20][..], 120.0)
            .with_track(Track::new(0, &b"caf\xe9"[..], [1; 16]));
        encode_to_file(&input, &pattern).unwrap();

        run(input.to_str().unwrap(), Some(json.to_str().unwrap()), false).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(value["tracks"][0]["name"], serde_json::json!([99, 97, 102, 233]));

        crate::commands::import::run(json.to_str().unwrap(), output.to_str().unwrap()).unwrap();
        assert_eq!(fs::read(&output).unwrap(), fs::read(&input).unwrap());
    }
}
