//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `inspect` and `verify`.

use serde::{Deserialize, Serialize};
use splice_drum::{SpliceError, SpliceFormatError};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Magic bytes missing
    pub const HEADER: &str = "CLI_002";
    /// File ends before the declared structure does
    pub const TRUNCATED: &str = "CLI_003";
    /// A field does not fit its fixed width
    pub const FIELD_OVERFLOW: &str = "CLI_004";
    /// Round-trip produced a different pattern
    pub const ROUND_TRIP: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Stable code for a codec error.
pub fn format_error_code(err: &SpliceFormatError) -> &'static str {
    if err.is_header_error() {
        error_codes::HEADER
    } else if err.is_truncation() {
        error_codes::TRUNCATED
    } else {
        error_codes::FIELD_OVERFLOW
    }
}

/// Converts a file-level codec error to a JSON error.
pub fn splice_error_to_json(err: &SpliceError, file: &str) -> JsonError {
    let code = match err {
        SpliceError::Io { .. } => error_codes::FILE_READ,
        SpliceError::Format(e) => format_error_code(e),
    };
    JsonError::new(code, err.to_string()).with_file(file)
}

/// Per-track summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackSummary {
    pub id: u8,
    pub name: String,
    /// Steps holding a hit
    pub hits: usize,
    /// Steps holding a byte other than 0 or 1
    pub unknown_steps: usize,
    /// Rendered step grid
    pub grid: String,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the file decoded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Inspection result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// Inspection result details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Input file path
    pub file: String,
    /// File size in bytes
    pub file_size: usize,
    /// BLAKE3 hash of the file
    pub file_hash: String,
    /// Hardware version string
    pub version: String,
    /// Tempo in BPM
    pub tempo: f32,
    /// Payload length byte as stored
    pub declared_payload_len: usize,
    /// Payload length the encoder would write
    pub computed_payload_len: usize,
    /// Bytes after the payload boundary
    pub trailing_bytes: usize,
    /// Tracks in file order
    pub tracks: Vec<TrackSummary>,
}

impl InspectOutput {
    pub fn success(result: InspectResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `verify` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOutput {
    /// Whether the pattern survived an encode/decode cycle
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Verification result (when the file decoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<VerifyResult>,
}

/// Verification result details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyResult {
    /// Input file path
    pub file: String,
    /// Decoded pattern equals the re-decoded pattern
    pub round_trip: bool,
    /// Re-encoded bytes equal the file up to the payload boundary
    pub byte_identical: bool,
    /// BLAKE3 hash of the re-encoded pattern
    pub pattern_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_serialization() {
        let err = JsonError::new(error_codes::HEADER, "header missing");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":"CLI_002","message":"header missing"}"#);

        let err = err.with_file("a.splice");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""file":"a.splice""#));
    }

    #[test]
    fn test_format_error_codes() {
        let header = SpliceFormatError::InvalidMagic { found: vec![] };
        assert_eq!(format_error_code(&header), error_codes::HEADER);

        let truncated = SpliceFormatError::PayloadLengthExceedsFile {
            declared: 10,
            available: 2,
        };
        assert_eq!(format_error_code(&truncated), error_codes::TRUNCATED);

        let overflow = SpliceFormatError::VersionTooLong { len: 40, max: 32 };
        assert_eq!(format_error_code(&overflow), error_codes::FIELD_OVERFLOW);
    }

    #[test]
    fn test_failure_output_omits_result() {
        let output = InspectOutput::failure(vec![JsonError::new(error_codes::FILE_READ, "nope")]);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("result").is_none());
    }
}
