//! Error types for the `.splice` codec.

use thiserror::Error;

/// Structural error raised while decoding or encoding a `.splice` file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpliceFormatError {
    /// The first six bytes are not `SPLICE`.
    #[error("header missing: expected 'SPLICE', got {:?}", String::from_utf8_lossy(.found))]
    InvalidMagic { found: Vec<u8> },

    /// The payload length byte claims more bytes than the file holds.
    #[error("incomplete file: payload length {declared} exceeds the {available} bytes available")]
    PayloadLengthExceedsFile { declared: usize, available: usize },

    /// A header field read ran past the end of the data.
    #[error("incomplete file: needed {needed} bytes at offset {offset}, only {available} available")]
    FileTruncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A track ran past the end of the payload.
    #[error(
        "incomplete file: track {track_index} needs {needed} bytes at offset {offset}, only {available} available"
    )]
    TrackTruncated {
        track_index: usize,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The version string does not fit its fixed-width field.
    #[error("version string is {len} bytes (maximum {max})")]
    VersionTooLong { len: usize, max: usize },

    /// A track name does not fit its one-byte length prefix.
    #[error("track {track_index} name is {len} bytes (maximum {max})")]
    TrackNameTooLong {
        track_index: usize,
        len: usize,
        max: usize,
    },

    /// The encoded payload does not fit the one-byte length field.
    #[error("payload is {len} bytes (maximum {max})")]
    PayloadTooLarge { len: usize, max: usize },
}

impl SpliceFormatError {
    /// Magic bytes mismatch.
    pub fn is_header_error(&self) -> bool {
        matches!(self, SpliceFormatError::InvalidMagic { .. })
    }

    /// Declared or actual data ended before the structure did.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            SpliceFormatError::PayloadLengthExceedsFile { .. }
                | SpliceFormatError::FileTruncated { .. }
                | SpliceFormatError::TrackTruncated { .. }
        )
    }

    /// A field was too wide for its slot on encode.
    pub fn is_field_overflow(&self) -> bool {
        matches!(
            self,
            SpliceFormatError::VersionTooLong { .. }
                | SpliceFormatError::TrackNameTooLong { .. }
                | SpliceFormatError::PayloadTooLarge { .. }
        )
    }
}
