//! File-level decode/encode helpers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pattern::Pattern;
use crate::splice::{SpliceDecoder, SpliceEncoder, SpliceFormatError};

/// Error from reading or writing a `.splice` file.
#[derive(Debug, Error)]
pub enum SpliceError {
    /// The file could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes are not a valid `.splice` file, or the pattern does not fit the format.
    #[error(transparent)]
    Format(#[from] SpliceFormatError),
}

impl SpliceError {
    /// The format error, if this is not an I/O failure.
    pub fn format_error(&self) -> Option<&SpliceFormatError> {
        match self {
            SpliceError::Format(e) => Some(e),
            SpliceError::Io { .. } => None,
        }
    }
}

/// Read a whole `.splice` file and decode it.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Pattern, SpliceError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| SpliceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SpliceDecoder::decode(&data)?)
}

/// Encode a pattern and write it to `path`. Nothing is written if encoding fails.
pub fn encode_to_file(path: impl AsRef<Path>, pattern: &Pattern) -> Result<(), SpliceError> {
    let path = path.as_ref();
    let data = SpliceEncoder::encode(pattern)?;
    fs::write(path, data).map_err(|source| SpliceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
