//! `.splice` encoder.

use std::io::{self, Write};

use super::error::SpliceFormatError;
use super::header::*;
use crate::pattern::{Pattern, Track};

/// `.splice` file encoder.
pub struct SpliceEncoder;

impl SpliceEncoder {
    /// Payload length for a pattern: version + tempo + every track.
    ///
    /// This is the value written to the length byte; it is always derived from the
    /// pattern contents, never carried over from a previous decode.
    pub fn payload_len(pattern: &Pattern) -> usize {
        SPLICE_MIN_PAYLOAD + pattern.tracks.iter().map(Track::encoded_len).sum::<usize>()
    }

    /// Check every fixed-width field, returning the payload length byte.
    pub fn check(pattern: &Pattern) -> Result<u8, SpliceFormatError> {
        if pattern.version.len() > SPLICE_VERSION_LEN {
            return Err(SpliceFormatError::VersionTooLong {
                len: pattern.version.len(),
                max: SPLICE_VERSION_LEN,
            });
        }

        for (track_index, track) in pattern.tracks.iter().enumerate() {
            if track.name.len() > SPLICE_MAX_NAME_LEN {
                return Err(SpliceFormatError::TrackNameTooLong {
                    track_index,
                    len: track.name.len(),
                    max: SPLICE_MAX_NAME_LEN,
                });
            }
        }

        let len = Self::payload_len(pattern);
        u8::try_from(len).map_err(|_| SpliceFormatError::PayloadTooLarge {
            len,
            max: SPLICE_MAX_PAYLOAD,
        })
    }

    /// Encode a pattern to a new buffer.
    pub fn encode(pattern: &Pattern) -> Result<Vec<u8>, SpliceFormatError> {
        let payload_len = Self::check(pattern)?;
        let mut buffer = Vec::with_capacity(SPLICE_HEADER_LEN + payload_len as usize);
        write_checked(pattern, payload_len, &mut buffer);
        Ok(buffer)
    }

    /// Encode a pattern into a writer. Nothing is written if the pattern does not fit
    /// the format.
    pub fn write<W: Write>(pattern: &Pattern, writer: &mut W) -> io::Result<()> {
        let bytes =
            Self::encode(pattern).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        writer.write_all(&bytes)
    }

    /// Compute the BLAKE3 hash of the encoded pattern.
    pub fn compute_hash(pattern: &Pattern) -> Result<String, SpliceFormatError> {
        let bytes = Self::encode(pattern)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}

/// Encode a pattern. See [`SpliceEncoder::encode`].
pub fn encode(pattern: &Pattern) -> Result<Vec<u8>, SpliceFormatError> {
    SpliceEncoder::encode(pattern)
}

/// Append a pattern whose fields have passed [`SpliceEncoder::check`].
fn write_checked(pattern: &Pattern, payload_len: u8, out: &mut Vec<u8>) {
    let header = SpliceHeader {
        payload_len,
        version: pattern.version.clone(),
        tempo: pattern.tempo,
    };
    header.write_to(out);

    for track in &pattern.tracks {
        write_track(track, out);
    }
}

fn write_track(track: &Track, out: &mut Vec<u8>) {
    out.push(track.id);
    out.extend_from_slice(&[0u8; SPLICE_TRACK_ID_LEN - 1]);
    out.push(track.name.len() as u8);
    out.extend_from_slice(&track.name);
    out.extend_from_slice(&track.steps);
}
