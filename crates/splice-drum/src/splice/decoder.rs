//! `.splice` decoder.

use super::error::SpliceFormatError;
use super::header::*;
use super::reader::{Shortfall, SpliceReader};
use crate::pattern::{Pattern, Track};

impl From<Shortfall> for SpliceFormatError {
    fn from(s: Shortfall) -> Self {
        SpliceFormatError::FileTruncated {
            offset: s.offset,
            needed: s.needed,
            available: s.available,
        }
    }
}

/// Strip the null padding applied to the version field at write time.
fn trim_trailing_nulls(data: &[u8]) -> Vec<u8> {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    data[..end].to_vec()
}

/// `.splice` file decoder.
pub struct SpliceDecoder;

impl SpliceDecoder {
    /// Decode a complete pattern from raw bytes.
    ///
    /// Bytes past the declared payload boundary are ignored. Any read that crosses
    /// the end of the buffer or the payload boundary fails; no partial pattern is
    /// returned.
    pub fn decode(data: &[u8]) -> Result<Pattern, SpliceFormatError> {
        let mut reader = SpliceReader::new(data);
        let header = read_header(&mut reader)?;

        let mut tracks = Vec::new();
        while !reader.at_limit() {
            let track = read_track(&mut reader, tracks.len())?;
            tracks.push(track);
        }

        Ok(Pattern {
            version: header.version,
            tempo: header.tempo,
            tracks,
        })
    }

    /// Decode only the fixed header (magic through tempo).
    pub fn decode_header(data: &[u8]) -> Result<SpliceHeader, SpliceFormatError> {
        read_header(&mut SpliceReader::new(data))
    }

    /// Check if data starts with the `.splice` magic.
    pub fn is_splice(data: &[u8]) -> bool {
        data.starts_with(SPLICE_MAGIC)
    }
}

/// Decode a `.splice` buffer. See [`SpliceDecoder::decode`].
pub fn decode(data: &[u8]) -> Result<Pattern, SpliceFormatError> {
    SpliceDecoder::decode(data)
}

/// Read magic through tempo, leaving the reader restricted to the payload.
fn read_header(reader: &mut SpliceReader<'_>) -> Result<SpliceHeader, SpliceFormatError> {
    let magic = reader.read_array::<6>().map_err(|_| SpliceFormatError::InvalidMagic {
        found: reader_prefix(reader),
    })?;
    if &magic != SPLICE_MAGIC {
        return Err(SpliceFormatError::InvalidMagic {
            found: magic.to_vec(),
        });
    }

    reader.skip(SPLICE_RESERVED_LEN)?;

    let payload_len = reader.read_u8()?;
    let declared = payload_len as usize;
    if declared > reader.remaining() {
        return Err(SpliceFormatError::PayloadLengthExceedsFile {
            declared,
            available: reader.remaining(),
        });
    }
    reader.restrict(declared);

    let version = trim_trailing_nulls(reader.read_bytes(SPLICE_VERSION_LEN)?);
    let tempo = reader.read_f32_le()?;

    Ok(SpliceHeader {
        payload_len,
        version,
        tempo,
    })
}

/// Whatever bytes remain when the magic itself is cut short.
fn reader_prefix(reader: &mut SpliceReader<'_>) -> Vec<u8> {
    let n = reader.remaining();
    reader.read_bytes(n).map(<[u8]>::to_vec).unwrap_or_default()
}

fn read_track(
    reader: &mut SpliceReader<'_>,
    track_index: usize,
) -> Result<Track, SpliceFormatError> {
    let truncated = |s: Shortfall| SpliceFormatError::TrackTruncated {
        track_index,
        offset: s.offset,
        needed: s.needed,
        available: s.available,
    };

    // Byte 0 is the id; bytes 1-3 are reserved
    let id_block = reader.read_array::<SPLICE_TRACK_ID_LEN>().map_err(truncated)?;
    let name_len = reader.read_u8().map_err(truncated)? as usize;
    let name = reader.read_bytes(name_len).map_err(truncated)?.to_vec();
    let steps = reader.read_array::<SPLICE_STEP_COUNT>().map_err(truncated)?;

    Ok(Track {
        id: id_block[0],
        name,
        steps,
    })
}
