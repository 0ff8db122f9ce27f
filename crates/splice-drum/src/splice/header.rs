//! `.splice` file header layout and constants.

use byteorder::{ByteOrder, LittleEndian};

/// File magic identifier.
pub const SPLICE_MAGIC: &[u8; 6] = b"SPLICE";

/// Reserved bytes between the magic and the payload length.
pub const SPLICE_RESERVED_LEN: usize = 7;

/// Magic + reserved + payload length byte.
pub const SPLICE_HEADER_LEN: usize = SPLICE_MAGIC.len() + SPLICE_RESERVED_LEN + 1;

/// Fixed width of the null-padded version field.
pub const SPLICE_VERSION_LEN: usize = 32;

/// Width of the little-endian f32 tempo field.
pub const SPLICE_TEMPO_LEN: usize = 4;

/// Version + tempo, the smallest possible payload.
pub const SPLICE_MIN_PAYLOAD: usize = SPLICE_VERSION_LEN + SPLICE_TEMPO_LEN;

/// Track id + 3 reserved bytes.
pub const SPLICE_TRACK_ID_LEN: usize = 4;

/// Track id block + name length byte.
pub const SPLICE_TRACK_HEADER_LEN: usize = SPLICE_TRACK_ID_LEN + 1;

/// Steps per track.
pub const SPLICE_STEP_COUNT: usize = 16;

/// Largest payload the one-byte length field can describe.
pub const SPLICE_MAX_PAYLOAD: usize = u8::MAX as usize;

/// Largest track name the one-byte length prefix can describe.
pub const SPLICE_MAX_NAME_LEN: usize = u8::MAX as usize;

/// Fixed part of a `.splice` file: everything up to the first track.
#[derive(Debug, Clone, PartialEq)]
pub struct SpliceHeader {
    /// Payload length byte (bytes after offset 14 that belong to the pattern).
    pub payload_len: u8,
    /// Version bytes, without padding.
    pub version: Vec<u8>,
    /// Tempo in BPM.
    pub tempo: f32,
}

impl SpliceHeader {
    /// Total file length implied by the payload length byte.
    pub fn file_len(&self) -> usize {
        SPLICE_HEADER_LEN + self.payload_len as usize
    }

    /// Append the header to `out`. The version must already be known to fit its field.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        // Magic identifier
        out.extend_from_slice(SPLICE_MAGIC);

        // Reserved
        out.extend_from_slice(&[0u8; SPLICE_RESERVED_LEN]);

        out.push(self.payload_len);

        // Version (32 bytes, null-padded)
        let version_bytes = self.version.as_slice();
        let mut version_buf = [0u8; SPLICE_VERSION_LEN];
        let copy_len = version_bytes.len().min(SPLICE_VERSION_LEN);
        version_buf[..copy_len].copy_from_slice(&version_bytes[..copy_len]);
        out.extend_from_slice(&version_buf);

        let mut tempo_buf = [0u8; SPLICE_TEMPO_LEN];
        LittleEndian::write_f32(&mut tempo_buf, self.tempo);
        out.extend_from_slice(&tempo_buf);
    }
}
