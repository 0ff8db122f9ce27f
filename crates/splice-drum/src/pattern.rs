//! Pattern and track value types.
//!
//! Version and name fields hold the raw bytes from the file. They are usually ASCII,
//! but nothing on the wire requires UTF-8, so text conversion happens only when a
//! pattern is displayed.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::splice::SPLICE_STEP_COUNT;

/// Raw step bytes of a track (0 = rest, 1 = hit; other values are kept as-is).
pub type Steps = [u8; SPLICE_STEP_COUNT];

/// One instrument lane of a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track identifier (one byte on disk).
    pub id: u8,
    /// Instrument name bytes (at most 255 when encoded).
    #[serde(with = "text_bytes")]
    pub name: Vec<u8>,
    /// The 16-step sequence.
    pub steps: Steps,
}

impl Track {
    /// Create a track from raw step bytes.
    pub fn new(id: u8, name: impl Into<Vec<u8>>, steps: Steps) -> Self {
        Self {
            id,
            name: name.into(),
            steps,
        }
    }

    /// Create a track from hit flags.
    pub fn from_hits(id: u8, name: impl Into<Vec<u8>>, hits: &[bool; SPLICE_STEP_COUNT]) -> Self {
        let mut steps = [0u8; SPLICE_STEP_COUNT];
        for (step, &hit) in steps.iter_mut().zip(hits.iter()) {
            *step = u8::from(hit);
        }
        Self::new(id, name, steps)
    }

    /// Whether the step at `index` is a hit. Out-of-range indices are never hits.
    pub fn is_hit(&self, index: usize) -> bool {
        self.steps.get(index).is_some_and(|&s| s == 1)
    }

    /// Number of steps holding a hit.
    pub fn hit_count(&self) -> usize {
        self.steps.iter().filter(|&&s| s == 1).count()
    }

    /// Name as text, with invalid UTF-8 replaced by U+FFFD.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Number of bytes this track occupies in the payload.
    pub fn encoded_len(&self) -> usize {
        crate::splice::SPLICE_TRACK_HEADER_LEN + self.name.len() + SPLICE_STEP_COUNT
    }
}

/// A decoded `.splice` drum pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Hardware version the pattern was saved with, without null padding.
    #[serde(with = "text_bytes")]
    pub version: Vec<u8>,
    /// Tempo in BPM.
    pub tempo: f32,
    /// Tracks in on-disk order.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Pattern {
    /// Create a pattern with no tracks.
    pub fn new(version: impl Into<Vec<u8>>, tempo: f32) -> Self {
        Self {
            version: version.into(),
            tempo,
            tracks: Vec::new(),
        }
    }

    /// Append a track.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Builder-style variant of [`Pattern::add_track`].
    pub fn with_track(mut self, track: Track) -> Self {
        self.add_track(track);
        self
    }

    /// Equality with tempos compared bit-for-bit, so a NaN tempo equals itself.
    pub fn bitwise_eq(&self, other: &Pattern) -> bool {
        self.version == other.version
            && self.tempo.to_bits() == other.tempo.to_bits()
            && self.tracks == other.tracks
    }

    /// Version as text, with invalid UTF-8 replaced by U+FFFD.
    pub fn version_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.version)
    }

    /// First track with the given id, if any.
    pub fn track(&self, id: u8) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }
}

/// Serde representation for byte-string fields: a JSON string when the bytes are
/// UTF-8, an array of byte values otherwise. Both forms are accepted on input.
mod text_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        match std::str::from_utf8(bytes) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.collect_seq(bytes),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Bytes(Vec<u8>),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text.into_bytes(),
            Repr::Bytes(bytes) => bytes,
        })
    }
}
