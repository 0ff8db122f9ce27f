//! `.splice` binary format reader and writer.
//!
//! # Layout
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 6 | Magic `SPLICE` |
//! | 6 | 7 | Reserved (zero) |
//! | 13 | 1 | Payload length (bytes after this one) |
//! | 14 | 32 | Version, null-padded |
//! | 46 | 4 | Tempo, f32 little-endian |
//! | 50 | .. | Tracks until the payload boundary |
//!
//! Each track is a 1-byte id, 3 reserved bytes, a 1-byte name length, the name, and
//! 16 step bytes.
//!
//! The payload length byte is authoritative on read: anything after the boundary is
//! ignored, and a track that crosses it is an error.

mod decoder;
mod encoder;
mod error;
mod header;
mod reader;


pub use decoder::{decode, SpliceDecoder};
pub use encoder::{encode, SpliceEncoder};
pub use error::SpliceFormatError;
pub use header::{
    SpliceHeader, SPLICE_HEADER_LEN, SPLICE_MAGIC, SPLICE_MAX_NAME_LEN, SPLICE_MAX_PAYLOAD,
    SPLICE_MIN_PAYLOAD, SPLICE_RESERVED_LEN, SPLICE_STEP_COUNT, SPLICE_TEMPO_LEN,
    SPLICE_TRACK_HEADER_LEN, SPLICE_TRACK_ID_LEN, SPLICE_VERSION_LEN,
};
