//! Splice Drum - `.splice` drum machine pattern codec
//!
//! This crate reads and writes the `.splice` binary format used by a hardware drum
//! machine to store a single pattern: a hardware version string, a tempo, and an
//! ordered list of tracks, each holding a fixed 16-step sequence.
//!
//! # Features
//!
//! - **Bounds-checked decoding**: every read is checked against both the buffer and
//!   the declared payload length, so malformed files produce typed errors
//! - **Byte-exact encoding**: the payload length byte is always recomputed from content
//! - **Rendering**: `Display` for [`Pattern`] and [`Track`] produces the classic
//!   step-grid view
//!
//! # Example
//!
//! ```
//! use splice_drum::{decode, encode, Pattern, Track};
//!
//! let mut pattern = Pattern::new("0.808-alpha", 120.0);
//! pattern.add_track(Track::new(0, "kick", [1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0]));
//!
//! let bytes = encode(&pattern).unwrap();
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded, pattern);
//!
//! println!("{}", decoded);
//! ```
//!
//! # Module Structure
//!
//! - [`pattern`]: Pattern and track value types
//! - [`splice`]: Binary reader/writer and format errors
//! - [`render`]: Text rendering of patterns
//! - [`io`]: File-level decode/encode helpers

pub mod io;
pub mod pattern;
pub mod render;
pub mod splice;

// Re-export main types
pub use io::{decode_file, encode_to_file, SpliceError};
pub use pattern::{Pattern, Steps, Track};
pub use splice::{decode, encode, SpliceDecoder, SpliceEncoder, SpliceFormatError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
