//! Property-based tests for the `.splice` codec using proptest.
//!
//! These tests verify that encoding and decoding round-trip for arbitrary valid
//! patterns and that decoding never panics on arbitrary input.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p splice-drum --test test_splice_proptest
//! ```

use proptest::prelude::*;

use splice_drum::{decode, encode, Pattern, SpliceEncoder, Track};

// ============================================================================
// Strategies
// ============================================================================

/// Names are arbitrary bytes; nothing on the wire requires UTF-8.
fn arbitrary_track(max_name: usize) -> impl Strategy<Value = Track> {
    (
        any::<u8>(),
        prop::collection::vec(any::<u8>(), 0..=max_name),
        any::<[u8; 16]>(),
    )
        .prop_map(|(id, name, steps)| Track::new(id, name, steps))
}

/// Version bytes without trailing nulls, since those are field padding.
fn arbitrary_version() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=32).prop_map(|mut version| {
        while version.last() == Some(&0) {
            version.pop();
        }
        version
    })
}

/// Patterns whose payload fits the one-byte length field.
fn valid_pattern() -> impl Strategy<Value = Pattern> {
    (
        arbitrary_version(),
        any::<u32>(),
        prop::collection::vec(arbitrary_track(12), 0..6),
    )
        .prop_map(|(version, tempo_bits, tracks)| Pattern {
            version,
            tempo: f32::from_bits(tempo_bits),
            tracks,
        })
        .prop_filter("payload must fit in one byte", |p| {
            SpliceEncoder::payload_len(p) <= 255
        })
}

fn assert_same(a: &Pattern, b: &Pattern) -> Result<(), TestCaseError> {
    prop_assert_eq!(&a.version, &b.version);
    prop_assert_eq!(a.tempo.to_bits(), b.tempo.to_bits());
    prop_assert_eq!(&a.tracks, &b.tracks);
    Ok(())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// decode(encode(p)) reproduces p, tempo bit-for-bit.
    #[test]
    fn round_trip_preserves_pattern(pattern in valid_pattern()) {
        let bytes = encode(&pattern).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_same(&decoded, &pattern)?;
    }

    /// The length byte always matches the bytes that follow it.
    #[test]
    fn length_byte_matches_payload(pattern in valid_pattern()) {
        let bytes = encode(&pattern).unwrap();
        prop_assert_eq!(bytes[13] as usize, bytes.len() - 14);
        prop_assert_eq!(bytes[13] as usize, SpliceEncoder::payload_len(&pattern));
    }

    /// Decoding the same buffer twice gives the same pattern.
    #[test]
    fn decode_is_deterministic(pattern in valid_pattern()) {
        let bytes = encode(&pattern).unwrap();
        let first = decode(&bytes).unwrap();
        let second = decode(&bytes).unwrap();
        assert_same(&first, &second)?;
    }

    /// Any strict prefix of a valid file is rejected, never partially decoded.
    #[test]
    fn truncated_files_are_rejected(pattern in valid_pattern(), cut in any::<prop::sample::Index>()) {
        let bytes = encode(&pattern).unwrap();
        let len = cut.index(bytes.len());
        let err = decode(&bytes[..len]).unwrap_err();
        prop_assert!(err.is_truncation() || err.is_header_error(), "{:?}", err);
        if len >= 6 {
            prop_assert!(err.is_truncation(), "{:?}", err);
        }
    }

    /// Corrupting a magic byte is always a header error.
    #[test]
    fn corrupt_magic_is_rejected(
        pattern in valid_pattern(),
        pos in 0usize..6,
        flip in 1u8..=255,
    ) {
        let mut bytes = encode(&pattern).unwrap();
        bytes[pos] ^= flip;
        prop_assert!(decode(&bytes).unwrap_err().is_header_error());
    }

    /// Bytes appended after the payload never show up in the pattern.
    #[test]
    fn trailing_bytes_are_ignored(
        pattern in valid_pattern(),
        garbage in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut bytes = encode(&pattern).unwrap();
        bytes.extend_from_slice(&garbage);
        let decoded = decode(&bytes).unwrap();
        assert_same(&decoded, &pattern)?;
    }

    /// Arbitrary input never panics.
    #[test]
    fn decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let _ = decode(&data);
    }

    /// Arbitrary input behind a valid magic never panics either.
    #[test]
    fn decode_with_magic_never_panics(rest in prop::collection::vec(any::<u8>(), 0..300)) {
        let mut data = b"SPLICE".to_vec();
        data.extend_from_slice(&rest);
        let _ = decode(&data);
    }

    /// Whatever decodes successfully survives another encode/decode cycle.
    #[test]
    fn decoded_input_reencodes(rest in prop::collection::vec(any::<u8>(), 0..300)) {
        let mut data = b"SPLICE".to_vec();
        data.extend_from_slice(&rest);
        if let Ok(pattern) = decode(&data) {
            let bytes = encode(&pattern).unwrap();
            prop_assert_eq!(bytes.len(), 14 + data[13] as usize);
            let again = decode(&bytes).unwrap();
            assert_same(&again, &pattern)?;
        }
    }
}
