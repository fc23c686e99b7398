//! End-to-end tests for codepoint splitting through the public API.

use proptest::prelude::*;
use utf8inspect::{
    codepoint_width, count_codepoints, split_codepoints, validate_strict, CodepointWidth,
    DecodeErrorKind,
};

// ============================================================================
// Decoding known inputs
// ============================================================================

#[test]
fn ascii_input_one_run_per_byte() {
    let input = b"The quick brown fox";
    let result = split_codepoints(input, usize::MAX).unwrap();

    assert_eq!(result.count(), input.len());
    assert_eq!(result.max_width(), 1);
    for (run, &byte) in result.runs().iter().zip(input.iter()) {
        assert_eq!(run.width(), CodepointWidth::One);
        assert_eq!(run.scalar_value(), u32::from(byte));
    }
}

#[test]
fn known_codepoint_values() {
    // é, €, and an emoji: one codepoint of each multi-byte width
    let cases: [(&[u8], u32); 3] = [
        (&[0xC3, 0xA9], 0xE9),
        (&[0xE2, 0x82, 0xAC], 0x20AC),
        (&[0xF0, 0x9F, 0x98, 0x80], 0x1F600),
    ];

    for (bytes, expected) in cases {
        let result = split_codepoints(bytes, usize::MAX).unwrap();
        assert_eq!(result.count(), 1);
        assert_eq!(result.runs()[0].scalar_value(), expected);
        assert_eq!(result.runs()[0].as_bytes(), bytes);
    }
}

#[test]
fn mixed_width_statistics() {
    let input = "x½€𐍈y".as_bytes();
    let result = split_codepoints(input, usize::MAX).unwrap();

    assert_eq!(result.count(), 5);
    assert_eq!(result.max_width(), 4);
    assert_eq!(result.bytes_consumed(), input.len());
}

#[test]
fn empty_and_nul_terminated_inputs() {
    for input in [&b""[..], &[0x00][..], &[0x00, 0xFF][..]] {
        let result = split_codepoints(input, usize::MAX).unwrap();
        assert_eq!(result.count(), 0);
        assert_eq!(result.max_width(), 0);
        assert_eq!(count_codepoints(input, usize::MAX), Ok(0));
    }
}

#[test]
fn decoding_is_idempotent() {
    let input = "stateless déjà vu 🌀".as_bytes();
    assert_eq!(
        split_codepoints(input, usize::MAX).unwrap(),
        split_codepoints(input, usize::MAX).unwrap()
    );
}

// ============================================================================
// Rejecting malformed inputs
// ============================================================================

#[test]
fn truncated_two_byte_lead_is_not_width_one() {
    assert_eq!(
        codepoint_width(&[0xC2]),
        Err(DecodeErrorKind::TruncatedSequence)
    );

    let err = split_codepoints(&[0xC2], usize::MAX).unwrap_err();
    assert_eq!(err.offset, 0);
    assert_eq!(err.kind, DecodeErrorKind::TruncatedSequence);
}

#[test]
fn ascii_in_continuation_position() {
    let err = split_codepoints(&[0xE0, 0x41, 0x80], usize::MAX).unwrap_err();
    assert_eq!(err.kind, DecodeErrorKind::MalformedContinuation);
}

#[test]
fn error_offset_is_absolute() {
    let mut input = "café".as_bytes().to_vec();
    let lead_of_invalid = input.len();
    input.push(0xF9);

    let err = split_codepoints(&input, usize::MAX).unwrap_err();
    assert_eq!(err.offset, lead_of_invalid);
    assert_eq!(err.kind, DecodeErrorKind::InvalidLeadByte);
}

#[test]
fn count_reports_error_not_zero() {
    // Invalid input and empty input must stay distinguishable
    assert_eq!(count_codepoints(b"", usize::MAX), Ok(0));
    assert!(count_codepoints(&[0x80], usize::MAX).is_err());
}

// ============================================================================
// Structural acceptance vs strict validation
// ============================================================================

#[test]
fn structural_engine_accepts_what_strict_rejects() {
    // Overlong NUL, encoded surrogate, value above U+10FFFF: all fit the
    // lead/continuation byte shape
    let cases: [(&[u8], DecodeErrorKind); 3] = [
        (&[0xC0, 0x80], DecodeErrorKind::OverlongEncoding),
        (&[0xED, 0xA0, 0x80], DecodeErrorKind::SurrogateCodepoint),
        (&[0xF4, 0x90, 0x80, 0x80], DecodeErrorKind::OutOfRangeCodepoint),
    ];

    for (bytes, expected_kind) in cases {
        assert!(split_codepoints(bytes, usize::MAX).is_ok(), "{:02X?}", bytes);
        let err = validate_strict(bytes, usize::MAX).unwrap_err();
        assert_eq!(err.kind, expected_kind, "{:02X?}", bytes);
    }
}

#[test]
fn strict_accepts_the_last_valid_codepoint() {
    assert!(validate_strict(&[0xF4, 0x8F, 0xBF, 0xBF], usize::MAX).is_ok());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Any Rust string (NUL-free, since NUL ends the scan) splits cleanly
    /// and agrees with the standard library's view of its chars.
    #[test]
    fn valid_strings_split_cleanly(s in "\\PC*") {
        let result = split_codepoints(s.as_bytes(), usize::MAX).unwrap();

        prop_assert_eq!(result.count(), s.chars().count());
        prop_assert_eq!(
            count_codepoints(s.as_bytes(), usize::MAX).unwrap(),
            result.count()
        );
        prop_assert!(validate_strict(s.as_bytes(), usize::MAX).is_ok());

        let mut reassembled = Vec::new();
        for (run, ch) in result.runs().iter().zip(s.chars()) {
            prop_assert_eq!(run.scalar_value(), u32::from(ch));
            prop_assert_eq!(run.width().bytes(), ch.len_utf8());
            reassembled.extend_from_slice(run.as_bytes());
        }
        prop_assert_eq!(reassembled, s.as_bytes());
    }

    /// Splitting and counting always agree, on success and on failure.
    #[test]
    fn split_and_count_agree(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        match (split_codepoints(&input, usize::MAX), count_codepoints(&input, usize::MAX)) {
            (Ok(result), Ok(count)) => prop_assert_eq!(result.count(), count),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "disagreement: {:?} vs {:?}", a, b),
        }
    }

    /// On success, the runs partition exactly the consumed prefix.
    #[test]
    fn runs_partition_consumed_prefix(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        if let Ok(result) = split_codepoints(&input, usize::MAX) {
            let consumed = result.bytes_consumed();
            prop_assert!(consumed <= input.len());

            let mut reassembled = Vec::new();
            for run in result.runs() {
                reassembled.extend_from_slice(run.as_bytes());
            }
            prop_assert_eq!(&reassembled[..], &input[..consumed]);

            // The scan stopped for a reason: NUL or end of input
            prop_assert!(consumed == input.len() || input[consumed] == 0);
        }
    }

    /// Strict acceptance implies the standard library accepts the same
    /// prefix.
    #[test]
    fn strict_matches_std(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        if validate_strict(&input, usize::MAX).is_ok() {
            let consumed = split_codepoints(&input, usize::MAX)
                .unwrap()
                .bytes_consumed();
            prop_assert!(std::str::from_utf8(&input[..consumed]).is_ok());
        }
    }

    /// A max_len bound never lets the scan consume past it.
    #[test]
    fn max_len_is_respected(
        input in proptest::collection::vec(any::<u8>(), 0..256),
        max_len in 0usize..300,
    ) {
        if let Ok(result) = split_codepoints(&input, max_len) {
            prop_assert!(result.bytes_consumed() <= max_len);
        }
    }
}
