//! Opt-in overlong/surrogate/range validation.
//!
//! The structural engine in [`crate::classify`] and [`crate::split`]
//! deliberately accepts any byte pattern that fits the lead/continuation
//! shape, including overlong encodings and encoded surrogates. This module
//! layers the remaining Unicode rules on top for callers that need strict
//! well-formedness:
//!
//! - reject encodings longer than the codepoint's minimal width
//! - reject surrogate codepoints (U+D800-U+DFFF)
//! - reject codepoints above U+10FFFF

use crate::classify::{codepoint_width, CodepointWidth, DecodeError, DecodeErrorKind};
use crate::run::CodepointRun;

/// Smallest scalar value that legitimately needs the given width.
const fn min_scalar(width: CodepointWidth) -> u32 {
    match width {
        CodepointWidth::One => 0,
        CodepointWidth::Two => 0x80,
        CodepointWidth::Three => 0x800,
        CodepointWidth::Four => 0x10000,
    }
}

/// Validate `input` against the full UTF-8 well-formedness rules.
///
/// Performs the same scan as [`crate::split_codepoints`] (NUL byte and
/// `max_len` both end it normally) and additionally rejects overlong
/// encodings, surrogates, and out-of-range codepoints. Errors point at the
/// lead byte of the offending sequence.
///
/// # Examples
///
/// ```
/// use utf8inspect::{validate_strict, DecodeErrorKind};
///
/// assert!(validate_strict("Grüße 😀".as_bytes(), usize::MAX).is_ok());
///
/// // Overlong NUL, accepted structurally but rejected here
/// let err = validate_strict(&[0xC0, 0x80], usize::MAX).unwrap_err();
/// assert_eq!(err.kind, DecodeErrorKind::OverlongEncoding);
/// ```
pub fn validate_strict(input: &[u8], max_len: usize) -> Result<(), DecodeError> {
    let bound = input.len().min(max_len);
    let mut offset = 0;

    while offset < bound && input[offset] != 0 {
        let window = &input[offset..bound];
        let width = codepoint_width(window).map_err(|kind| DecodeError { offset, kind })?;

        let value = CodepointRun::new(window, width).scalar_value();

        let kind = if value < min_scalar(width) {
            Some(DecodeErrorKind::OverlongEncoding)
        } else if (0xD800..=0xDFFF).contains(&value) {
            Some(DecodeErrorKind::SurrogateCodepoint)
        } else if value > 0x10FFFF {
            Some(DecodeErrorKind::OutOfRangeCodepoint)
        } else {
            None
        };
        if let Some(kind) = kind {
            return Err(DecodeError { offset, kind });
        }

        offset += width.bytes();
    }

    Ok(())
}
