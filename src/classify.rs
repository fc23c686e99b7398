//! Lead-byte classification for UTF-8 codepoint widths.
//!
//! UTF-8 is a variable-width encoding that uses 1-4 bytes per codepoint:
//!
//! | Bytes | First byte    | Continuation bytes | Code point range     |
//! |-------|---------------|-------------------|----------------------|
//! | 1     | `0xxxxxxx`    | -                 | U+0000 - U+007F      |
//! | 2     | `110xxxxx`    | `10xxxxxx`        | U+0080 - U+07FF      |
//! | 3     | `1110xxxx`    | `10xxxxxx` × 2    | U+0800 - U+FFFF      |
//! | 4     | `11110xxx`    | `10xxxxxx` × 3    | U+10000 - U+10FFFF   |
//!
//! Classification is purely byte-pattern-based: lead byte ranges select the
//! width, and each required continuation byte must have its top two bits
//! equal to `10`. Overlong encodings, surrogates, and out-of-range
//! codepoints pass classification; rejecting those is the [`crate::strict`]
//! module's job.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte width of one encoded codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CodepointWidth {
    /// Single-byte (ASCII) codepoint.
    One,
    /// Two-byte codepoint (U+0080 - U+07FF).
    Two,
    /// Three-byte codepoint (U+0800 - U+FFFF).
    Three,
    /// Four-byte codepoint (U+10000 - U+10FFFF).
    Four,
}

impl CodepointWidth {
    /// Number of bytes this width spans.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl From<CodepointWidth> for usize {
    #[inline]
    fn from(width: CodepointWidth) -> usize {
        width.bytes()
    }
}

/// The specific type of decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecodeErrorKind {
    /// A byte that cannot start any sequence appeared where a lead byte was
    /// expected: 0x80-0xBF (continuation-only bytes) or 0xF8-0xFF (the
    /// abandoned 5/6-byte forms).
    InvalidLeadByte,

    /// A byte outside the range 0x80-0xBF appeared where a continuation byte
    /// was expected.
    MalformedContinuation,

    /// A multi-byte sequence was cut off by the end of input.
    TruncatedSequence,

    /// A codepoint was encoded using more bytes than necessary.
    /// Only produced by [`crate::strict`].
    OverlongEncoding,

    /// A surrogate codepoint (U+D800-U+DFFF) was encoded.
    /// Only produced by [`crate::strict`].
    SurrogateCodepoint,

    /// A codepoint above U+10FFFF was encoded.
    /// Only produced by [`crate::strict`].
    OutOfRangeCodepoint,
}

impl core::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLeadByte => write!(f, "invalid UTF-8 lead byte"),
            Self::MalformedContinuation => write!(f, "malformed UTF-8 continuation byte"),
            Self::TruncatedSequence => write!(f, "truncated UTF-8 sequence"),
            Self::OverlongEncoding => write!(f, "overlong UTF-8 encoding"),
            Self::SurrogateCodepoint => write!(f, "surrogate codepoint in UTF-8"),
            Self::OutOfRangeCodepoint => write!(f, "codepoint above U+10FFFF"),
        }
    }
}

/// Decode failure with the absolute byte offset where it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodeError {
    /// The byte offset where the error occurred (0-indexed).
    pub offset: usize,
    /// The kind of decode error.
    pub kind: DecodeErrorKind,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

/// Classify the width of the codepoint starting at `window[0]`.
///
/// `window` is a read-only view of up to 4 bytes starting at some offset in
/// a larger buffer; it may be shorter near the buffer's end. Nothing past
/// the window is ever read.
///
/// Returns the width of the sequence beginning there, or the kind of
/// structural violation found. The error carries no offset; callers that
/// scan a buffer attach the absolute position (see [`crate::split`]).
///
/// # Examples
///
/// ```
/// use utf8inspect::{codepoint_width, CodepointWidth, DecodeErrorKind};
///
/// assert_eq!(codepoint_width(b"A"), Ok(CodepointWidth::One));
/// assert_eq!(codepoint_width("é".as_bytes()), Ok(CodepointWidth::Two));
///
/// // Bare continuation byte
/// assert_eq!(codepoint_width(&[0x80]), Err(DecodeErrorKind::InvalidLeadByte));
///
/// // 2-byte lead with nothing after it
/// assert_eq!(codepoint_width(&[0xC2]), Err(DecodeErrorKind::TruncatedSequence));
/// ```
pub fn codepoint_width(window: &[u8]) -> Result<CodepointWidth, DecodeErrorKind> {
    let lead = match window.first() {
        Some(&b) => b,
        None => return Err(DecodeErrorKind::TruncatedSequence),
    };

    let width = match lead {
        // ASCII, first 128 codepoints
        0x00..=0x7F => return Ok(CodepointWidth::One),
        // Continuation bytes appearing as lead: invalid
        0x80..=0xBF => return Err(DecodeErrorKind::InvalidLeadByte),
        // 2-byte sequence: 1920 codepoints
        0xC0..=0xDF => CodepointWidth::Two,
        // 3-byte sequence: 61440 codepoints
        0xE0..=0xEF => CodepointWidth::Three,
        // 4-byte sequence: 1048576 codepoints
        0xF0..=0xF7 => CodepointWidth::Four,
        // 5/6-byte forms were removed from UTF-8 in 2003
        0xF8..=0xFF => return Err(DecodeErrorKind::InvalidLeadByte),
    };

    if window.len() < width.bytes() {
        return Err(DecodeErrorKind::TruncatedSequence);
    }

    for &byte in &window[1..width.bytes()] {
        if !is_continuation_byte(byte) {
            return Err(DecodeErrorKind::MalformedContinuation);
        }
    }

    Ok(width)
}

/// Check if a byte is a valid UTF-8 continuation byte (0x80-0xBF).
#[inline(always)]
pub(crate) fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}
