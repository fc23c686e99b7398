//! Owned codepoint byte runs.
//!
//! A [`CodepointRun`] is a contiguous copy of the 1-4 bytes encoding exactly
//! one codepoint, held inline with no heap allocation. Runs produced by the
//! splitter never contain a NUL byte, since the scan stops at the first NUL.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::{codepoint_width, CodepointWidth, DecodeErrorKind};

/// An owned copy of the bytes encoding one codepoint.
///
/// Storage is a fixed 4-byte array; the width field determines how many of
/// those bytes are meaningful. `Copy`, so run sequences can be handed around
/// without allocation bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodepointRun {
    bytes: [u8; 4],
    width: CodepointWidth,
}

impl CodepointRun {
    /// Classify the start of `window` and copy the sequence into a new run.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8inspect::CodepointRun;
    ///
    /// let run = CodepointRun::from_window("é rest".as_bytes()).unwrap();
    /// assert_eq!(run.as_bytes(), &[0xC3, 0xA9]);
    /// assert_eq!(run.scalar_value(), 0xE9);
    /// ```
    pub fn from_window(window: &[u8]) -> Result<Self, DecodeErrorKind> {
        let width = codepoint_width(window)?;
        Ok(Self::new(window, width))
    }

    /// Copy `width` bytes from the front of `window`.
    ///
    /// Callers must have already classified the window; `width` is trusted.
    pub(crate) fn new(window: &[u8], width: CodepointWidth) -> Self {
        let mut bytes = [0u8; 4];
        bytes[..width.bytes()].copy_from_slice(&window[..width.bytes()]);
        Self { bytes, width }
    }

    /// The meaningful bytes of this run.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.width.bytes()]
    }

    /// Byte width of the encoded codepoint.
    #[inline]
    pub fn width(&self) -> CodepointWidth {
        self.width
    }

    /// Unpack the payload bits into the codepoint's numeric value.
    ///
    /// The run's byte length determines interpretation, not the lead byte's
    /// range: the lead byte supplies the highest-order bits and each
    /// continuation byte contributes 6 bits below it. This is a pure bit
    /// unpacking with no range checks, so a structurally-accepted overlong
    /// run yields the (small) value its bits spell out, and a malformed
    /// 4-byte run can yield a value above U+10FFFF. [`crate::strict`] is
    /// where those are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8inspect::CodepointRun;
    ///
    /// let euro = CodepointRun::from_window(&[0xE2, 0x82, 0xAC]).unwrap();
    /// assert_eq!(euro.scalar_value(), 0x20AC);
    /// ```
    pub fn scalar_value(&self) -> u32 {
        let b = &self.bytes;
        match self.width {
            CodepointWidth::One => u32::from(b[0]) & 0x7F,
            CodepointWidth::Two => {
                (u32::from(b[0]) & 0x1F) << 6 | (u32::from(b[1]) & 0x3F)
            }
            CodepointWidth::Three => {
                (u32::from(b[0]) & 0x0F) << 12
                    | (u32::from(b[1]) & 0x3F) << 6
                    | (u32::from(b[2]) & 0x3F)
            }
            CodepointWidth::Four => {
                (u32::from(b[0]) & 0x07) << 18
                    | (u32::from(b[1]) & 0x3F) << 12
                    | (u32::from(b[2]) & 0x3F) << 6
                    | (u32::from(b[3]) & 0x3F)
            }
        }
    }

    /// Pack the raw bytes themselves, most-significant-byte first.
    ///
    /// Display-only companion to [`scalar_value`](Self::scalar_value): the
    /// result is the hex dump of the run read as one integer (`0xC3A9` for
    /// "é"), not a codepoint number. The two must not be confused.
    pub fn raw_value(&self) -> u32 {
        self.as_bytes()
            .iter()
            .fold(0u32, |acc, &byte| acc << 8 | u32::from(byte))
    }

    /// The run as a `char`, if its scalar value is one.
    ///
    /// Returns `None` for structurally-accepted runs whose value lands in
    /// the surrogate range or above U+10FFFF.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.scalar_value())
    }
}
