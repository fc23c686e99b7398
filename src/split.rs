//! Splitting a buffer into codepoint runs.
//!
//! The splitter drives [`codepoint_width`] left to right across a buffer,
//! copying each classified sequence into an owned [`CodepointRun`] and
//! tracking summary statistics. Scanning ends at the first NUL byte, at the
//! `max_len` bound, or at the slice's end, whichever comes first; all three
//! are ordinary end-of-input, not errors.
//!
//! Invalid input is fail-fast: the first structural violation aborts the
//! whole call with a [`DecodeError`] and the accumulated runs are discarded.
//! Callers that want to render the valid prefix can re-split
//! `&input[..err.offset]`, which cannot fail.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::{codepoint_width, DecodeError};
use crate::run::CodepointRun;

/// The ordered codepoint runs split out of one buffer, plus summary stats.
///
/// The runs partition the consumed prefix of the input: they appear in input
/// order with no gaps or overlaps, and their widths sum to the number of
/// bytes consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodeResult {
    runs: Vec<CodepointRun>,
    max_width: usize,
}

impl DecodeResult {
    /// The runs, in input order.
    #[inline]
    pub fn runs(&self) -> &[CodepointRun] {
        &self.runs
    }

    /// Number of codepoints decoded.
    #[inline]
    pub fn count(&self) -> usize {
        self.runs.len()
    }

    /// Largest byte width seen across the runs; 0 when no runs were decoded.
    #[inline]
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Total bytes consumed from the input.
    pub fn bytes_consumed(&self) -> usize {
        self.runs.iter().map(|run| run.width().bytes()).sum()
    }

    /// Whether every decoded codepoint was a single byte.
    ///
    /// False for an empty result; "all ASCII" is a statement about runs that
    /// exist.
    #[inline]
    pub fn is_ascii_only(&self) -> bool {
        self.max_width == 1
    }

    /// Consume the result, yielding the owned runs.
    pub fn into_runs(self) -> Vec<CodepointRun> {
        self.runs
    }
}

/// Split `input` into codepoint runs, scanning at most `max_len` bytes.
///
/// Scanning stops at the first NUL byte, after `max_len` bytes, or at the
/// slice end. Pass `usize::MAX` to scan the whole slice. The `max_len`
/// bound is hard: a multi-byte sequence straddling it is reported as
/// [`TruncatedSequence`](crate::DecodeErrorKind::TruncatedSequence), never
/// read past.
///
/// Errors carry the offset of the first byte of the sequence that failed to
/// decode.
///
/// # Examples
///
/// ```
/// use utf8inspect::split_codepoints;
///
/// let result = split_codepoints("A€😀".as_bytes(), usize::MAX).unwrap();
/// assert_eq!(result.count(), 3);
/// assert_eq!(result.max_width(), 4);
/// assert_eq!(result.bytes_consumed(), 8);
/// ```
pub fn split_codepoints(input: &[u8], max_len: usize) -> Result<DecodeResult, DecodeError> {
    let bound = input.len().min(max_len);
    let mut runs = Vec::new();
    let mut max_width = 0;
    let mut offset = 0;

    while offset < bound && input[offset] != 0 {
        let window = &input[offset..bound];
        let width = codepoint_width(window).map_err(|kind| DecodeError { offset, kind })?;

        runs.push(CodepointRun::new(window, width));
        max_width = max_width.max(width.bytes());
        offset += width.bytes();
    }

    Ok(DecodeResult { runs, max_width })
}

/// Count the codepoints in `input` without allocating runs.
///
/// Same scan and same fail-fast behavior as [`split_codepoints`]; an empty
/// buffer (or one starting with NUL) counts as `Ok(0)`, which is distinct
/// from any error.
///
/// # Examples
///
/// ```
/// use utf8inspect::count_codepoints;
///
/// assert_eq!(count_codepoints("日本語".as_bytes(), usize::MAX), Ok(3));
/// assert_eq!(count_codepoints(b"", usize::MAX), Ok(0));
/// assert!(count_codepoints(&[0x80], usize::MAX).is_err());
/// ```
pub fn count_codepoints(input: &[u8], max_len: usize) -> Result<usize, DecodeError> {
    let bound = input.len().min(max_len);
    let mut count = 0;
    let mut offset = 0;

    while offset < bound && input[offset] != 0 {
        let width = codepoint_width(&input[offset..bound])
            .map_err(|kind| DecodeError { offset, kind })?;
        count += 1;
        offset += width.bytes();
    }

    Ok(count)
}
