//! # utf8inspect
//!
//! UTF-8 codepoint splitting and byte-level diagnostics.
//!
//! This crate decodes a byte buffer claimed to be UTF-8 into a sequence of
//! per-codepoint byte runs, validating well-formedness along the way, and
//! exposes per-run metadata (byte width, raw bytes, numeric codepoint value)
//! for diagnostic display.
//!
//! ## Module Organization
//!
//! - [`classify`] - Lead-byte classification into codepoint widths
//! - [`split`] - Splitting a buffer into owned codepoint runs
//! - [`run`] - Per-run scalar-value and raw-byte computations
//! - [`strict`] - Opt-in overlong/surrogate/range validation
//!
//! ## Quick Start
//!
//! ```
//! use utf8inspect::split_codepoints;
//!
//! let result = split_codepoints("héllo".as_bytes(), usize::MAX).unwrap();
//!
//! assert_eq!(result.count(), 5);
//! assert_eq!(result.max_width(), 2);
//! assert_eq!(result.runs()[1].scalar_value(), 0xE9);
//! ```
//!
//! The splitter is fail-fast: any structurally invalid byte aborts the whole
//! call with a [`DecodeError`] carrying the absolute byte offset.
//!
//! ```
//! use utf8inspect::{split_codepoints, DecodeErrorKind};
//!
//! // 2-byte lead with no continuation byte
//! let err = split_codepoints(&[b'A', 0xC2], usize::MAX).unwrap_err();
//! assert_eq!(err.offset, 1);
//! assert_eq!(err.kind, DecodeErrorKind::TruncatedSequence);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Standard library support
//! - `serde` - Enable serialization/deserialization support
//! - `cli` - Build the `utf8inspect` diagnostic binary

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

// =============================================================================
// Core modules
// =============================================================================

/// Lead-byte classification into codepoint widths.
pub mod classify;

/// Owned codepoint byte runs and their metadata.
pub mod run;

/// Splitting a buffer into codepoint runs.
pub mod split;

/// Opt-in overlong/surrogate/range validation.
pub mod strict;

// =============================================================================
// Public re-exports (convenience)
// =============================================================================

pub use classify::{codepoint_width, CodepointWidth, DecodeError, DecodeErrorKind};
pub use run::CodepointRun;
pub use split::{count_codepoints, split_codepoints, DecodeResult};
pub use strict::validate_strict;
