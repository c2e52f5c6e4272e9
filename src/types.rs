//! src/types.rs
//! Compression level presets and codec error types.

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::levels;

/// Compression strength preset, fixed at compressor allocation.
///
/// The engine accepts any integer level in 0..=12; these variants name the
/// documented presets. Convert a raw integer with `try_from` (checked via
/// `TryFromPrimitive`).
#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, TryFromPrimitive)]
pub enum CompressionLevel {
    None = levels::NONE,
    VeryLow = levels::VERY_LOW,
    Low = levels::LOW,
    #[default]
    Default = levels::DEFAULT,
    High = levels::HIGH,
    VeryHigh = levels::VERY_HIGH,
}

/// Fatal construction failure: the engine could not allocate a handle.
///
/// There is no recovery path; the instance is never built.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The engine allocator returned null (out of memory).
    #[error("{what} init failed: engine allocation returned null")]
    AllocFailed { what: &'static str },
}

/// Decompression outcomes other than success.
///
/// On any of these the destination contents must not be trusted, and no
/// partial length is reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum UnpackError {
    /// Input is not a valid zlib-wrapped deflate stream.
    #[error("input is not a valid compressed stream")]
    BadData,

    /// Destination filled before the stream was fully decoded.
    #[error("output buffer too small to hold decompressed data")]
    ShortOutput,

    /// Engine reported the destination cannot hold the full output.
    #[error("insufficient space in output buffer")]
    InsufficientSpace,
}
