//! deflate-codec
//!
//! Bounded-buffer, stateful compress/decompress over the native libdeflate
//! engine (zlib-wrapped deflate streams, wire-compatible bit for bit).
//!
//! The engine is opaque: this crate manages handle allocation and lifetime,
//! buffer-size queries, and the pack/unpack call contracts. There is no
//! internal buffering and no streaming state carried across calls.

pub mod codec;
pub mod constants;
pub mod types;

pub use codec::ZlibCodec;
pub use types::{CodecError, CompressionLevel, UnpackError};
