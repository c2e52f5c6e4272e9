//! src/codec.rs
//! Bounded-buffer zlib codec over the native libdeflate engine.
//!
//! Design notes:
//! - One wrapper owns one compressor and one decompressor handle for its
//!   whole lifetime; raw pointers never leave this module.
//! - Each handle lives in an owning type whose `Drop` frees it exactly once;
//!   move-only ownership rules out double-free and use-after-free.
//! - `pack`/`unpack` take `&mut self`: one call at a time per instance,
//!   enforced at compile time. Independent instances need no coordination.
//! - Buffers are caller-owned and borrowed only for the call; the wrapper
//!   allocates nothing of its own on the hot path.

use std::os::raw::c_void;
use std::ptr::NonNull;

use libdeflate_sys::{
    libdeflate_alloc_compressor, libdeflate_alloc_decompressor, libdeflate_compressor,
    libdeflate_decompressor, libdeflate_free_compressor, libdeflate_free_decompressor,
    libdeflate_result_LIBDEFLATE_INSUFFICIENT_SPACE, libdeflate_result_LIBDEFLATE_SHORT_OUTPUT,
    libdeflate_result_LIBDEFLATE_SUCCESS, libdeflate_zlib_compress,
    libdeflate_zlib_compress_bound, libdeflate_zlib_decompress,
};

use crate::types::{CodecError, CompressionLevel, UnpackError};

/// Owning handle to an engine compressor. Freed exactly once on drop.
struct CompressorHandle(NonNull<libdeflate_compressor>);

impl CompressorHandle {
    fn alloc(level: CompressionLevel) -> Result<Self, CodecError> {
        let ptr = unsafe { libdeflate_alloc_compressor(level as i32) };
        NonNull::new(ptr)
            .map(Self)
            .ok_or(CodecError::AllocFailed { what: "compressor" })
    }
}

impl Drop for CompressorHandle {
    fn drop(&mut self) {
        unsafe { libdeflate_free_compressor(self.0.as_ptr()) };
    }
}

/// Owning handle to an engine decompressor. Freed exactly once on drop.
struct DecompressorHandle(NonNull<libdeflate_decompressor>);

impl DecompressorHandle {
    fn alloc() -> Result<Self, CodecError> {
        let ptr = unsafe { libdeflate_alloc_decompressor() };
        NonNull::new(ptr)
            .map(Self)
            .ok_or(CodecError::AllocFailed { what: "decompressor" })
    }
}

impl Drop for DecompressorHandle {
    fn drop(&mut self) {
        unsafe { libdeflate_free_decompressor(self.0.as_ptr()) };
    }
}

// The engine attaches no thread affinity to a handle; moving one across
// threads is sound as long as calls stay serialized, which `&mut self`
// guarantees. Neither handle type is Sync.
unsafe impl Send for CompressorHandle {}
unsafe impl Send for DecompressorHandle {}

/// Stateful compress/decompress wrapper over the engine.
///
/// Allocates both handles eagerly at construction and owns them until drop.
/// `Send` but not `Sync`: calls mutate engine-side handle state, so a shared
/// instance must sit behind a lock; two separate instances run concurrently
/// without coordination.
pub struct ZlibCodec {
    compressor: CompressorHandle,
    decompressor: DecompressorHandle,
    level: CompressionLevel,
}

impl ZlibCodec {
    /// Codec at the default level.
    pub fn new() -> Result<Self, CodecError> {
        Self::with_level(CompressionLevel::default())
    }

    /// Codec with an explicit level.
    ///
    /// Compressor first, then decompressor; if the second allocation fails
    /// the first handle is freed on the way out.
    pub fn with_level(level: CompressionLevel) -> Result<Self, CodecError> {
        let compressor = CompressorHandle::alloc(level)?;
        let decompressor = DecompressorHandle::alloc()?;
        Ok(Self {
            compressor,
            decompressor,
            level,
        })
    }

    /// The level the compressor handle was allocated with.
    pub fn level(&self) -> CompressionLevel {
        self.level
    }

    /// Worst-case compressed size for `input_len` bytes at this codec's
    /// level. Size `pack` destinations to at least this value; real output
    /// is normally smaller. Pure query, no side effects.
    pub fn max_pack_size(&self, input_len: usize) -> usize {
        unsafe { libdeflate_zlib_compress_bound(self.compressor.0.as_ptr(), input_len) }
    }

    /// Compress `src` into `dest`, returning the number of bytes written.
    ///
    /// `None` means `dest` cannot hold any valid compressed representation
    /// of `src`; that zero-write return is the engine's only failure signal
    /// for compression, and `dest` must not be interpreted as a payload in
    /// that case. `src` and `dest` must not overlap.
    pub fn pack(&mut self, dest: &mut [u8], src: &[u8]) -> Option<usize> {
        let written = unsafe {
            libdeflate_zlib_compress(
                self.compressor.0.as_ptr(),
                src.as_ptr() as *const c_void,
                src.len(),
                dest.as_mut_ptr() as *mut c_void,
                dest.len(),
            )
        };
        (written != 0).then_some(written)
    }

    /// Decompress `src` into `dest`.
    ///
    /// `Ok(n)` means `dest[..n]` holds exactly the original uncompressed
    /// bytes and `n` is the true decompressed size. On any error `dest`
    /// contents are undefined and no length is reported; the engine's
    /// partial-write count is discarded so a misleading length can never be
    /// observed.
    pub fn unpack(&mut self, dest: &mut [u8], src: &[u8]) -> Result<usize, UnpackError> {
        let mut actual = 0usize;
        let status = unsafe {
            libdeflate_zlib_decompress(
                self.decompressor.0.as_ptr(),
                src.as_ptr() as *const c_void,
                src.len(),
                dest.as_mut_ptr() as *mut c_void,
                dest.len(),
                &mut actual,
            )
        };
        match status {
            libdeflate_result_LIBDEFLATE_SUCCESS => Ok(actual),
            libdeflate_result_LIBDEFLATE_SHORT_OUTPUT => Err(UnpackError::ShortOutput),
            libdeflate_result_LIBDEFLATE_INSUFFICIENT_SPACE => Err(UnpackError::InsufficientSpace),
            // BAD_DATA, plus any status outside the documented set: the
            // output is never trusted.
            _ => Err(UnpackError::BadData),
        }
    }

    /// Compress into a freshly allocated buffer sized via [`max_pack_size`].
    pub fn pack_to_vec(&mut self, src: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; self.max_pack_size(src.len())];
        match self.pack(&mut out, src) {
            Some(n) => {
                out.truncate(n);
                out
            }
            None => unreachable!("destination sized to the compress bound"),
        }
    }

    /// Decompress into a freshly allocated buffer of `uncompressed_len`
    /// bytes. The caller supplies the original length; zlib streams do not
    /// carry it.
    pub fn unpack_to_vec(
        &mut self,
        src: &[u8],
        uncompressed_len: usize,
    ) -> Result<Vec<u8>, UnpackError> {
        let mut out = vec![0u8; uncompressed_len];
        let n = self.unpack(&mut out, src)?;
        out.truncate(n);
        Ok(out)
    }
}
