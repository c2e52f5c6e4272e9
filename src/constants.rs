//! src/constants.rs
//! Engine-facing compression level constants.

/// Documented level presets (i32, as passed to the compressor allocator).
pub mod levels {
    pub const NONE: i32 = 0;
    pub const VERY_LOW: i32 = 1;
    pub const LOW: i32 = 3;
    pub const DEFAULT: i32 = 6;
    pub const HIGH: i32 = 9;
    pub const VERY_HIGH: i32 = 12;
}

/// Inclusive range the engine accepts for a compressor level.
pub const MIN_LEVEL: i32 = 0;
pub const MAX_LEVEL: i32 = 12;
