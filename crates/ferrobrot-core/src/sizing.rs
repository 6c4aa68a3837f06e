//! Output buffer sizing heuristics.
//!
//! Compressed output size cannot be known in advance, so callers size
//! buffers from the estimates here and grow geometrically when the engine
//! still asks for more room. One-shot calls grow and retry internally;
//! streaming calls surface the condition to the caller instead, because
//! the adapter cannot know how much more space is needed without losing
//! already-produced bytes.

use crate::params::BrotliParams;

/// Minimum supported window size log2.
pub const MIN_WINDOW_BITS: u32 = 10;
/// Maximum supported window size log2.
pub const MAX_WINDOW_BITS: u32 = 24;
/// Minimum supported input block size log2.
pub const MIN_BLOCK_BITS: u32 = 16;
/// Maximum supported input block size log2.
pub const MAX_BLOCK_BITS: u32 = 24;
/// Maximum supported quality.
pub const MAX_QUALITY: u32 = 11;

/// Expansion factor guessed for decompression when the decoded size is
/// not recorded in the compressed data.
pub const UNKNOWN_SIZE_FACTOR: usize = 6;

/// Floor for any growable output buffer.
const MIN_GROW_SIZE: usize = 64;

/// Resolve the effective block size log2 from the configured parameters.
///
/// A configured value of `0` derives the block size from quality and
/// window: 16 normally, raised towards the window size (capped at 21)
/// for the high-quality range where larger blocks pay off.
pub fn resolved_lgblock(params: &BrotliParams) -> u32 {
    let lgblock = params.lgblock();
    if lgblock == 0 {
        let mut lgblock = MIN_BLOCK_BITS;
        if params.quality() >= 9 && params.lgwin() > lgblock {
            lgblock = params.lgwin().min(21);
        }
        lgblock
    } else {
        lgblock.clamp(MIN_BLOCK_BITS, MAX_BLOCK_BITS)
    }
}

/// The engine's input block size in bytes for the given parameters.
pub fn input_block_size(params: &BrotliParams) -> usize {
    1usize << resolved_lgblock(params)
}

/// Upper-bound estimate of the compressed size of `input_len` bytes.
///
/// Per-block worst case is the block itself plus a 1/8 + 1024 byte
/// envelope. This is a heuristic bound, not exact; callers must still
/// handle the engine asking for more output space by growing the buffer.
pub fn max_compressed_size(params: &BrotliParams, input_len: usize) -> usize {
    let block = input_block_size(params);
    let overhead = (block >> 3) + 1024;
    let blocks = input_len / block + 1;
    blocks * (block + overhead)
}

/// First guess for a decompression output buffer when the decoded size
/// is unknown.
pub fn decoded_size_guess(input_len: usize) -> usize {
    input_len
        .saturating_mul(UNKNOWN_SIZE_FACTOR)
        .max(MIN_GROW_SIZE)
}

/// Next size in the growth sequence: geometric doubling with a small
/// floor. Growth is bounded only by allocation failure, never by a
/// retry counter.
pub fn grown_size(current: usize) -> usize {
    current.saturating_mul(2).max(MIN_GROW_SIZE)
}
