//! One-shot buffer compression and decompression.
//!
//! Thin convenience layer driving the block engine directly, with the
//! same call pattern the streaming adapters use. For the same parameters
//! and input, [`compress`] produces byte-for-byte the output a
//! [`CompressWriter`](ferrobrot_stream::CompressWriter) writes into a
//! growable sink.

use ferrobrot_core::{
    sizing, BlockCompressor, BlockDecompressor, BrotliParams, Error, Result, StepStatus,
};
use ferrobrot_engine::{decoded_size_hint, BrotliBlockCompressor, BrotliBlockDecompressor};

/// Compress `input` in one call.
pub fn compress(params: &BrotliParams, input: &[u8]) -> Result<Vec<u8>> {
    compress_with_hint(params, input, sizing::max_compressed_size(params, input.len()))
}

/// Compress `input` with a caller-provided output capacity hint.
///
/// The hint only pre-sizes the output; an undersized hint costs a
/// reallocation, never a failure.
pub fn compress_with_hint(
    params: &BrotliParams,
    input: &[u8],
    capacity_hint: usize,
) -> Result<Vec<u8>> {
    let mut engine = BrotliBlockCompressor::new(params);
    let block = engine.input_block_size().max(1);
    let mut out = Vec::with_capacity(capacity_hint);

    for chunk in input.chunks(block) {
        engine.copy_input(chunk);
        out.extend_from_slice(&engine.step(false, false)?);
    }
    out.extend_from_slice(&engine.step(true, false)?);
    Ok(out)
}

/// Decompress `input` in one call.
///
/// The first output buffer is sized from the compressed header when
/// possible and from [`sizing::decoded_size_guess`] otherwise.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let guess =
        decoded_size_hint(input).unwrap_or_else(|| sizing::decoded_size_guess(input.len()));
    decompress_with_hint(input, guess)
}

/// Decompress `input` with a caller-provided decoded-size hint.
///
/// An undersized hint is recovered by doubling the buffer and retrying
/// the call with fresh engine state; retries are bounded only by
/// allocation failure. A genuine engine failure or a truncated stream is
/// an error.
pub fn decompress_with_hint(input: &[u8], size_hint: usize) -> Result<Vec<u8>> {
    let mut capacity = size_hint.max(1);
    loop {
        match decompress_once(input, capacity)? {
            Some(out) => return Ok(out),
            None => capacity = sizing::grown_size(capacity),
        }
    }
}

/// One decompression attempt. `None` means the output buffer was too
/// small and the caller should grow and retry.
fn decompress_once(input: &[u8], capacity: usize) -> Result<Option<Vec<u8>>> {
    let mut engine = BrotliBlockDecompressor::new();
    let mut out = vec![0u8; capacity];

    let progress = engine.step(input, &mut out)?;
    match progress.status {
        StepStatus::Done => {
            out.truncate(progress.produced);
            Ok(Some(out))
        }
        StepStatus::NeedsMoreOutput => Ok(None),
        // The whole input was presented, so wanting more means the
        // stream was cut off before completion.
        StepStatus::NeedsMoreInput => Err(Error::truncated(progress.produced)),
    }
}
