//! Block decompressor handle backed by the `brotli` decoder.

use brotli::enc::StandardAlloc;
use brotli_decompressor::{BrotliDecompressStream, BrotliResult, BrotliState};

use ferrobrot_core::{BlockDecompressor, Error, Result, StepProgress, StepStatus};

/// Stateful decompressor handle.
///
/// Owns the decoder state for one compressed stream. The state is an
/// exclusively-owned value with a stable address for its lifetime, so a
/// pending "needs more output" answer can be resumed by a follow-up step
/// presenting the same unconsumed input.
pub struct BrotliBlockDecompressor {
    state: BrotliState<StandardAlloc, StandardAlloc, StandardAlloc>,
    total_out: usize,
}

impl BrotliBlockDecompressor {
    /// Create a decompressor handle for one stream.
    pub fn new() -> Self {
        BrotliBlockDecompressor {
            state: BrotliState::new(
                StandardAlloc::default(),
                StandardAlloc::default(),
                StandardAlloc::default(),
            ),
            total_out: 0,
        }
    }
}

impl Default for BrotliBlockDecompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDecompressor for BrotliBlockDecompressor {
    fn step(&mut self, input: &[u8], output: &mut [u8]) -> Result<StepProgress> {
        let mut avail_in = input.len();
        let mut in_off = 0usize;
        let mut avail_out = output.len();
        let mut out_off = 0usize;

        let result = BrotliDecompressStream(
            &mut avail_in,
            &mut in_off,
            input,
            &mut avail_out,
            &mut out_off,
            output,
            &mut self.total_out,
            &mut self.state,
        );

        let status = match result {
            BrotliResult::ResultSuccess => StepStatus::Done,
            BrotliResult::NeedsMoreInput => StepStatus::NeedsMoreInput,
            BrotliResult::NeedsMoreOutput => StepStatus::NeedsMoreOutput,
            BrotliResult::ResultFailure => {
                return Err(Error::engine("invalid compressed stream"));
            }
        };

        Ok(StepProgress {
            consumed: in_off,
            produced: out_off,
            status,
        })
    }

    fn total_out(&self) -> usize {
        self.total_out
    }
}

/// Probe compressed data for a recorded decoded size.
///
/// The wire format does not store the uncompressed length, so the probe
/// answers `None` and callers size their first output buffer from
/// [`ferrobrot_core::sizing::decoded_size_guess`] instead.
pub fn decoded_size_hint(_input: &[u8]) -> Option<usize> {
    None
}
