//! Block compressor handle backed by the `brotli` encoder.

use brotli::enc::backward_references::BrotliEncoderMode;
use brotli::enc::encode::{BrotliEncoderOperation, BrotliEncoderStateStruct};
use brotli::enc::{BrotliEncoderParams, StandardAlloc};

use ferrobrot_core::{sizing, BlockCompressor, BrotliParams, Error, Mode, Result};

fn encoder_params(params: &BrotliParams) -> BrotliEncoderParams {
    let mut enc = BrotliEncoderParams::default();
    enc.quality = params.quality() as i32;
    enc.lgwin = params.lgwin() as i32;
    enc.lgblock = params.lgblock() as i32;
    enc.mode = match params.mode() {
        Mode::Generic => BrotliEncoderMode::BROTLI_MODE_GENERIC,
        Mode::Text => BrotliEncoderMode::BROTLI_MODE_TEXT,
        Mode::Font => BrotliEncoderMode::BROTLI_MODE_FONT,
    };
    enc
}

/// Stateful compressor handle.
///
/// Owns the encoder state and an input staging area standing in for the
/// engine ring buffer. Input staged with [`BlockCompressor::copy_input`]
/// is consumed by the next [`BlockCompressor::step`].
pub struct BrotliBlockCompressor {
    state: BrotliEncoderStateStruct<StandardAlloc>,
    params: BrotliParams,
    staged: Vec<u8>,
    finished: bool,
}

impl BrotliBlockCompressor {
    /// Create a compressor handle for the given parameters.
    pub fn new(params: &BrotliParams) -> Self {
        let mut state = BrotliEncoderStateStruct::new(StandardAlloc::default());
        state.params = encoder_params(params);
        BrotliBlockCompressor {
            state,
            params: *params,
            staged: Vec::new(),
            finished: false,
        }
    }

    /// Check whether the stream has been terminated by a final step.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl BlockCompressor for BrotliBlockCompressor {
    fn input_block_size(&self) -> usize {
        sizing::input_block_size(&self.params)
    }

    fn copy_input(&mut self, input: &[u8]) {
        self.staged.extend_from_slice(input);
    }

    fn step(&mut self, is_last: bool, force_flush: bool) -> Result<Vec<u8>> {
        if self.finished {
            return Ok(Vec::new());
        }

        let op = if is_last {
            BrotliEncoderOperation::BROTLI_OPERATION_FINISH
        } else if force_flush {
            BrotliEncoderOperation::BROTLI_OPERATION_FLUSH
        } else {
            BrotliEncoderOperation::BROTLI_OPERATION_PROCESS
        };

        let mut out = vec![0u8; sizing::max_compressed_size(&self.params, self.staged.len())];
        let mut avail_in = self.staged.len();
        let mut in_off = 0usize;
        let mut out_off = 0usize;

        loop {
            let mut avail_out = out.len() - out_off;
            let mut total_out: Option<usize> = None;
            let ok = self.state.compress_stream(
                op,
                &mut avail_in,
                &self.staged,
                &mut in_off,
                &mut avail_out,
                &mut out,
                &mut out_off,
                &mut total_out,
                &mut |_, _, _, _| (),
            );
            if !ok {
                return Err(Error::engine("compressor step failed"));
            }

            let done = if is_last {
                self.state.is_finished()
            } else {
                avail_in == 0 && !self.state.has_more_output()
            };
            if done {
                break;
            }
            if avail_out == 0 {
                // Estimate was short; grow and continue the same step.
                let grown = sizing::grown_size(out.len());
                out.resize(grown, 0);
            }
        }

        self.staged.clear();
        out.truncate(out_off);
        if is_last {
            self.finished = true;
        }
        Ok(out)
    }
}
