//! Mock block engines for adapter tests.
//!
//! The mock wire format is a sequence of frames: a length byte followed
//! by that many literal payload bytes. A zero length byte terminates the
//! stream. The length byte `0xEE` is a poison marker that makes the
//! engine report a failure, so tests can drive the error paths on demand.

use ferrobrot_core::{
    BlockCompressor, BlockDecompressor, Error, Result, StepProgress, StepStatus,
};

/// Poison frame header recognized by [`ChunkedDecoder`].
pub const POISON: u8 = 0xEE;

/// Maximum payload carried by one mock frame.
pub const MAX_FRAME: usize = 0xED;

/// Mock decompressor for the frame format.
pub struct ChunkedDecoder {
    /// Payload bytes of the current frame still expected from input.
    remaining: usize,
    /// Decoded bytes not yet handed to the caller.
    pending: Vec<u8>,
    finished: bool,
    total: usize,
}

impl ChunkedDecoder {
    pub fn new() -> Self {
        ChunkedDecoder {
            remaining: 0,
            pending: Vec::new(),
            finished: false,
            total: 0,
        }
    }
}

impl BlockDecompressor for ChunkedDecoder {
    fn step(&mut self, input: &[u8], output: &mut [u8]) -> Result<StepProgress> {
        let mut consumed = 0usize;
        let mut produced = 0usize;

        loop {
            if !self.pending.is_empty() {
                let n = self.pending.len().min(output.len() - produced);
                output[produced..produced + n].copy_from_slice(&self.pending[..n]);
                self.pending.drain(..n);
                produced += n;
                self.total += n;
                if !self.pending.is_empty() {
                    return Ok(StepProgress {
                        consumed,
                        produced,
                        status: StepStatus::NeedsMoreOutput,
                    });
                }
            }

            if self.finished {
                return Ok(StepProgress {
                    consumed,
                    produced,
                    status: StepStatus::Done,
                });
            }

            if self.remaining > 0 {
                let n = self.remaining.min(input.len() - consumed);
                if n == 0 {
                    return Ok(StepProgress {
                        consumed,
                        produced,
                        status: StepStatus::NeedsMoreInput,
                    });
                }
                self.pending.extend_from_slice(&input[consumed..consumed + n]);
                consumed += n;
                self.remaining -= n;
                continue;
            }

            let Some(&header) = input.get(consumed) else {
                return Ok(StepProgress {
                    consumed,
                    produced,
                    status: StepStatus::NeedsMoreInput,
                });
            };
            consumed += 1;
            match header {
                0 => self.finished = true,
                POISON => return Err(Error::engine("poisoned frame")),
                len => self.remaining = len as usize,
            }
        }
    }

    fn total_out(&self) -> usize {
        self.total
    }
}

/// Mock compressor emitting the frame format.
///
/// Behaves like a real block engine: plain steps emit only complete
/// blocks, a flush also emits the partial block, and the final step
/// appends the end-of-stream marker.
pub struct ChunkedEncoder {
    block: usize,
    staged: Vec<u8>,
    finished: bool,
}

impl ChunkedEncoder {
    pub fn new(block: usize) -> Self {
        assert!(block > 0 && block <= MAX_FRAME);
        ChunkedEncoder {
            block,
            staged: Vec::new(),
            finished: false,
        }
    }

    fn emit_frame(out: &mut Vec<u8>, payload: &[u8]) {
        out.push(payload.len() as u8);
        out.extend_from_slice(payload);
    }
}

impl BlockCompressor for ChunkedEncoder {
    fn input_block_size(&self) -> usize {
        self.block
    }

    fn copy_input(&mut self, input: &[u8]) {
        self.staged.extend_from_slice(input);
    }

    fn step(&mut self, is_last: bool, force_flush: bool) -> Result<Vec<u8>> {
        if self.finished {
            return Ok(Vec::new());
        }
        if self.staged.contains(&POISON) {
            return Err(Error::engine("unencodable input"));
        }

        let mut out = Vec::new();
        while self.staged.len() >= self.block {
            let rest = self.staged.split_off(self.block);
            Self::emit_frame(&mut out, &self.staged);
            self.staged = rest;
        }
        if (is_last || force_flush) && !self.staged.is_empty() {
            let partial = std::mem::take(&mut self.staged);
            Self::emit_frame(&mut out, &partial);
        }
        if is_last {
            out.push(0);
            self.finished = true;
        }
        Ok(out)
    }
}

/// Encode `payload` into the mock frame format in `frame`-sized chunks.
pub fn encode_frames(payload: &[u8], frame: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for chunk in payload.chunks(frame) {
        out.push(chunk.len() as u8);
        out.extend_from_slice(chunk);
    }
    out.push(0);
    out
}
