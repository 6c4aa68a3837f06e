//! Pull-side decompression stream.

use std::io::{self, Read};

use ferrobrot_core::{BlockDecompressor, Error, StepStatus, StreamState};
use tracing::{debug, trace};

use crate::{StreamBuffer, DEFAULT_BUFFER_SIZE};

/// A reader that decompresses data pulled from an inner reader.
///
/// Compressed bytes are staged in an internal re-buffer and fed to the
/// block engine as the caller asks for decompressed output. The engine
/// may be midway through producing output larger than the caller's
/// destination; that pending state is carried across `read` calls and no
/// new upstream data is pulled until the engine asks for input again.
///
/// [`close`](DecompressReader::close) releases the engine state
/// explicitly; dropping the reader releases the engine and the inner
/// reader regardless, but an explicit close is the primary contract.
pub struct DecompressReader<R: Read, D: BlockDecompressor> {
    inner: R,
    engine: Option<D>,
    rebuf: StreamBuffer,
    /// A `NeedsMoreOutput` answer is outstanding; the next step must see
    /// the same unconsumed input, so refills are held off.
    awaiting_output: bool,
    upstream_eof: bool,
    state: StreamState,
    failure: Option<Error>,
}

impl<R: Read, D: BlockDecompressor> DecompressReader<R, D> {
    /// Create a decompressing reader with the default re-buffer size.
    pub fn new(inner: R, engine: D) -> Self {
        Self::with_buffer_size(inner, engine, DEFAULT_BUFFER_SIZE)
    }

    /// Create a decompressing reader with the given re-buffer size.
    ///
    /// The re-buffer holds compressed data pulled from the inner reader
    /// before the engine consumes it.
    pub fn with_buffer_size(inner: R, engine: D, buffer_size: usize) -> Self {
        DecompressReader {
            inner,
            engine: Some(engine),
            rebuf: StreamBuffer::with_capacity(buffer_size),
            awaiting_output: false,
            upstream_eof: false,
            state: StreamState::Active,
            failure: None,
        }
    }

    /// Get a reference to the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Get a mutable reference to the inner reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consume the adapter and return the inner reader.
    ///
    /// Any compressed bytes already staged from the inner reader are
    /// discarded along with the engine state.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Check if the compressed stream decoded to completion.
    pub fn is_finished(&self) -> bool {
        self.state == StreamState::Finished
    }

    /// Total decompressed bytes produced so far.
    pub fn total_out(&self) -> usize {
        self.engine.as_ref().map_or(0, |e| e.total_out())
    }

    /// Release the engine state. Idempotent; any read after close fails
    /// with a "stream closed" error.
    pub fn close(&mut self) -> io::Result<()> {
        if self.state != StreamState::Closed {
            debug!(total_out = self.total_out(), "decompress stream closed");
            self.engine = None;
            self.rebuf.clear();
            self.state = StreamState::Closed;
        }
        Ok(())
    }

    fn fail(&mut self, error: Error) -> io::Error {
        self.state = StreamState::Failed;
        self.failure = Some(error.clone());
        error.into()
    }

    fn replay_failure(&self) -> io::Error {
        match &self.failure {
            Some(error) => error.clone().into(),
            None => Error::ClosedStream.into(),
        }
    }
}

impl<R: Read, D: BlockDecompressor> Read for DecompressReader<R, D> {
    fn read(&mut self, dest: &mut [u8]) -> io::Result<usize> {
        match self.state {
            StreamState::Closed => return Err(Error::ClosedStream.into()),
            StreamState::Failed => return Err(self.replay_failure()),
            StreamState::Finished => return Ok(0),
            StreamState::Active => {}
        }
        // A zero-length destination must not perturb engine state: no
        // upstream pull, no engine call.
        if dest.is_empty() {
            return Ok(0);
        }

        let mut filled = 0usize;
        while filled < dest.len() {
            if self.rebuf.is_empty() && !self.awaiting_output && !self.upstream_eof {
                let n = self.rebuf.fill_from(&mut self.inner)?;
                if n == 0 {
                    trace!("upstream end of data");
                    self.upstream_eof = true;
                }
            }

            let engine = match self.engine.as_mut() {
                Some(engine) => engine,
                None => return Err(Error::ClosedStream.into()),
            };
            let progress = match engine.step(self.rebuf.readable(), &mut dest[filled..]) {
                Ok(progress) => progress,
                Err(error) => {
                    let io_error = self.fail(error);
                    if filled > 0 {
                        // Hand back what was produced; the failure
                        // replays on the next call.
                        return Ok(filled);
                    }
                    return Err(io_error);
                }
            };
            self.rebuf.consume(progress.consumed);
            filled += progress.produced;

            match progress.status {
                StepStatus::Done => {
                    self.state = StreamState::Finished;
                    return Ok(filled);
                }
                StepStatus::NeedsMoreOutput => {
                    self.awaiting_output = true;
                    if filled > 0 {
                        return Ok(filled);
                    }
                    // Only reachable with a zero-capacity destination,
                    // which is rejected above.
                    return Err(self.fail(Error::undersized(dest.len())));
                }
                StepStatus::NeedsMoreInput => {
                    self.awaiting_output = false;
                    if self.upstream_eof && self.rebuf.is_empty() {
                        let bytes_read = engine.total_out();
                        if filled > 0 {
                            // The truncation surfaces on the next call.
                            return Ok(filled);
                        }
                        return Err(self.fail(Error::truncated(bytes_read)));
                    }
                }
            }
        }
        Ok(filled)
    }
}
